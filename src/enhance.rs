//! Host-independent enhancement logic.
//!
//! Everything in here is plain state and string manipulation so the
//! browser adapters in `frontend/` stay thin and the behavior is
//! testable on the native target without a DOM.

pub mod article;
pub mod notify;
pub mod reveal;
pub mod scroll;
pub mod typewriter;

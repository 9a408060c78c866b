//! Scroll-position arithmetic for the navbar, progress bar and
//! parallax layers.

/// Past this many pixels the navbar picks up its blur/shadow classes.
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 100.0;

pub const NAV_SCROLLED_CLASSES: [&str; 2] = ["nav-blur", "shadow-lg"];

/// Parallax layers drift upward at half the scroll speed.
pub const PARALLAX_RATE: f64 = -0.5;

pub fn nav_is_scrolled(scroll_top: f64) -> bool {
    scroll_top > NAV_SCROLL_THRESHOLD_PX
}

pub fn parallax_offset(scroll_top: f64) -> f64 {
    scroll_top * PARALLAX_RATE
}

/// Reading progress through the document as a percentage. Documents
/// shorter than the viewport have nothing to scroll, so they report 0
/// rather than dividing by a non-positive range.
pub fn progress_percent(scroll_top: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_flips_past_threshold() {
        assert!(!nav_is_scrolled(0.0));
        assert!(!nav_is_scrolled(100.0));
        assert!(nav_is_scrolled(100.5));
    }

    #[test]
    fn parallax_drifts_against_scroll() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert_eq!(parallax_offset(200.0), -100.0);
    }

    #[test]
    fn progress_spans_zero_to_hundred() {
        assert_eq!(progress_percent(0.0, 2000.0, 800.0), 0.0);
        assert_eq!(progress_percent(600.0, 2000.0, 800.0), 50.0);
        assert_eq!(progress_percent(1200.0, 2000.0, 800.0), 100.0);
        // Overscroll (rubber-banding) stays clamped.
        assert_eq!(progress_percent(1500.0, 2000.0, 800.0), 100.0);
    }

    #[test]
    fn short_documents_report_zero() {
        assert_eq!(progress_percent(0.0, 500.0, 800.0), 0.0);
        assert_eq!(progress_percent(10.0, 800.0, 800.0), 0.0);
    }
}

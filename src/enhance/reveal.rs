//! One-shot reveal animations for elements entering the viewport.

/// Fraction of an element that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Skill bars wait until half the bar is on screen, then fill.
pub const SKILL_BAR_THRESHOLD: f64 = 0.5;
pub const SKILL_BAR_FILL_DELAY_MS: u32 = 300;

/// Cards revealed by class get a bottom margin so they fire slightly
/// before fully entering the viewport.
pub const CARD_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const CARD_REVEAL_CLASS: &str = "animate-fade-in";

/// Animation kind read from the `data-animate` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    FadeIn,
    SlideLeft,
    SlideRight,
    Scale,
}

impl RevealKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "fade-in" => Some(Self::FadeIn),
            "slide-left" => Some(Self::SlideLeft),
            "slide-right" => Some(Self::SlideRight),
            "scale" => Some(Self::Scale),
            _ => None,
        }
    }

    /// Style properties for the revealed end state. The hidden start
    /// state is the stylesheet's concern; the reveal only snaps the
    /// element to identity.
    pub fn end_state(self) -> [(&'static str, &'static str); 2] {
        let transform = match self {
            Self::FadeIn => "translateY(0)",
            Self::SlideLeft | Self::SlideRight => "translateX(0)",
            Self::Scale => "scale(1)",
        };
        [("opacity", "1"), ("transform", transform)]
    }
}

/// Initial offset state for staggered card entries; each card starts a
/// tenth of a second after the one before it.
pub fn card_entry_transition(index: usize) -> String {
    format!("all 0.6s ease-out {:.1}s", index as f64 * 0.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_kinds() {
        assert_eq!(RevealKind::parse("fade-in"), Some(RevealKind::FadeIn));
        assert_eq!(RevealKind::parse("slide-left"), Some(RevealKind::SlideLeft));
        assert_eq!(RevealKind::parse("slide-right"), Some(RevealKind::SlideRight));
        assert_eq!(RevealKind::parse("scale"), Some(RevealKind::Scale));
        assert_eq!(RevealKind::parse("wobble"), None);
        assert_eq!(RevealKind::parse(""), None);
    }

    #[test]
    fn end_states_restore_identity() {
        assert_eq!(
            RevealKind::FadeIn.end_state(),
            [("opacity", "1"), ("transform", "translateY(0)")]
        );
        assert_eq!(RevealKind::Scale.end_state()[1], ("transform", "scale(1)"));
        // Both slide directions settle on the same identity transform.
        assert_eq!(
            RevealKind::SlideLeft.end_state(),
            RevealKind::SlideRight.end_state()
        );
    }

    #[test]
    fn card_entries_stagger_by_index() {
        assert_eq!(card_entry_transition(0), "all 0.6s ease-out 0.0s");
        assert_eq!(card_entry_transition(3), "all 0.6s ease-out 0.3s");
    }
}

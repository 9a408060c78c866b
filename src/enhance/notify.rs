//! Transient notification banners.

/// Visible window before the banner slides out.
pub const DISPLAY_MS: u32 = 5_000;

/// Slide-out transition length; the node is removed once it elapses.
pub const EXIT_MS: u32 = 300;

pub const BASE_CLASS: &str =
    "fixed top-4 right-4 p-4 rounded-lg shadow-lg z-50 transform transition-transform duration-300";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn color_class(self) -> &'static str {
        match self {
            Self::Success => "bg-green-500 text-white",
            Self::Error => "bg-red-500 text-white",
            Self::Info => "bg-blue-500 text-white",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Success => "fas fa-check-circle",
            Self::Error => "fas fa-exclamation-circle",
            Self::Info => "fas fa-info-circle",
        }
    }
}

pub fn banner_class(severity: Severity) -> String {
    format!("{BASE_CLASS} {}", severity.color_class())
}

pub fn banner_html(message: &str, severity: Severity) -> String {
    format!(
        "<div class=\"flex items-center\"><i class=\"{} mr-2\"></i><span>{message}</span></div>",
        severity.icon_class()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_maps_to_distinct_colors() {
        assert!(banner_class(Severity::Success).contains("bg-green-500"));
        assert!(banner_class(Severity::Error).contains("bg-red-500"));
        assert!(banner_class(Severity::Info).contains("bg-blue-500"));
        assert!(banner_class(Severity::Error).starts_with(BASE_CLASS));
    }

    #[test]
    fn banner_markup_carries_icon_and_message() {
        let html = banner_html("Message sent successfully!", Severity::Success);
        assert!(html.contains("fa-check-circle"));
        assert!(html.contains("Message sent successfully!"));
    }
}

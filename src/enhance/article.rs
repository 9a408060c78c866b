//! Article metadata: word count, read time, table of contents and the
//! print-export document shell.

pub const WORDS_PER_MINUTE: usize = 200;

/// A table of contents is only worth rendering past this many headings.
pub const MIN_TOC_HEADINGS: usize = 3;

/// Interactive chrome removed from the cloned article before printing.
pub const PRINT_STRIP_SELECTOR: &str = ".download-section, nav, footer";

/// Copy-button glyphs and their classes, shared by the code-block overlay.
pub const COPY_ICON_HTML: &str = "<i class=\"fas fa-copy\"></i>";
pub const COPIED_ICON_HTML: &str = "<i class=\"fas fa-check\"></i>";
pub const COPY_BUTTON_CLASS: &str = "absolute top-3 right-3 bg-gray-700 hover:bg-gray-600 text-white p-2 rounded text-sm transition-all duration-200 opacity-0 group-hover:opacity-100";
pub const COPIED_BUTTON_CLASS: &str = "absolute top-3 right-3 bg-green-600 text-white p-2 rounded text-sm";
pub const COPY_RESET_DELAY_MS: u32 = 2_000;

/// How long the export trigger keeps its busy label before the original
/// text comes back, success or failure.
pub const EXPORT_RESTORE_DELAY_MS: u32 = 2_000;

/// The auxiliary window closes itself this long after print is invoked.
pub const PRINT_AUTO_CLOSE_MS: u32 = 1_000;

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Minutes at 200 words per minute, rounded up.
pub fn read_time_minutes(words: usize) -> usize {
    words.div_ceil(WORDS_PER_MINUTE)
}

pub fn format_read_time(minutes: usize) -> String {
    format!("{minutes} min read")
}

pub fn format_word_count(words: usize) -> String {
    format!("{} words", thousands(words))
}

/// Group digits with commas, e.g. 12345 -> "12,345".
fn thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H2,
    H3,
}

impl HeadingLevel {
    pub fn parse(tag_name: &str) -> Option<Self> {
        match tag_name.to_ascii_lowercase().as_str() {
            "h2" => Some(Self::H2),
            "h3" => Some(Self::H3),
            _ => None,
        }
    }
}

/// A flat entry; h3 rows are indented purely by class, there is no
/// parent-child structure behind the indentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub id: String,
    pub level: HeadingLevel,
    pub label: String,
}

/// A heading as found in the document: level, existing id (if any) and
/// text content.
pub type HeadingInfo = (HeadingLevel, Option<String>, String);

/// Build the flat TOC. Fewer than [`MIN_TOC_HEADINGS`] headings yields
/// nothing; headings without an id get a positional `section-<index>`
/// fallback the caller is expected to write back onto the element.
pub fn build_toc(headings: &[HeadingInfo]) -> Vec<TocEntry> {
    if headings.len() < MIN_TOC_HEADINGS {
        return Vec::new();
    }

    headings
        .iter()
        .enumerate()
        .map(|(index, (level, id, label))| TocEntry {
            id: match id {
                Some(id) if !id.is_empty() => id.clone(),
                _ => format!("section-{index}"),
            },
            level: *level,
            label: label.clone(),
        })
        .collect()
}

/// Render the TOC list markup. Indentation for h3 entries is visual
/// only, matching the site's utility-class styling.
pub fn render_toc(entries: &[TocEntry]) -> String {
    let mut html = String::from(
        "<div class=\"bg-blue-50 p-6 rounded-lg border-l-4 border-blue-500\">\
         <h3 class=\"text-lg font-semibold mb-4 text-blue-900\">Table of Contents</h3>\
         <ul class=\"space-y-2\">",
    );

    for entry in entries {
        let (item_class, icon) = match entry.level {
            HeadingLevel::H2 => ("font-medium", "fas fa-caret-right"),
            HeadingLevel::H3 => ("ml-4 text-sm", "fas fa-minus"),
        };
        html.push_str(&format!(
            "<li class=\"{item_class}\"><a href=\"#{id}\" class=\"text-blue-700 hover:text-blue-900\">\
             <i class=\"{icon} mr-2 text-blue-500\"></i>{label}</a></li>",
            id = entry.id,
            label = entry.label,
        ));
    }

    html.push_str("</ul></div>");
    html
}

/// A page break goes before every third top-level section, skipping the
/// first.
pub fn needs_page_break(section_index: usize) -> bool {
    section_index > 0 && section_index % 3 == 0
}

/// Self-contained document for the auxiliary print window.
pub fn print_document(title: &str, article_html: &str) -> String {
    format!(
        "<head><title>{title}</title><style>{PRINT_STYLES}</style></head><body>{article_html}</body>"
    )
}

const PRINT_STYLES: &str = "\
body { font-family: 'Times New Roman', serif; line-height: 1.4; color: #000; max-width: 210mm; margin: 20mm; font-size: 12pt; }\n\
h1, h2, h3, h4 { color: #000; }\n\
table { width: 100%; border-collapse: collapse; margin: 1rem 0; }\n\
th, td { border: 1px solid #000; padding: 0.5rem; text-align: center; }\n\
pre { background: #f8f8f8; padding: 1rem; overflow-x: hidden; white-space: pre-wrap; }\n\
@media print { body { margin: 15mm; } .page-break { page-break-before: always; } }";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_whitespace_separated_tokens() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
        assert_eq!(word_count("one two\tthree\nfour"), 4);
    }

    #[test]
    fn read_time_rounds_up() {
        let body = "word ".repeat(400);
        let words = word_count(&body);
        assert_eq!(words, 400);
        assert_eq!(read_time_minutes(words), 2);
        assert_eq!(read_time_minutes(201), 2);
        assert_eq!(read_time_minutes(1), 1);
        assert_eq!(read_time_minutes(0), 0);
    }

    #[test]
    fn display_strings_match_site_copy() {
        assert_eq!(format_read_time(2), "2 min read");
        assert_eq!(format_word_count(400), "400 words");
        assert_eq!(format_word_count(12345), "12,345 words");
        assert_eq!(format_word_count(1000000), "1,000,000 words");
    }

    #[test]
    fn toc_needs_more_than_two_headings() {
        let two = vec![
            (HeadingLevel::H2, None, "Intro".to_string()),
            (HeadingLevel::H2, None, "End".to_string()),
        ];
        assert!(build_toc(&two).is_empty());
    }

    #[test]
    fn toc_keeps_document_order_and_fallback_ids() {
        let headings = vec![
            (HeadingLevel::H2, Some("intro".to_string()), "Intro".to_string()),
            (HeadingLevel::H3, None, "Detail".to_string()),
            (HeadingLevel::H2, None, "End".to_string()),
        ];
        let toc = build_toc(&headings);
        assert_eq!(toc.len(), 3);
        assert_eq!(toc[0].id, "intro");
        assert_eq!(toc[1].id, "section-1");
        assert_eq!(toc[1].level, HeadingLevel::H3);
        assert_eq!(toc[2].id, "section-2");
    }

    #[test]
    fn toc_markup_indents_h3_visually() {
        let toc = build_toc(&[
            (HeadingLevel::H2, Some("a".to_string()), "A".to_string()),
            (HeadingLevel::H3, Some("b".to_string()), "B".to_string()),
            (HeadingLevel::H2, Some("c".to_string()), "C".to_string()),
        ]);
        let html = render_toc(&toc);
        assert!(html.contains("href=\"#a\""));
        assert!(html.contains("<li class=\"ml-4 text-sm\"><a href=\"#b\""));
        // Flat list: one <ul>, no nesting.
        assert_eq!(html.matches("<ul").count(), 1);
    }

    #[test]
    fn page_breaks_before_every_third_section() {
        let breaks: Vec<usize> = (0..10).filter(|i| needs_page_break(*i)).collect();
        assert_eq!(breaks, vec![3, 6, 9]);
    }

    #[test]
    fn print_document_embeds_title_and_body() {
        let doc = print_document("My Article", "<p>body</p>");
        assert!(doc.contains("<title>My Article</title>"));
        assert!(doc.contains("<p>body</p>"));
        assert!(doc.contains("page-break-before: always"));
    }
}

//! Rotating-phrase typewriter state machine.
//!
//! The hero heading cycles through a list of phrases: type forward one
//! character per tick, hold the full phrase, delete at double speed,
//! hold again, advance to the next phrase. The machine only computes
//! the visible prefix and the delay until the next tick; driving the
//! timer (and stopping it) belongs to the host.

pub const BASE_DELAY_MS: u32 = 100;
pub const FULL_PHRASE_PAUSE_MS: u32 = 2_000;
pub const NEXT_PHRASE_PAUSE_MS: u32 = 500;

/// Used when the target element carries no usable `data-texts` list.
pub const FALLBACK_PHRASES: [&str; 3] = ["Data Scientist", "Geophysicist", "Materials Engineer"];

/// One advance of the machine: what to display and how long to wait
/// before the next advance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Debug)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase_index: usize,
    char_count: usize,
    deleting: bool,
    base_delay_ms: u32,
}

impl Typewriter {
    /// Empty phrases are dropped up front so `char_count` can never get
    /// stuck at a zero-length boundary; an entirely empty list falls
    /// back to the default set.
    pub fn new(phrases: Vec<String>, base_delay_ms: u32) -> Self {
        let mut phrases: Vec<String> = phrases.into_iter().filter(|p| !p.is_empty()).collect();
        if phrases.is_empty() {
            phrases = FALLBACK_PHRASES.iter().map(|p| (*p).to_string()).collect();
        }

        Self {
            phrases,
            phrase_index: 0,
            char_count: 0,
            deleting: false,
            base_delay_ms,
        }
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    fn current_phrase(&self) -> &str {
        &self.phrases[self.phrase_index]
    }

    /// Visible prefix of the current phrase, cut on a char boundary.
    pub fn visible_text(&self) -> &str {
        let phrase = self.current_phrase();
        match phrase.char_indices().nth(self.char_count) {
            Some((byte_offset, _)) => &phrase[..byte_offset],
            None => phrase,
        }
    }

    /// Advance one tick. Deleting runs at half the base interval; the
    /// two boundary conditions (full phrase typed, zero chars left)
    /// override the delay with the respective pause and flip direction.
    pub fn tick(&mut self) -> Step {
        let phrase_len = self.current_phrase().chars().count();

        if self.deleting {
            self.char_count -= 1;
        } else {
            self.char_count += 1;
        }

        let mut delay_ms = if self.deleting {
            self.base_delay_ms / 2
        } else {
            self.base_delay_ms
        };

        if !self.deleting && self.char_count == phrase_len {
            delay_ms = FULL_PHRASE_PAUSE_MS;
            self.deleting = true;
        } else if self.deleting && self.char_count == 0 {
            self.deleting = false;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            delay_ms = NEXT_PHRASE_PAUSE_MS;
        }

        Step {
            text: self.visible_text().to_string(),
            delay_ms,
        }
    }
}

/// Parse a `data-texts` attribute: a JSON array of strings. `None` on
/// malformed input so the caller can fall back.
pub fn parse_phrase_list(raw: &str) -> Option<Vec<String>> {
    serde_json::from_str::<Vec<String>>(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(phrases: &[&str]) -> Typewriter {
        Typewriter::new(phrases.iter().map(|p| (*p).to_string()).collect(), BASE_DELAY_MS)
    }

    #[test]
    fn types_one_char_per_tick() {
        let mut tw = machine(&["abc"]);
        assert_eq!(tw.tick(), Step { text: "a".into(), delay_ms: 100 });
        assert_eq!(tw.tick(), Step { text: "ab".into(), delay_ms: 100 });
    }

    #[test]
    fn pauses_then_deletes_at_double_speed() {
        let mut tw = machine(&["ab", "cd"]);
        tw.tick();
        let full = tw.tick();
        assert_eq!(full.text, "ab");
        assert_eq!(full.delay_ms, FULL_PHRASE_PAUSE_MS);

        let deleting = tw.tick();
        assert_eq!(deleting.text, "a");
        assert_eq!(deleting.delay_ms, BASE_DELAY_MS / 2);
    }

    #[test]
    fn full_cycle_advances_phrase_by_one() {
        let mut tw = machine(&["ab", "cd", "ef"]);
        // Type 2, pause, delete 2, pause: 4 ticks per cycle for 2 chars.
        for _ in 0..3 {
            tw.tick();
        }
        let wrap = tw.tick();
        assert_eq!(wrap.text, "");
        assert_eq!(wrap.delay_ms, NEXT_PHRASE_PAUSE_MS);
        assert_eq!(tw.phrase_index(), 1);
        assert_eq!(tw.char_count(), 0);
    }

    #[test]
    fn wraps_modulo_phrase_count() {
        let mut tw = machine(&["a"]);
        tw.tick(); // full phrase, pause
        tw.tick(); // deleted, wrap
        assert_eq!(tw.phrase_index(), 0);
        assert_eq!(tw.char_count(), 0);
    }

    #[test]
    fn char_count_stays_in_bounds() {
        let mut tw = machine(&["hi", "there"]);
        for _ in 0..50 {
            tw.tick();
            assert!(tw.char_count() <= tw.visible_text().chars().count().max(5));
            assert!(tw.phrase_index() < 2);
        }
    }

    #[test]
    fn multibyte_phrases_cut_on_char_boundaries() {
        let mut tw = machine(&["héllo"]);
        assert_eq!(tw.tick().text, "h");
        assert_eq!(tw.tick().text, "hé");
    }

    #[test]
    fn empty_phrases_fall_back_to_defaults() {
        let tw = Typewriter::new(vec![], BASE_DELAY_MS);
        assert_eq!(tw.current_phrase(), FALLBACK_PHRASES[0]);

        let tw = Typewriter::new(vec![String::new(), "kept".into()], BASE_DELAY_MS);
        assert_eq!(tw.current_phrase(), "kept");
    }

    #[test]
    fn phrase_list_parses_json_arrays_only() {
        assert_eq!(
            parse_phrase_list(r#"["a","b"]"#),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(parse_phrase_list("not json"), None);
        assert_eq!(parse_phrase_list(r#"{"a":1}"#), None);
    }
}

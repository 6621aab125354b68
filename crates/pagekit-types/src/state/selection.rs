//! Text selection strategy for the fallback copy.
//!
//! Compatibility shim: iOS Safari ignores `select()` on a read-only textarea,
//! so handhelds there need an explicit `Range` selection. The user-agent
//! match lives here and nowhere else; the DOM layer also switches to the range
//! procedure when `select()` visibly did not take.

/// How to select the off-screen textarea contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionStrategy {
    /// `textarea.select()`
    Native,
    /// contentEditable + `Range` + `setSelectionRange(0, RANGE_END)`
    Range,
}

/// Upper bound passed to `setSelectionRange` by the range procedure.
pub const RANGE_END: u32 = 999_999;

const HANDHELD_TOKENS: [&str; 3] = ["ipad", "ipod", "iphone"];

impl SelectionStrategy {
    /// Pick a strategy from the user agent string.
    pub fn for_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_ascii_lowercase();
        if HANDHELD_TOKENS.iter().any(|token| ua.contains(token)) {
            Self::Range
        } else {
            Self::Native
        }
    }

    /// Whether a native selection ending at `selection_end` covers `field_value`.
    ///
    /// `field_value` must be what the textarea reports back, not the text that
    /// was assigned: assignment turns `\r\n` into `\n`, and `selectionEnd`
    /// counts UTF-16 units of the stored value.
    pub fn native_selection_took(selection_end: Option<u32>, field_value: &str) -> bool {
        let len = field_value.encode_utf16().count();
        match selection_end {
            Some(end) => usize::try_from(end).is_ok_and(|end| end >= len),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handhelds_use_range() {
        let ua = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
        assert_eq!(SelectionStrategy::for_user_agent(ua), SelectionStrategy::Range);
        assert_eq!(SelectionStrategy::for_user_agent("ipad"), SelectionStrategy::Range);
    }

    #[test]
    fn test_desktop_uses_native() {
        let ua = "Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101 Firefox/128.0";
        assert_eq!(SelectionStrategy::for_user_agent(ua), SelectionStrategy::Native);
    }

    #[test]
    fn test_native_selection_check() {
        assert!(SelectionStrategy::native_selection_took(Some(5), "hello"));
        assert!(!SelectionStrategy::native_selection_took(Some(0), "hello"));
        assert!(!SelectionStrategy::native_selection_took(None, "hello"));
    }

    #[test]
    fn test_crlf_text_full_selection_took() {
        // "a\r\nb" assigned to a textarea is stored as "a\nb"; select() ends at 3.
        assert!(SelectionStrategy::native_selection_took(Some(3), "a\nb"));
    }

    #[test]
    fn test_selection_counts_utf16_units() {
        // One astral emoji is two UTF-16 units.
        assert!(SelectionStrategy::native_selection_took(Some(3), "✅😀"));
        assert!(!SelectionStrategy::native_selection_took(Some(2), "✅😀"));
    }
}

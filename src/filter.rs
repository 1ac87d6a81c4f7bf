//! Input filtering applied before text reaches a widget's stored value.
//!
//! An [`InputFilter`] decides which part of incoming text is accepted. It is
//! the layer that keeps a PIN field digits-only and never longer than its
//! slot count; the widget itself never trims text it has already stored.
//!
//! Filters are configured with option functions, in the same way key bindings
//! are:
//!
//! ```rust
//! use bubbletea_pinview::filter::{digits_only, max_length, new_filter};
//!
//! let filter = new_filter(vec![digits_only(), max_length(4)]);
//! assert_eq!(filter.accept("12", "3a4b5"), "34");
//! assert_eq!(filter.sanitize("9x8y7z6w5"), "9876");
//! ```

/// Accepts or rejects characters of incoming text.
///
/// The default filter accepts everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputFilter {
    digits_only: bool,
    max_length: Option<usize>,
}

/// Option applied to an [`InputFilter`] by [`new_filter`].
pub type FilterOpt = Box<dyn FnOnce(&mut InputFilter)>;

/// Creates a filter from a list of options, applied in order.
pub fn new_filter(opts: Vec<FilterOpt>) -> InputFilter {
    let mut f = InputFilter::default();
    for opt in opts {
        opt(&mut f);
    }
    f
}

/// Only ASCII digits `0-9` pass the filter.
pub fn digits_only() -> FilterOpt {
    Box::new(|f: &mut InputFilter| f.digits_only = true)
}

/// Caps the total length of the filtered text.
pub fn max_length(len: usize) -> FilterOpt {
    Box::new(move |f: &mut InputFilter| f.max_length = Some(len))
}

impl InputFilter {
    /// Current length cap, if any.
    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Replaces the length cap.
    pub fn set_max_length(&mut self, len: Option<usize>) {
        self.max_length = len;
    }

    /// Returns true if `ch` may be stored.
    pub fn allows(&self, ch: char) -> bool {
        !self.digits_only || ch.is_ascii_digit()
    }

    /// Returns the part of `incoming` that may be appended to `current`.
    ///
    /// Rejected characters are dropped; the result is cut so that
    /// `current + result` never exceeds the length cap. An empty result means
    /// the input is rejected as a whole.
    pub fn accept(&self, current: &str, incoming: &str) -> String {
        let room = match self.max_length {
            Some(max) => max.saturating_sub(current.chars().count()),
            None => usize::MAX,
        };
        incoming
            .chars()
            .filter(|&ch| self.allows(ch))
            .take(room)
            .collect()
    }

    /// Filters a whole replacement value.
    pub fn sanitize(&self, value: &str) -> String {
        self.accept("", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_accepts_everything() {
        let f = new_filter(vec![]);
        assert_eq!(f.sanitize("abc 123"), "abc 123");
        assert_eq!(f.max_length(), None);
    }

    #[test]
    fn test_digits_only_rejects_letters_and_unicode_digits() {
        let f = new_filter(vec![digits_only()]);
        assert!(f.allows('7'));
        assert!(!f.allows('a'));
        assert!(!f.allows('٣'));
        assert_eq!(f.sanitize("1-2 3٣"), "123");
    }

    #[test]
    fn test_max_length_leaves_no_room_when_full() {
        let f = new_filter(vec![digits_only(), max_length(4)]);
        assert_eq!(f.accept("1234", "5"), "");
        assert_eq!(f.accept("123", "45"), "4");
        assert_eq!(f.accept("", "x"), "");
    }

    #[test]
    fn test_later_options_win() {
        let mut f = new_filter(vec![max_length(3), max_length(6)]);
        assert_eq!(f.max_length(), Some(6));
        f.set_max_length(Some(2));
        assert_eq!(f.sanitize("12345"), "12");
    }
}

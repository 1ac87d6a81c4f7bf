//! Key bindings for the PIN view.
//!
//! Digits are not bound: any unmodified digit key is typed into the next
//! slot. There are no movement, selection or clipboard bindings: the caret
//! never leaves the end of the text.

use crate::key::{new_binding, with_help, with_keys_str, Binding};

/// Key bindings of the PIN view.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Delete the last entered digit.
    pub delete_character_backward: Binding,
    /// Delete every entered digit.
    pub clear: Binding,
}

/// Default bindings: backspace/ctrl+h delete a digit, ctrl+u clears.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        delete_character_backward: new_binding(vec![
            with_keys_str(&["backspace", "ctrl+h"]),
            with_help("backspace", "delete digit"),
        ]),
        clear: new_binding(vec![
            with_keys_str(&["ctrl+u"]),
            with_help("ctrl+u", "clear"),
        ]),
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

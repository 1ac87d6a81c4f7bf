//! Input handling and runtime setters of the PIN view.

use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};

use super::config::{clamp_item_count, Config, Rgba};
use super::geometry::Insets;
use super::model::Model;
use super::types::PinFullMsg;
use crate::key::matches_binding;
use crate::Component;

impl Model {
    /// Returns the entered digits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_pinview::pinview;
    ///
    /// let mut pin = pinview::new(vec![]);
    /// assert_eq!(pin.value(), "");
    /// pin.set_value("42");
    /// assert_eq!(pin.value(), "42");
    /// ```
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the text, as if it had been typed in one edit.
    ///
    /// The text goes through the input filter first, so non-digits are
    /// dropped and the result is cut to the slot count. This is always an edit:
    /// setting an already full value again notifies the completion listener
    /// again.
    ///
    /// # Arguments
    ///
    /// * `s` - The new text; anything but ASCII digits is dropped
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_pinview::pinview::{self, with_item_count};
    ///
    /// let mut pin = pinview::new(vec![with_item_count(4)]);
    /// pin.set_value("12-34-56");
    /// assert_eq!(pin.value(), "1234");
    /// assert_eq!(pin.position(), 4);
    /// ```
    pub fn set_value(&mut self, s: &str) {
        let filtered = self.filter.sanitize(s);
        self.apply_edit(filtered);
    }

    /// Clears the text. Notifies listeners like any other edit.
    pub fn reset(&mut self) {
        self.apply_edit(String::new());
    }

    /// Caret index. Always equal to the number of entered digits.
    pub fn position(&self) -> usize {
        self.caret
    }

    /// Resolved style of the view.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of slots.
    pub fn item_count(&self) -> usize {
        self.config.item_count
    }

    /// Changes the number of slots, clamped to `[3, 8]`.
    ///
    /// Text longer than the new count is cut in an edit of its own, which
    /// notifies listeners (and completes the code, since it is then full).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_pinview::pinview::{self, with_item_count};
    ///
    /// let mut pin = pinview::new(vec![with_item_count(6)]);
    /// pin.set_value("12345");
    /// pin.set_item_count(3);
    /// assert_eq!(pin.value(), "123");
    ///
    /// pin.set_item_count(12);
    /// assert_eq!(pin.item_count(), 8);
    /// ```
    pub fn set_item_count(&mut self, n: usize) {
        let n = clamp_item_count(n);
        if n == self.config.item_count {
            return;
        }
        self.config.item_count = n;
        self.filter.set_max_length(Some(n));
        self.needs_layout = true;
        self.needs_redraw = true;

        if self.value.chars().count() > n {
            let truncated: String = self.value.chars().take(n).collect();
            self.apply_edit(truncated);
        }
    }

    /// Border color of the slots.
    pub fn item_border_color(&self) -> Rgba {
        self.config.item_border_color
    }

    /// Sets the border color. Takes effect on the next paint, also when called
    /// from inside a listener.
    pub fn set_item_border_color(&mut self, color: impl Into<Rgba>) {
        self.config.item_border_color = color.into();
        self.needs_redraw = true;
    }

    /// Padding around the row of slots.
    pub fn padding(&self) -> Insets {
        self.config.padding
    }

    /// Sets the padding around the row of slots.
    pub fn set_padding(&mut self, padding: Insets) {
        self.config.padding = padding;
        self.needs_layout = true;
        self.needs_redraw = true;
    }

    /// Sets the completion listener, replacing any previous one.
    ///
    /// There is only one completion listener: the last one set wins, also
    /// when it is set from inside the current listener.
    ///
    /// # Arguments
    ///
    /// * `handler` - Called with the view and the complete code
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_pinview::pinview;
    /// use std::sync::{Arc, Mutex};
    ///
    /// let codes = Arc::new(Mutex::new(Vec::new()));
    /// let sink = Arc::clone(&codes);
    ///
    /// let mut pin = pinview::new(vec![]);
    /// pin.set_on_pin_full(|_pin, _code| unreachable!("replaced below"));
    /// pin.set_on_pin_full(move |pin, code| {
    ///     sink.lock().unwrap().push(code.to_string());
    ///     pin.reset();
    /// });
    ///
    /// pin.set_value("9876");
    /// assert_eq!(*codes.lock().unwrap(), vec!["9876".to_string()]);
    /// assert_eq!(pin.value(), "");
    /// ```
    pub fn set_on_pin_full<F>(&mut self, handler: F)
    where
        F: FnMut(&mut Model, &str) + Send + 'static,
    {
        self.on_pin_full = Some(Box::new(handler));
        self.pin_full_generation += 1;
    }

    /// Removes the completion listener.
    pub fn clear_on_pin_full(&mut self) {
        self.on_pin_full = None;
        self.pin_full_generation += 1;
    }

    /// Adds a listener called with the new text after every edit.
    ///
    /// Text-changed listeners run before the completion listener, so a
    /// listener resetting the view's look does not undo what the completion
    /// listener sets.
    ///
    /// # Arguments
    ///
    /// * `handler` - Called with the view and its new text
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_pinview::pinview::{self, Rgba, DEFAULT_BORDER_COLOR};
    ///
    /// let wrong = Rgba::new(220, 40, 40, 255);
    /// let mut pin = pinview::new(vec![]);
    /// pin.add_text_changed_listener(|pin, _text| {
    ///     pin.set_item_border_color(DEFAULT_BORDER_COLOR);
    /// });
    /// pin.set_on_pin_full(move |pin, code| {
    ///     if code != "2468" {
    ///         pin.set_item_border_color(wrong);
    ///     }
    /// });
    ///
    /// pin.set_value("1111");
    /// assert_eq!(pin.item_border_color(), wrong);
    /// pin.set_value("111");
    /// assert_eq!(pin.item_border_color(), DEFAULT_BORDER_COLOR);
    /// ```
    pub fn add_text_changed_listener<F>(&mut self, handler: F)
    where
        F: FnMut(&mut Model, &str) + Send + 'static,
    {
        self.text_changed.push(Box::new(handler));
    }

    /// Returns whether the view has focus.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Gives the view focus; the next empty slot gets highlighted.
    pub fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        self.needs_redraw = true;
        None
    }

    /// Removes focus; no slot is highlighted.
    pub fn blur(&mut self) {
        self.focus = false;
        self.needs_redraw = true;
    }

    /// Processes a message. Only key messages are handled, and only while
    /// focused.
    ///
    /// When the keystroke completes the code, the returned command yields a
    /// [`PinFullMsg`] in addition to the completion listener being called.
    /// The message carries the code as it was completed, even if the listener
    /// changed the field afterwards.
    ///
    /// # Arguments
    ///
    /// * `msg` - The message to process
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_pinview::pinview::{self, with_item_count};
    /// use bubbletea_rs::{KeyMsg, Msg};
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let mut pin = pinview::new(vec![with_item_count(3)]);
    /// pin.focus();
    ///
    /// let key = |ch| Box::new(KeyMsg { key: KeyCode::Char(ch), modifiers: KeyModifiers::NONE }) as Msg;
    /// assert!(pin.update(key('7')).is_none());
    /// assert!(pin.update(key('x')).is_none());
    /// assert!(pin.update(key('8')).is_none());
    /// assert!(pin.update(key('9')).is_some());
    /// assert_eq!(pin.value(), "789");
    /// ```
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }
        let key_msg = msg.downcast_ref::<KeyMsg>()?;

        let completed = if matches_binding(key_msg, &self.key_map.delete_character_backward) {
            self.delete_character_backward()
        } else if matches_binding(key_msg, &self.key_map.clear) {
            self.clear_input()
        } else {
            self.handle_character_input(key_msg)
        };

        // The code is the one that completed, whatever the listener did to the
        // field afterwards.
        let msg: Msg = PinFullMsg(completed?).into();
        let cmd: Cmd = Box::pin(async move { Some(msg) });
        Some(cmd)
    }

    fn delete_character_backward(&mut self) -> Option<String> {
        let mut next = self.value.clone();
        next.pop()?;
        self.apply_edit(next)
    }

    fn clear_input(&mut self) -> Option<String> {
        if self.value.is_empty() {
            return None;
        }
        self.apply_edit(String::new())
    }

    fn handle_character_input(&mut self, key_msg: &KeyMsg) -> Option<String> {
        let KeyCode::Char(ch) = key_msg.key else {
            return None;
        };
        if key_msg.modifiers.contains(KeyModifiers::CONTROL)
            || key_msg.modifiers.contains(KeyModifiers::ALT)
        {
            return None;
        }
        self.insert_from_user_input(ch.encode_utf8(&mut [0; 4]))
    }

    // Rejected input never reaches the stored text and is not an edit.
    pub(super) fn insert_from_user_input(&mut self, incoming: &str) -> Option<String> {
        let accepted = self.filter.accept(&self.value, incoming);
        if accepted.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::trace!(len = self.value.len(), "pinview input rejected");
            return None;
        }
        let mut next = self.value.clone();
        next.push_str(&accepted);
        self.apply_edit(next)
    }

    /// Stores `value` and runs the listeners. Returns the complete code when
    /// the edit filled the last slot.
    pub(super) fn apply_edit(&mut self, value: String) -> Option<String> {
        self.value = value;
        self.caret = self.value.chars().count();
        self.needs_redraw = true;

        let text = self.value.clone();
        self.notify_text_changed(&text);

        let len = text.chars().count();
        let count = self.config.item_count;
        let completed = len == count && count != 0;
        if completed {
            #[cfg(feature = "tracing")]
            tracing::debug!(len, "pinview complete");
            self.notify_pin_full(&text);
        }

        self.caret = self.value.chars().count();
        completed.then_some(text)
    }

    fn notify_text_changed(&mut self, text: &str) {
        let mut listeners = std::mem::take(&mut self.text_changed);
        for listener in listeners.iter_mut() {
            listener(self, text);
        }
        // Keep listeners added while dispatching, after the existing ones.
        listeners.append(&mut self.text_changed);
        self.text_changed = listeners;
    }

    fn notify_pin_full(&mut self, text: &str) {
        let Some(mut handler) = self.on_pin_full.take() else {
            return;
        };
        let generation = self.pin_full_generation;
        handler(self, text);
        if self.pin_full_generation == generation {
            self.on_pin_full = Some(handler);
        }
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus()
    }

    fn blur(&mut self) {
        self.blur()
    }

    fn focused(&self) -> bool {
        self.focused()
    }
}

//! Core model of the PIN view.

use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;

use super::config::{Config, PinViewOption};
use super::keymap::{default_key_map, KeyMap};
use super::terminal::CellMetrics;
use super::types::{PinFullHandler, TextChangedHandler};
use crate::filter::{digits_only, max_length, new_filter, InputFilter};

/// A fixed-length PIN entry field drawn as a row of boxed slots.
///
/// The model owns the entered digits, the resolved style and the listeners.
/// Keystrokes arrive through [`update`](Model::update); text can also be set
/// programmatically with [`set_value`](Model::set_value). Every edit pins the
/// caret to the end of the text, notifies the text-changed listeners and, when
/// the text becomes exactly as long as the slot count, the completion
/// listener.
///
/// # Examples
///
/// ```rust
/// use bubbletea_pinview::pinview::{self, with_item_count};
/// use bubbletea_pinview::Component;
/// use bubbletea_rs::{KeyMsg, Msg};
/// use crossterm::event::{KeyCode, KeyModifiers};
/// use std::sync::{Arc, Mutex};
///
/// let completed = Arc::new(Mutex::new(None));
/// let sink = Arc::clone(&completed);
///
/// let mut pin = pinview::new(vec![with_item_count(3)]);
/// pin.set_on_pin_full(move |_pin, code| *sink.lock().unwrap() = Some(code.to_string()));
/// Component::focus(&mut pin);
///
/// for ch in "123".chars() {
///     let key = KeyMsg { key: KeyCode::Char(ch), modifiers: KeyModifiers::NONE };
///     pin.update(Box::new(key) as Msg);
/// }
/// assert_eq!(completed.lock().unwrap().as_deref(), Some("123"));
/// ```
pub struct Model {
    /// Style of the entered digits in the terminal view.
    pub text_style: Style,
    /// Cell size used to map slot geometry onto the terminal.
    pub cell_metrics: CellMetrics,
    /// Key bindings.
    pub key_map: KeyMap,

    pub(super) config: Config,
    pub(super) filter: InputFilter,
    pub(super) value: String,
    pub(super) caret: usize,
    pub(super) focus: bool,

    // Single slot: the last handler set wins.
    pub(super) on_pin_full: Option<PinFullHandler>,
    pub(super) pin_full_generation: u64,
    pub(super) text_changed: Vec<TextChangedHandler>,

    pub(super) needs_redraw: bool,
    pub(super) needs_layout: bool,
}

/// Creates a PIN view from construction options.
///
/// The view starts empty and blurred. Slot counts outside `[3, 8]` are
/// clamped.
///
/// ```rust
/// use bubbletea_pinview::pinview::{self, with_item_count};
///
/// let pin = pinview::new(vec![with_item_count(10)]);
/// assert_eq!(pin.item_count(), 8);
/// ```
pub fn new(opts: Vec<PinViewOption>) -> Model {
    let config = Config::resolve(&opts);
    let filter = new_filter(vec![digits_only(), max_length(config.item_count)]);
    Model {
        text_style: Style::new(),
        cell_metrics: CellMetrics::default(),
        key_map: default_key_map(),
        config,
        filter,
        value: String::new(),
        caret: 0,
        focus: false,
        on_pin_full: None,
        pin_full_generation: 0,
        text_changed: Vec::new(),
        needs_redraw: true,
        needs_layout: true,
    }
}

impl Default for Model {
    fn default() -> Self {
        new(Vec::new())
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (new(Vec::new()), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

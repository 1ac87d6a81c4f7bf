#![warn(missing_docs)]

//! # bubbletea-pinview
//!
//! A PIN/code entry widget for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications and embedded-graphics displays.
//!
//! The field is a row of 3 to 8 boxed slots instead of a continuous text
//! input. It accepts digits only, highlights the slot that receives the next
//! digit while focused, centers every entered digit in its slot, and calls a
//! listener exactly when the code becomes complete. Checking whether the code
//! is correct is left to the caller.
//!
//! ## Overview
//!
//! Like the other bubbletea-rs components, the PIN view follows the Elm
//! Architecture with `update()` and `view()` methods:
//!
//! ```rust
//! use bubbletea_pinview::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     pin: PinView,
//!     status: String,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut pin = pinview_new(vec![with_item_count(4)]);
//!         let focus_cmd = pin.focus();
//!         let app = Self { pin, status: String::new() };
//!         (app, focus_cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(PinFullMsg(code)) = msg.downcast_ref::<PinFullMsg>() {
//!             self.status = if code == "1234" { "ok".into() } else { "wrong code".into() };
//!             return None;
//!         }
//!         self.pin.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("{}\n{}", self.pin.view(), self.status)
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`pinview`] | The PIN view: configuration, geometry, rendering, input handling |
//! | [`filter`] | Input filtering (digits only, length cap) |
//! | [`key`] | Key bindings |
//!
//! ## Features
//!
//! - `graphics` (default): `GraphicsCanvas`, drawing on embedded-graphics
//!   `DrawTarget`s.
//! - `tracing`: debug spans around the render pass and events on completion.

pub mod filter;
pub mod key;
pub mod pinview;

use bubbletea_rs::Cmd;

/// Focus management shared by interactive components.
///
/// A focused component receives keyboard input and shows that it does; the
/// PIN view highlights its next empty slot only while focused.
///
/// ```rust
/// use bubbletea_pinview::prelude::*;
///
/// let mut pin = pinview_new(vec![]);
/// assert!(!Component::focused(&pin));
///
/// let _ = Component::focus(&mut pin);
/// assert!(Component::focused(&pin));
///
/// Component::blur(&mut pin);
/// assert!(!Component::focused(&pin));
/// ```
pub trait Component {
    /// Sets the component to focused state. May return a command for the
    /// runtime to execute.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred state.
    fn blur(&mut self);

    /// Returns the current focus state.
    fn focused(&self) -> bool;
}

pub use filter::{digits_only, max_length, new_filter, InputFilter};
pub use key::{matches_binding, new_binding, with_help, with_keys_str, Binding, KeyPress};
pub use pinview::{
    new as pinview_new, Canvas, CellCanvas, CellMetrics, Insets, MeasureSpec,
    Model as PinView, PinFullMsg, PinViewOption, Rgba,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_pinview::prelude::*;
///
/// let pin = pinview_new(vec![with_item_count(6), with_item_spacing(8.0)]);
/// assert_eq!(pin.item_count(), 6);
/// ```
pub mod prelude {
    pub use crate::key::{matches_binding, new_binding, with_help, with_keys_str, Binding};
    pub use crate::pinview::{
        new as pinview_new, with_density, with_item_border_color, with_item_border_width,
        with_item_corner_radius, with_item_count, with_item_height, with_item_spacing,
        with_item_width, with_padding, with_selected_item_border_width, Canvas, CellCanvas,
        CellMetrics, Insets, MeasureSpec, Model as PinView, PinFullMsg, PinViewOption, Rgba,
        Size, DEFAULT_BORDER_COLOR,
    };
    pub use crate::Component;
}

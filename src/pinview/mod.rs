//! PIN/code entry component.
//!
//! A fixed-length field of 3 to 8 boxed slots that only accepts digits. The
//! slot that receives the next digit is highlighted while the view is
//! focused, entered digits are centered in their slots, and a listener is
//! told exactly when the code becomes complete.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_pinview::pinview::{self, with_item_count, Rgba};
//!
//! let mut pin = pinview::new(vec![with_item_count(4)]);
//! pin.set_on_pin_full(|pin, code| {
//!     let ok = code == "1234";
//!     pin.set_item_border_color(if ok {
//!         Rgba::new(0, 200, 0, 255)
//!     } else {
//!         Rgba::new(200, 0, 0, 255)
//!     });
//! });
//! pin.add_text_changed_listener(|pin, _text| {
//!     pin.set_item_border_color(pinview::DEFAULT_BORDER_COLOR);
//! });
//!
//! pin.set_value("1234");
//! assert_eq!(pin.item_border_color(), Rgba::new(0, 200, 0, 255));
//! ```
//!
//! # Drawing
//!
//! [`Model::view`] renders the slots for the terminal. Any other surface can
//! implement [`Canvas`] and be passed to [`Model::render_to`]; with the
//! `graphics` feature, [`GraphicsCanvas`] draws on embedded-graphics targets.

pub mod canvas;
pub mod config;
pub mod geometry;
#[cfg(feature = "graphics")]
pub mod graphics;
pub mod keymap;
pub mod methods;
pub mod model;
pub mod render;
pub mod terminal;
pub mod types;
pub mod view;


pub use canvas::{Canvas, Stroke};
pub use config::{
    with_density, with_item_border_color, with_item_border_width, with_item_corner_radius,
    with_item_count, with_item_height, with_item_spacing, with_item_width, with_padding,
    with_selected_item_border_width, Config, PinViewOption, Rgba, DEFAULT_BORDER_COLOR,
    DEFAULT_PIN_LENGTH, MAX_PIN_LENGTH, MIN_PIN_LENGTH,
};
pub use geometry::{Insets, Layout, MeasureSpec, PointF, Rect, Size};
#[cfg(feature = "graphics")]
pub use graphics::GraphicsCanvas;
pub use keymap::{default_key_map, KeyMap};
pub use model::{new, Model};
pub use terminal::{CellCanvas, CellMetrics};
pub use types::{PinFullHandler, PinFullMsg, TextChangedHandler};

//! Style configuration of the PIN view.
//!
//! All dimensions are given in density-independent units and resolved to
//! pixels once, when the view is built. Options are passed to
//! [`new`](super::new) as a list and applied in order:
//!
//! ```rust
//! use bubbletea_pinview::pinview::{self, with_density, with_item_count, with_item_spacing};
//!
//! let pin = pinview::new(vec![
//!     with_item_count(6),
//!     with_item_spacing(8.0),
//!     with_density(2.0),
//! ]);
//! assert_eq!(pin.item_count(), 6);
//! assert_eq!(pin.config().item_spacing, 16.0);
//! ```

use super::geometry::Insets;

/// Fewest slots a PIN view can have.
pub const MIN_PIN_LENGTH: usize = 3;
/// Most slots a PIN view can have.
pub const MAX_PIN_LENGTH: usize = 8;
/// Slot count used when none is requested.
pub const DEFAULT_PIN_LENGTH: usize = 4;

const DEFAULT_ITEM_WIDTH: f32 = 40.0;
const DEFAULT_ITEM_HEIGHT: f32 = 48.0;
const DEFAULT_ITEM_CORNER_RADIUS: f32 = 4.0;
const DEFAULT_ITEM_BORDER_WIDTH: f32 = 1.0;
const DEFAULT_SELECTED_ITEM_BORDER_WIDTH: f32 = DEFAULT_ITEM_BORDER_WIDTH + 1.0;
const DEFAULT_ITEM_SPACING: f32 = 12.0;

/// Border color used when none is configured.
pub const DEFAULT_BORDER_COLOR: Rgba = Rgba::from_packed(0xBDBD_BDFF);

/// A color packed as `0xRRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba(u32);

impl Rgba {
    /// Builds a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32)
    }

    /// Wraps an already packed `0xRRGGBBAA` value.
    pub const fn from_packed(packed: u32) -> Self {
        Self(packed)
    }

    /// The packed `0xRRGGBBAA` value.
    pub const fn packed(self) -> u32 {
        self.0
    }

    /// Red channel.
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Green channel.
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Blue channel.
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Alpha channel.
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// `#rrggbb` form, alpha dropped. Terminal colors have no alpha.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r(), self.g(), self.b())
    }
}

impl From<u32> for Rgba {
    fn from(packed: u32) -> Self {
        Self::from_packed(packed)
    }
}

/// Resolved style of a PIN view, in pixels.
///
/// Only `item_border_color` (and the slot count, through the view's setter)
/// change after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Number of slots, always within `[MIN_PIN_LENGTH, MAX_PIN_LENGTH]`.
    pub item_count: usize,
    /// Width of one slot.
    pub item_width: f32,
    /// Height of one slot.
    pub item_height: f32,
    /// Corner radius of the slot border.
    pub item_corner_radius: f32,
    /// Border stroke width of a slot that is not highlighted.
    pub item_border_width: f32,
    /// Border stroke width of the highlighted slot.
    pub selected_item_border_width: f32,
    /// Gap between two neighbouring slots.
    pub item_spacing: f32,
    /// Border color of every slot.
    pub item_border_color: Rgba,
    /// Padding around the row of slots.
    pub padding: Insets,
}

impl Default for Config {
    fn default() -> Self {
        Self::resolve(&[])
    }
}

impl Config {
    /// Applies `opts` over the defaults and scales dimensions by the density.
    ///
    /// The density option is honoured wherever it appears in the list.
    pub fn resolve(opts: &[PinViewOption]) -> Self {
        let mut raw = RawConfig::default();
        for opt in opts {
            opt.apply(&mut raw);
        }

        let d = raw.density;
        Self {
            item_count: clamp_item_count(raw.item_count),
            item_width: raw.item_width * d,
            item_height: raw.item_height * d,
            item_corner_radius: raw.item_corner_radius * d,
            item_border_width: raw.item_border_width * d,
            selected_item_border_width: raw.selected_item_border_width * d,
            item_spacing: raw.item_spacing * d,
            item_border_color: raw.item_border_color,
            padding: raw.padding,
        }
    }
}

/// Clamps a requested slot count to `[MIN_PIN_LENGTH, MAX_PIN_LENGTH]`.
pub fn clamp_item_count(requested: usize) -> usize {
    requested.clamp(MIN_PIN_LENGTH, MAX_PIN_LENGTH)
}

// Unscaled values as supplied by the caller.
struct RawConfig {
    item_count: usize,
    item_width: f32,
    item_height: f32,
    item_corner_radius: f32,
    item_border_width: f32,
    selected_item_border_width: f32,
    item_spacing: f32,
    item_border_color: Rgba,
    density: f32,
    padding: Insets,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            item_count: DEFAULT_PIN_LENGTH,
            item_width: DEFAULT_ITEM_WIDTH,
            item_height: DEFAULT_ITEM_HEIGHT,
            item_corner_radius: DEFAULT_ITEM_CORNER_RADIUS,
            item_border_width: DEFAULT_ITEM_BORDER_WIDTH,
            selected_item_border_width: DEFAULT_SELECTED_ITEM_BORDER_WIDTH,
            item_spacing: DEFAULT_ITEM_SPACING,
            item_border_color: DEFAULT_BORDER_COLOR,
            density: 1.0,
            padding: Insets::default(),
        }
    }
}

/// Construction option of a PIN view.
#[derive(Debug, Clone, PartialEq)]
pub enum PinViewOption {
    /// Number of slots; clamped to `[3, 8]`.
    ItemCount(usize),
    /// Slot width.
    ItemWidth(f32),
    /// Slot height.
    ItemHeight(f32),
    /// Corner radius of the slot border.
    ItemCornerRadius(f32),
    /// Border width of a normal slot.
    ItemBorderWidth(f32),
    /// Border width of the highlighted slot.
    SelectedItemBorderWidth(f32),
    /// Gap between slots.
    ItemSpacing(f32),
    /// Border color.
    ItemBorderColor(Rgba),
    /// Pixels per density-independent unit.
    Density(f32),
    /// Padding around the row, already in pixels.
    Padding(Insets),
}

impl PinViewOption {
    fn apply(&self, raw: &mut RawConfig) {
        match *self {
            PinViewOption::ItemCount(n) => raw.item_count = n,
            PinViewOption::ItemWidth(v) => raw.item_width = v,
            PinViewOption::ItemHeight(v) => raw.item_height = v,
            PinViewOption::ItemCornerRadius(v) => raw.item_corner_radius = v,
            PinViewOption::ItemBorderWidth(v) => raw.item_border_width = v,
            PinViewOption::SelectedItemBorderWidth(v) => raw.selected_item_border_width = v,
            PinViewOption::ItemSpacing(v) => raw.item_spacing = v,
            PinViewOption::ItemBorderColor(c) => raw.item_border_color = c,
            PinViewOption::Density(d) => raw.density = d,
            PinViewOption::Padding(p) => raw.padding = p,
        }
    }
}

/// Sets the slot count.
pub fn with_item_count(n: usize) -> PinViewOption {
    PinViewOption::ItemCount(n)
}

/// Sets the slot width.
pub fn with_item_width(v: f32) -> PinViewOption {
    PinViewOption::ItemWidth(v)
}

/// Sets the slot height.
pub fn with_item_height(v: f32) -> PinViewOption {
    PinViewOption::ItemHeight(v)
}

/// Sets the border corner radius.
pub fn with_item_corner_radius(v: f32) -> PinViewOption {
    PinViewOption::ItemCornerRadius(v)
}

/// Sets the normal border width.
pub fn with_item_border_width(v: f32) -> PinViewOption {
    PinViewOption::ItemBorderWidth(v)
}

/// Sets the highlighted border width.
pub fn with_selected_item_border_width(v: f32) -> PinViewOption {
    PinViewOption::SelectedItemBorderWidth(v)
}

/// Sets the gap between slots.
pub fn with_item_spacing(v: f32) -> PinViewOption {
    PinViewOption::ItemSpacing(v)
}

/// Sets the border color.
pub fn with_item_border_color(c: impl Into<Rgba>) -> PinViewOption {
    PinViewOption::ItemBorderColor(c.into())
}

/// Sets the display density.
pub fn with_density(d: f32) -> PinViewOption {
    PinViewOption::Density(d)
}

/// Sets the padding around the row of slots.
pub fn with_padding(p: Insets) -> PinViewOption {
    PinViewOption::Padding(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = Config::default();
        assert_eq!(c.item_count, 4);
        assert_eq!(c.item_width, 40.0);
        assert_eq!(c.item_height, 48.0);
        assert_eq!(c.item_corner_radius, 4.0);
        assert_eq!(c.item_border_width, 1.0);
        assert_eq!(c.selected_item_border_width, 2.0);
        assert_eq!(c.item_spacing, 12.0);
        assert_eq!(c.item_border_color, DEFAULT_BORDER_COLOR);
        assert_eq!(c.padding, Insets::default());
    }

    #[test]
    fn test_item_count_clamps() {
        for n in 0..3 {
            assert_eq!(Config::resolve(&[with_item_count(n)]).item_count, 3);
        }
        for n in [9, 10, 100, usize::MAX] {
            assert_eq!(Config::resolve(&[with_item_count(n)]).item_count, 8);
        }
        for n in 3..=8 {
            assert_eq!(Config::resolve(&[with_item_count(n)]).item_count, n);
        }
    }

    #[test]
    fn test_density_scales_dimensions_in_any_position() {
        let c = Config::resolve(&[with_density(3.0), with_item_width(10.0)]);
        assert_eq!(c.item_width, 30.0);
        assert_eq!(c.item_height, 144.0);
        assert_eq!(c.selected_item_border_width, 6.0);
        assert_eq!(c.item_count, 4);
    }

    #[test]
    fn test_rgba_channels() {
        let c = Rgba::new(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.packed(), 0x1234_5678);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (0x12, 0x34, 0x56, 0x78));
        assert_eq!(c.to_hex(), "#123456");
        assert_eq!(Rgba::from(0xFF00_00FF), Rgba::new(255, 0, 0, 255));
    }
}

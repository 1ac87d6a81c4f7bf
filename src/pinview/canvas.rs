//! Immediate-mode drawing surface consumed by the render pipeline.
//!
//! A backend only needs four operations: an accumulating translation, a
//! stroked rounded rectangle, glyph measurement and glyph drawing. The crate
//! ships a terminal backend ([`CellCanvas`](super::terminal::CellCanvas)) and,
//! with the `graphics` feature, an embedded-graphics one.

use super::config::Rgba;
use super::geometry::Rect;

/// Stroke used for a slot border. Borders are never filled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Stroke width in pixels.
    pub width: f32,
    /// Stroke color.
    pub color: Rgba,
}

/// A drawing surface with a movable origin.
///
/// Coordinates passed to the drawing methods are relative to the current
/// origin, which [`translate`](Canvas::translate) moves cumulatively.
pub trait Canvas {
    /// Error reported by the backend when a drawing call fails.
    type Error;

    /// Moves the origin by `(dx, dy)`, on top of earlier translations.
    fn translate(&mut self, dx: f32, dy: f32);

    /// Strokes the outline of `rect` with rounded corners of `radius`.
    fn stroke_round_rect(
        &mut self,
        rect: Rect,
        radius: f32,
        stroke: &Stroke,
    ) -> Result<(), Self::Error>;

    /// Bounding box of `glyph` when drawn with its baseline origin at (0, 0).
    ///
    /// `top` is usually negative (above the baseline) and `left` is the left
    /// side bearing.
    fn text_bounds(&self, glyph: &str) -> Rect;

    /// Draws `glyph` with its baseline origin at `(x, y)`.
    fn draw_text(&mut self, glyph: &str, x: f32, y: f32) -> Result<(), Self::Error>;
}

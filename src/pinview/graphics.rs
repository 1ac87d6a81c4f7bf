//! embedded-graphics backend.
//!
//! Draws the PIN view onto any `DrawTarget<Color = Rgb888>`: a display
//! driver, a simulator window or an in-memory framebuffer. Coordinates are
//! rounded to whole pixels; strokes are centered on the slot outline.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    PrimitiveStyleBuilder, Rectangle, RoundedRectangle, StrokeAlignment,
};
use embedded_graphics::text::{Baseline, Text};

use super::canvas::{Canvas, Stroke};
use super::config::Rgba;
use super::geometry::Rect;

impl From<Rgba> for Rgb888 {
    fn from(c: Rgba) -> Self {
        Rgb888::new(c.r(), c.g(), c.b())
    }
}

/// A [`Canvas`] over an embedded-graphics draw target.
pub struct GraphicsCanvas<'a, 'f, D> {
    target: &'a mut D,
    text_style: MonoTextStyle<'f, Rgb888>,
    dx: f32,
    dy: f32,
}

impl<'a, 'f, D> GraphicsCanvas<'a, 'f, D>
where
    D: DrawTarget<Color = Rgb888>,
{
    /// Wraps `target`; glyphs are drawn with `text_style`.
    pub fn new(target: &'a mut D, text_style: MonoTextStyle<'f, Rgb888>) -> Self {
        Self {
            target,
            text_style,
            dx: 0.0,
            dy: 0.0,
        }
    }

    fn point(&self, x: f32, y: f32) -> Point {
        Point::new((x + self.dx).round() as i32, (y + self.dy).round() as i32)
    }
}

impl<D> Canvas for GraphicsCanvas<'_, '_, D>
where
    D: DrawTarget<Color = Rgb888>,
{
    type Error = D::Error;

    fn translate(&mut self, dx: f32, dy: f32) {
        self.dx += dx;
        self.dy += dy;
    }

    fn stroke_round_rect(
        &mut self,
        rect: Rect,
        radius: f32,
        stroke: &Stroke,
    ) -> Result<(), Self::Error> {
        let top_left = self.point(rect.left, rect.top);
        let size = Size::new(
            rect.width().abs().round() as u32,
            rect.height().abs().round() as u32,
        );
        let corner = Size::new_equal(radius.max(0.0).round() as u32);

        let color: Rgb888 = stroke.color.into();
        let style = PrimitiveStyleBuilder::new()
            .stroke_color(color)
            .stroke_width(stroke.width.max(0.0).round() as u32)
            .stroke_alignment(StrokeAlignment::Center)
            .build();

        RoundedRectangle::with_equal_corners(Rectangle::new(top_left, size), corner)
            .into_styled(style)
            .draw(&mut *self.target)
    }

    fn text_bounds(&self, glyph: &str) -> Rect {
        let bb = Text::with_baseline(glyph, Point::zero(), self.text_style, Baseline::Alphabetic)
            .bounding_box();
        Rect::new(
            bb.top_left.x as f32,
            bb.top_left.y as f32,
            (bb.top_left.x + bb.size.width as i32) as f32,
            (bb.top_left.y + bb.size.height as i32) as f32,
        )
    }

    fn draw_text(&mut self, glyph: &str, x: f32, y: f32) -> Result<(), Self::Error> {
        let origin = self.point(x, y);
        Text::with_baseline(glyph, origin, self.text_style, Baseline::Alphabetic)
            .draw(&mut *self.target)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pinview::config::Config;
    use crate::pinview::render::draw_slots;
    use embedded_graphics::mono_font::ascii::FONT_6X10;
    use std::convert::Infallible;

    const BORDER: Rgb888 = Rgb888::new(255, 0, 0);
    const INK: Rgb888 = Rgb888::new(255, 255, 255);

    struct Frame {
        width: u32,
        height: u32,
        pixels: Vec<Option<Rgb888>>,
    }

    impl Frame {
        fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                pixels: vec![None; (width * height) as usize],
            }
        }

        fn at(&self, x: i32, y: i32) -> Option<Rgb888> {
            self.pixels[(y as u32 * self.width + x as u32) as usize]
        }

        fn count_in(&self, color: Rgb888, x0: i32, x1: i32) -> usize {
            (0..self.height as i32)
                .flat_map(|y| (x0..x1).map(move |x| (x, y)))
                .filter(|&(x, y)| self.at(x, y) == Some(color))
                .count()
        }
    }

    impl OriginDimensions for Frame {
        fn size(&self) -> Size {
            Size::new(self.width, self.height)
        }
    }

    impl DrawTarget for Frame {
        type Color = Rgb888;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(p, c) in pixels {
                if p.x >= 0 && p.y >= 0 && (p.x as u32) < self.width && (p.y as u32) < self.height
                {
                    self.pixels[(p.y as u32 * self.width + p.x as u32) as usize] = Some(c);
                }
            }
            Ok(())
        }
    }

    fn config() -> Config {
        let mut c = Config::default();
        c.item_border_color = Rgba::new(255, 0, 0, 255);
        c
    }

    #[test]
    fn test_slot_outlines_land_on_layout_edges() {
        let c = config();
        let mut frame = Frame::new(200, 50);
        let mut canvas = GraphicsCanvas::new(&mut frame, MonoTextStyle::new(&FONT_6X10, INK));
        draw_slots(&mut canvas, &c, "", false).unwrap();

        // Slot 1 spans x = 52..92.
        assert_eq!(frame.at(52, 24), Some(BORDER));
        assert_eq!(frame.at(91, 24), Some(BORDER));
        assert_eq!(frame.at(51, 24), None);
        assert_eq!(frame.at(72, 24), None);
    }

    #[test]
    fn test_highlighted_slot_has_thicker_border() {
        let c = config();
        let mut frame = Frame::new(200, 50);
        let mut canvas = GraphicsCanvas::new(&mut frame, MonoTextStyle::new(&FONT_6X10, INK));
        draw_slots(&mut canvas, &c, "1", true).unwrap();

        let normal = frame.count_in(BORDER, 104, 144);
        let highlighted = frame.count_in(BORDER, 50, 94);
        assert!(highlighted > normal);
    }

    #[test]
    fn test_glyph_drawn_near_slot_center() {
        let c = config();
        let mut frame = Frame::new(200, 50);
        let mut canvas = GraphicsCanvas::new(&mut frame, MonoTextStyle::new(&FONT_6X10, INK));
        draw_slots(&mut canvas, &c, "8", false).unwrap();

        let inked: Vec<(i32, i32)> = (0..50)
            .flat_map(|y| (0..52).map(move |x| (x, y)))
            .filter(|&(x, y)| frame.at(x, y) == Some(INK))
            .collect();
        assert!(!inked.is_empty());
        let (min_x, max_x) = (
            inked.iter().map(|p| p.0).min().unwrap(),
            inked.iter().map(|p| p.0).max().unwrap(),
        );
        let (min_y, max_y) = (
            inked.iter().map(|p| p.1).min().unwrap(),
            inked.iter().map(|p| p.1).max().unwrap(),
        );
        assert!(((min_x + max_x) / 2 - 20).abs() <= 3);
        assert!(((min_y + max_y) / 2 - 24).abs() <= 3);
    }

    #[test]
    fn test_text_bounds_sit_on_baseline() {
        let mut frame = Frame::new(10, 10);
        let canvas = GraphicsCanvas::new(&mut frame, MonoTextStyle::new(&FONT_6X10, INK));
        let bounds = canvas.text_bounds("5");
        assert_eq!(bounds.width(), 6.0);
        assert_eq!(bounds.height(), 10.0);
        assert!(bounds.top < 0.0);
    }
}

//! Render pipeline: draws every slot, left to right, on a [`Canvas`].

use super::canvas::{Canvas, Stroke};
use super::config::Config;
use super::geometry::{Layout, PointF, Rect};

/// Index of the slot that receives the next digit, if one is highlighted.
///
/// Only a focused view highlights, and a full view has no next slot.
pub fn highlighted_slot(config: &Config, len: usize, focused: bool) -> Option<usize> {
    (focused && len < config.item_count).then_some(len)
}

/// Border stroke width of slot `index` for a text of `len` characters.
pub fn stroke_width_for(config: &Config, index: usize, len: usize, focused: bool) -> f32 {
    if highlighted_slot(config, len, focused) == Some(index) {
        config.selected_item_border_width
    } else {
        config.item_border_width
    }
}

/// Baseline origin that centers a glyph with `bounds` on `center`.
///
/// The bearings are subtracted so the glyph box, not its baseline, ends up
/// centered.
pub fn glyph_origin(center: PointF, bounds: Rect) -> PointF {
    PointF {
        x: center.x - bounds.width().abs() / 2.0 - bounds.left,
        y: center.y + bounds.height().abs() / 2.0 - bounds.bottom,
    }
}

/// Draws all slots of `config` with `text` and the given focus state.
///
/// The canvas origin is moved slot by slot and moved back once the pass is
/// over, also when a drawing call fails.
pub fn draw_slots<C: Canvas>(
    canvas: &mut C,
    config: &Config,
    text: &str,
    focused: bool,
) -> Result<(), C::Error> {
    let glyphs: Vec<&str> = text
        .char_indices()
        .map(|(i, ch)| &text[i..i + ch.len_utf8()])
        .collect();

    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "pinview_render",
        slots = config.item_count,
        filled = glyphs.len(),
        focused
    )
    .entered();

    let mut dx = 0.0;
    let result = draw_pass(canvas, config, &glyphs, focused, &mut dx);
    canvas.translate(-dx, 0.0);
    result
}

fn draw_pass<C: Canvas>(
    canvas: &mut C,
    config: &Config,
    glyphs: &[&str],
    focused: bool,
    dx: &mut f32,
) -> Result<(), C::Error> {
    let layout = Layout::new(config);
    for index in 0..config.item_count {
        let stroke = Stroke {
            width: stroke_width_for(config, index, glyphs.len(), focused),
            color: config.item_border_color,
        };

        let shift = layout.slot_translation(index);
        if shift != 0.0 {
            canvas.translate(shift, 0.0);
            *dx += shift;
        }

        let rect = layout.slot_rect(index);
        canvas.stroke_round_rect(rect, config.item_corner_radius, &stroke)?;

        if let Some(glyph) = glyphs.get(index) {
            let bounds = canvas.text_bounds(glyph);
            let origin = glyph_origin(rect.center(), bounds);
            canvas.draw_text(glyph, origin.x, origin.y)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pinview::config::{with_item_border_color, with_padding, Rgba};
    use crate::pinview::geometry::Insets;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Rect { rect: Rect, radius: f32, stroke: Stroke },
        Text { glyph: String, x: f32, y: f32 },
    }

    // Records every call in absolute coordinates.
    #[derive(Default)]
    struct Recorder {
        dx: f32,
        dy: f32,
        ops: Vec<Op>,
        fail_on_text: bool,
    }

    const BOUNDS: Rect = Rect::new(1.0, -10.0, 7.0, 0.0);

    impl Canvas for Recorder {
        type Error = &'static str;

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
            self.ops.push(Op::Rect {
                rect: rect.offset(self.dx, self.dy),
                radius,
                stroke: *stroke,
            });
            Ok(())
        }

        fn text_bounds(&self, _glyph: &str) -> Rect {
            BOUNDS
        }

        fn draw_text(&mut self, glyph: &str, x: f32, y: f32) -> Result<(), Self::Error> {
            if self.fail_on_text {
                return Err("text failed");
            }
            self.ops.push(Op::Text {
                glyph: glyph.to_string(),
                x: x + self.dx,
                y: y + self.dy,
            });
            Ok(())
        }
    }

    fn rects(ops: &[Op]) -> Vec<(Rect, Stroke)> {
        ops.iter()
            .filter_map(|op| match op {
                Op::Rect { rect, stroke, .. } => Some((*rect, *stroke)),
                _ => None,
            })
            .collect()
    }

    fn texts(ops: &[Op]) -> Vec<(String, f32, f32)> {
        ops.iter()
            .filter_map(|op| match op {
                Op::Text { glyph, x, y } => Some((glyph.clone(), *x, *y)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_one_rect_per_slot_at_absolute_positions() {
        let c = Config::resolve(&[with_padding(Insets::uniform(4.0))]);
        let mut canvas = Recorder::default();
        draw_slots(&mut canvas, &c, "", false).unwrap();

        let layout = Layout::new(&c);
        let drawn = rects(&canvas.ops);
        assert_eq!(drawn.len(), c.item_count);
        for (i, (rect, _)) in drawn.iter().enumerate() {
            assert_eq!(*rect, layout.absolute_slot_rect(i));
        }
        assert!(matches!(canvas.ops[0], Op::Rect { radius, .. } if radius == 4.0));
    }

    #[test]
    fn test_highlight_follows_text_length_only_when_focused() {
        let c = Config::default();
        let mut canvas = Recorder::default();
        draw_slots(&mut canvas, &c, "123", true).unwrap();
        let widths: Vec<f32> = rects(&canvas.ops).iter().map(|(_, s)| s.width).collect();
        assert_eq!(widths, vec![1.0, 1.0, 1.0, 2.0]);
        assert_eq!(highlighted_slot(&c, 3, true), Some(3));

        let mut canvas = Recorder::default();
        draw_slots(&mut canvas, &c, "123", false).unwrap();
        assert!(rects(&canvas.ops).iter().all(|(_, s)| s.width == 1.0));
        assert_eq!(highlighted_slot(&c, 3, false), None);
    }

    #[test]
    fn test_full_text_highlights_nothing() {
        let c = Config::default();
        let mut canvas = Recorder::default();
        draw_slots(&mut canvas, &c, "1234", true).unwrap();
        assert!(rects(&canvas.ops).iter().all(|(_, s)| s.width == 1.0));
        assert_eq!(highlighted_slot(&c, 4, true), None);
    }

    #[test]
    fn test_stroke_width_follows_highlighted_slot() {
        let c = Config::default();
        for len in 0..=c.item_count {
            for index in 0..=c.item_count {
                let expected = if highlighted_slot(&c, len, true) == Some(index) {
                    2.0
                } else {
                    1.0
                };
                assert_eq!(stroke_width_for(&c, index, len, true), expected);
                assert_eq!(stroke_width_for(&c, index, len, false), 1.0);
            }
        }
        assert_eq!(stroke_width_for(&c, 4, 4, true), 1.0);
    }

    #[test]
    fn test_glyph_box_is_centered_in_slot() {
        let c = Config::default();
        let mut canvas = Recorder::default();
        draw_slots(&mut canvas, &c, "42", false).unwrap();

        let layout = Layout::new(&c);
        let drawn = texts(&canvas.ops);
        assert_eq!(drawn.len(), 2);
        for (i, (glyph, x, y)) in drawn.iter().enumerate() {
            let glyph_box = BOUNDS.offset(*x, *y);
            assert_eq!(glyph_box.center(), layout.absolute_slot_rect(i).center());
            assert_eq!(glyph, &"42"[i..i + 1]);
        }
        assert_eq!((drawn[0].1, drawn[0].2), (16.0, 29.0));
    }

    #[test]
    fn test_border_color_comes_from_config() {
        let red = Rgba::new(255, 0, 0, 255);
        let c = Config::resolve(&[with_item_border_color(red)]);
        let mut canvas = Recorder::default();
        draw_slots(&mut canvas, &c, "1", true).unwrap();
        assert!(rects(&canvas.ops).iter().all(|(_, s)| s.color == red));
    }

    #[test]
    fn test_origin_restored_after_pass_and_on_error() {
        let c = Config::default();
        let mut canvas = Recorder::default();
        draw_slots(&mut canvas, &c, "12", true).unwrap();
        assert_eq!((canvas.dx, canvas.dy), (0.0, 0.0));

        let mut canvas = Recorder {
            fail_on_text: true,
            ..Recorder::default()
        };
        assert_eq!(draw_slots(&mut canvas, &c, "12", true), Err("text failed"));
        assert_eq!(canvas.dx, 0.0);
    }

    #[test]
    fn test_glyph_origin_formula() {
        let center = PointF { x: 10.0, y: 10.0 };
        let bounds = Rect::new(2.0, -8.0, 6.0, 1.0);
        assert_eq!(glyph_origin(center, bounds), PointF { x: 6.0, y: 13.5 });
    }
}

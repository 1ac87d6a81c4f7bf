//! Geometry engine: slot rectangles, translations and measurement.
//!
//! Slot rectangles are not expressed in absolute coordinates. Slot 0 is
//! anchored at the start/top padding; every later slot is a local rectangle
//! `[0, top, width, top + height]` drawn after translating the canvas by
//! [`Layout::slot_translation`]. Summing the translations gives the absolute
//! left edge `padding.start + i * (width + spacing)`, which is what
//! [`Layout::absolute_slot_rect`] returns.

use super::config::Config;

/// Axis-aligned rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Right edge.
    pub right: f32,
    /// Bottom edge.
    pub bottom: f32,
}

impl Rect {
    /// Builds a rectangle from its edges.
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Signed width.
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Signed height.
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Center point, robust to flipped edges.
    pub fn center(&self) -> PointF {
        PointF {
            x: self.left + self.width().abs() / 2.0,
            y: self.top + self.height().abs() / 2.0,
        }
    }

    /// The same rectangle moved by `(dx, dy)`.
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self::new(
            self.left + dx,
            self.top + dy,
            self.right + dx,
            self.bottom + dy,
        )
    }
}

/// A point in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointF {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

/// Padding around the row of slots, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    /// Leading edge.
    pub start: f32,
    /// Top edge.
    pub top: f32,
    /// Trailing edge.
    pub end: f32,
    /// Bottom edge.
    pub bottom: f32,
}

impl Insets {
    /// Same padding on every side.
    pub const fn uniform(v: f32) -> Self {
        Self {
            start: v,
            top: v,
            end: v,
            bottom: v,
        }
    }
}

/// Constraint the host places on one dimension during measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureSpec {
    /// The dimension must be exactly this many pixels.
    Exactly(u32),
    /// The dimension may be up to this many pixels. Treated as flexible.
    AtMost(u32),
    /// No constraint.
    Unspecified,
}

/// Measured size in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    /// Width.
    pub width: u32,
    /// Height.
    pub height: u32,
}

/// Slot geometry derived from a [`Config`]. Cheap to build; never cached.
#[derive(Debug, Clone, Copy)]
pub struct Layout<'a> {
    config: &'a Config,
}

impl<'a> Layout<'a> {
    /// Geometry of `config`, including its padding.
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Computes the size of the view under the given constraints.
    ///
    /// Exact constraints pass through unchanged; anything else yields the
    /// preferred size. The content part is truncated to whole pixels before
    /// the padding is added.
    pub fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Size {
        let c = self.config;
        let n = c.item_count as f32;
        let p = &c.padding;

        let width = match width {
            MeasureSpec::Exactly(w) => w,
            _ => {
                let content = (c.item_width * n + c.item_spacing * (n - 1.0)).trunc();
                (content + p.start.trunc() + p.end.trunc()) as u32
            }
        };
        let height = match height {
            MeasureSpec::Exactly(h) => h,
            _ => (c.item_height + p.top + p.bottom) as u32,
        };

        Size { width, height }
    }

    /// Rectangle of slot `index` in the coordinate space left by the
    /// translations of all previous slots.
    pub fn slot_rect(&self, index: usize) -> Rect {
        let c = self.config;
        let top = c.padding.top;
        if index == 0 {
            let start = c.padding.start;
            Rect::new(start, top, start + c.item_width, top + c.item_height)
        } else {
            Rect::new(0.0, top, c.item_width, top + c.item_height)
        }
    }

    /// Horizontal translation applied right before drawing slot `index`.
    pub fn slot_translation(&self, index: usize) -> f32 {
        let c = self.config;
        match index {
            0 => 0.0,
            1 => c.item_spacing + c.item_width + c.padding.start,
            _ => c.item_spacing + c.item_width,
        }
    }

    /// Rectangle of slot `index` in view coordinates.
    pub fn absolute_slot_rect(&self, index: usize) -> Rect {
        let c = self.config;
        let i = index as f32;
        let left = c.padding.start + i * c.item_width + i * c.item_spacing;
        let top = c.padding.top;
        Rect::new(left, top, left + c.item_width, top + c.item_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pinview::config::{
        with_item_count, with_item_spacing, with_item_width, with_padding,
    };

    fn padded() -> Config {
        Config::resolve(&[with_padding(Insets {
            start: 5.0,
            top: 3.0,
            end: 7.0,
            bottom: 2.0,
        })])
    }

    #[test]
    fn test_measure_preferred_size() {
        let c = Config::default();
        let size = Layout::new(&c).measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        assert_eq!(size, Size { width: 196, height: 48 });

        let c = padded();
        let size = Layout::new(&c).measure(MeasureSpec::AtMost(10), MeasureSpec::Unspecified);
        assert_eq!(size, Size { width: 208, height: 53 });
    }

    #[test]
    fn test_measure_exact_passes_through() {
        let c = padded();
        let size = Layout::new(&c).measure(MeasureSpec::Exactly(300), MeasureSpec::Exactly(20));
        assert_eq!(size, Size { width: 300, height: 20 });

        let size = Layout::new(&c).measure(MeasureSpec::Exactly(300), MeasureSpec::Unspecified);
        assert_eq!(size, Size { width: 300, height: 53 });
    }

    #[test]
    fn test_measure_truncates_fractional_content() {
        let c = Config::resolve(&[with_item_width(10.5), with_item_spacing(0.25)]);
        // 4 * 10.5 + 3 * 0.25 = 42.75
        let size = Layout::new(&c).measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        assert_eq!(size.width, 42);
    }

    #[test]
    fn test_measure_saturates_huge_dimensions() {
        let c = Config::resolve(&[
            with_item_count(8),
            with_item_width(6.0e8),
            with_padding(Insets::uniform(1.0)),
        ]);
        let size = Layout::new(&c).measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        assert_eq!(size.width, u32::MAX);
        assert_eq!(size.height, 50);
    }

    #[test]
    fn test_first_slot_anchored_at_padding() {
        let c = padded();
        let layout = Layout::new(&c);
        assert_eq!(layout.slot_rect(0), Rect::new(5.0, 3.0, 45.0, 51.0));
        assert_eq!(layout.slot_rect(2), Rect::new(0.0, 3.0, 40.0, 51.0));
        assert_eq!(layout.absolute_slot_rect(0), layout.slot_rect(0));
    }

    #[test]
    fn test_accumulated_translation_matches_absolute_rects() {
        for n in 3..=8 {
            let mut c = padded();
            c.item_count = Config::resolve(&[with_item_count(n)]).item_count;
            let layout = Layout::new(&c);
            let mut dx = 0.0;
            for i in 0..c.item_count {
                dx += layout.slot_translation(i);
                let local = layout.slot_rect(i);
                assert_eq!(local.offset(dx, 0.0), layout.absolute_slot_rect(i));
            }
        }
    }

    #[test]
    fn test_neighbouring_slots_are_one_spacing_apart() {
        let c = padded();
        let layout = Layout::new(&c);
        for i in 1..c.item_count {
            let prev = layout.absolute_slot_rect(i - 1);
            let cur = layout.absolute_slot_rect(i);
            assert_eq!(cur.left, prev.right + c.item_spacing);
            assert_eq!(cur.top, prev.top);
            assert_eq!(cur.bottom, prev.bottom);
        }
    }

    #[test]
    fn test_center() {
        let r = Rect::new(52.0, 0.0, 92.0, 48.0);
        assert_eq!(r.center(), PointF { x: 72.0, y: 24.0 });
        assert_eq!(r.width(), 40.0);
        assert_eq!(r.height(), 48.0);
    }
}

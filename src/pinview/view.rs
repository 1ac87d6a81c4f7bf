//! Measurement and drawing entry points of the PIN view.

use super::canvas::Canvas;
use super::geometry::{Layout, MeasureSpec, Size};
use super::model::Model;
use super::render::draw_slots;
use super::terminal::CellCanvas;

impl Model {
    /// Size of the view under the given constraints.
    ///
    /// An exact constraint is returned as is. Otherwise the preferred size
    /// is used: the slots and the spacing between them, plus the padding.
    ///
    /// # Arguments
    ///
    /// * `width` - Constraint on the width
    /// * `height` - Constraint on the height
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_pinview::pinview::{self, Insets, MeasureSpec, Size};
    ///
    /// let mut pin = pinview::new(vec![]);
    /// // 4 slots of 40 px with 12 px between them, 48 px high.
    /// let size = pin.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
    /// assert_eq!(size, Size { width: 196, height: 48 });
    ///
    /// pin.set_padding(Insets::uniform(4.0));
    /// let size = pin.measure(MeasureSpec::AtMost(100), MeasureSpec::Exactly(64));
    /// assert_eq!(size, Size { width: 204, height: 64 });
    /// ```
    pub fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Size {
        Layout::new(&self.config).measure(width, height)
    }

    /// Draws the view on `canvas`, leaving its origin where it was.
    ///
    /// Errors from the canvas are returned as soon as a drawing call fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_pinview::pinview::{self, CellCanvas, CellMetrics};
    ///
    /// let mut pin = pinview::new(vec![]);
    /// pin.set_value("5");
    ///
    /// let mut canvas = CellCanvas::new(25, 3, CellMetrics::default());
    /// pin.render_to(&mut canvas).unwrap();
    /// assert_eq!(canvas.char_at(0, 0), Some('╭'));
    /// assert_eq!(canvas.char_at(2, 1), Some('5'));
    /// ```
    pub fn render_to<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        draw_slots(canvas, &self.config, &self.value, self.focus)
    }

    /// Renders the view for the terminal.
    ///
    /// The grid is sized from the preferred size of the view and
    /// [`cell_metrics`](Model::cell_metrics). The highlighted slot is drawn
    /// with heavy lines.
    pub fn view(&self) -> String {
        let size = self.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        let mut canvas =
            CellCanvas::for_size(size, self.cell_metrics).with_text_style(self.text_style.clone());
        if self.config.selected_item_border_width > self.config.item_border_width {
            canvas = canvas.with_heavy_from(self.config.selected_item_border_width);
        }
        match self.render_to(&mut canvas) {
            Ok(()) => canvas.render(),
            Err(never) => match never {},
        }
    }

    /// Returns whether the view changed since the last call, and resets the
    /// flag. Edits, focus changes and setters raise it immediately.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Returns whether the measured size may have changed since the last call,
    /// and resets the flag.
    pub fn take_layout_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_layout)
    }
}

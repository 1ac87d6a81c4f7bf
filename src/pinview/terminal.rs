//! Terminal backend: rasterizes the render pipeline onto a grid of cells.
//!
//! Pixel coordinates are mapped to cells through [`CellMetrics`]. Rounded
//! rectangles become box-drawing outlines and glyphs land in the cell nearest
//! to their box. Strokes at least as wide as the heavy threshold use heavy
//! lines, which is how the highlighted slot stands out in a terminal.

use std::convert::Infallible;

use lipgloss_extras::prelude::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::canvas::{Canvas, Stroke};
use super::config::Rgba;
use super::geometry::{Rect, Size};

/// Size of one terminal cell in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    /// Pixels per column.
    pub cell_width: f32,
    /// Pixels per row.
    pub cell_height: f32,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            cell_width: 8.0,
            cell_height: 16.0,
        }
    }
}

struct BoxGlyphs {
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    horizontal: char,
    vertical: char,
}

const LIGHT_ROUNDED: BoxGlyphs = BoxGlyphs {
    top_left: '╭',
    top_right: '╮',
    bottom_left: '╰',
    bottom_right: '╯',
    horizontal: '─',
    vertical: '│',
};

const LIGHT_SQUARE: BoxGlyphs = BoxGlyphs {
    top_left: '┌',
    top_right: '┐',
    bottom_left: '└',
    bottom_right: '┘',
    horizontal: '─',
    vertical: '│',
};

const HEAVY: BoxGlyphs = BoxGlyphs {
    top_left: '┏',
    top_right: '┓',
    bottom_left: '┗',
    bottom_right: '┛',
    horizontal: '━',
    vertical: '┃',
};

// Second half of a double-width glyph.
const CONTINUATION: char = '\0';

#[derive(Debug, Clone, Copy, PartialEq)]
enum Ink {
    Border(Rgba),
    Text,
}

#[derive(Debug, Clone, Copy)]
struct Cell {
    ch: char,
    ink: Option<Ink>,
}

const BLANK: Cell = Cell { ch: ' ', ink: None };

/// A [`Canvas`] that draws into a fixed grid of terminal cells.
#[derive(Debug, Clone)]
pub struct CellCanvas {
    metrics: CellMetrics,
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
    dx: f32,
    dy: f32,
    heavy_from: f32,
    text_style: Style,
}

impl CellCanvas {
    /// Creates an empty grid of `cols` x `rows` cells.
    pub fn new(cols: usize, rows: usize, metrics: CellMetrics) -> Self {
        Self {
            metrics,
            cols,
            rows,
            cells: vec![BLANK; cols * rows],
            dx: 0.0,
            dy: 0.0,
            heavy_from: f32::INFINITY,
            text_style: Style::new(),
        }
    }

    /// Creates a grid large enough to hold `size` pixels.
    pub fn for_size(size: Size, metrics: CellMetrics) -> Self {
        let cols = (size.width as f32 / metrics.cell_width).ceil() as usize;
        let rows = (size.height as f32 / metrics.cell_height).ceil() as usize;
        Self::new(cols, rows, metrics)
    }

    /// Strokes at least `width` pixels wide are drawn with heavy lines.
    pub fn with_heavy_from(mut self, width: f32) -> Self {
        self.heavy_from = width;
        self
    }

    /// Style applied to glyphs when rendering.
    pub fn with_text_style(mut self, style: Style) -> Self {
        self.text_style = style;
        self
    }

    /// Grid width in cells.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Grid height in cells.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Character at a cell, if inside the grid.
    pub fn char_at(&self, col: usize, row: usize) -> Option<char> {
        (col < self.cols && row < self.rows).then(|| self.cells[row * self.cols + col].ch)
    }

    /// The grid as text, without colors.
    pub fn plain(&self) -> String {
        self.lines(|run, _| run)
    }

    /// The grid as text, borders colored and glyphs styled with lipgloss.
    pub fn render(&self) -> String {
        self.lines(|run, ink| match ink {
            Some(Ink::Border(color)) => Style::new()
                .foreground(Color::from(color.to_hex().as_str()))
                .inline(true)
                .render(&run),
            Some(Ink::Text) => self.text_style.clone().inline(true).render(&run),
            None => run,
        })
    }

    fn lines<F>(&self, paint: F) -> String
    where
        F: Fn(String, Option<Ink>) -> String,
    {
        let mut out = Vec::with_capacity(self.rows);
        for row in self.cells.chunks(self.cols.max(1)).take(self.rows) {
            let mut line = String::new();
            let mut run = String::new();
            let mut run_ink: Option<Ink> = None;
            for cell in row {
                if cell.ch == CONTINUATION {
                    continue;
                }
                if cell.ink != run_ink && !run.is_empty() {
                    line.push_str(&paint(std::mem::take(&mut run), run_ink));
                }
                run_ink = cell.ink;
                run.push(cell.ch);
            }
            if !run.is_empty() {
                line.push_str(&paint(run, run_ink));
            }
            out.push(line);
        }
        out.join("\n")
    }

    fn col(&self, x: f32) -> i64 {
        (x / self.metrics.cell_width).round() as i64
    }

    fn row(&self, y: f32) -> i64 {
        (y / self.metrics.cell_height).round() as i64
    }

    fn put(&mut self, col: i64, row: i64, ch: char, ink: Ink) {
        if col < 0 || row < 0 {
            return;
        }
        let (col, row) = (col as usize, row as usize);
        if col < self.cols && row < self.rows {
            self.cells[row * self.cols + col] = Cell { ch, ink: Some(ink) };
        }
    }
}

impl Canvas for CellCanvas {
    type Error = Infallible;

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
        let r = rect.offset(self.dx, self.dy);
        let left = self.col(r.left);
        let top = self.row(r.top);
        let right = (self.col(r.right) - 1).max(left + 1);
        let bottom = (self.row(r.bottom) - 1).max(top + 1);

        let glyphs = if stroke.width >= self.heavy_from {
            &HEAVY
        } else if radius > 0.0 {
            &LIGHT_ROUNDED
        } else {
            &LIGHT_SQUARE
        };
        let ink = Ink::Border(stroke.color);

        for col in left + 1..right {
            self.put(col, top, glyphs.horizontal, ink);
            self.put(col, bottom, glyphs.horizontal, ink);
        }
        for row in top + 1..bottom {
            self.put(left, row, glyphs.vertical, ink);
            self.put(right, row, glyphs.vertical, ink);
        }
        self.put(left, top, glyphs.top_left, ink);
        self.put(right, top, glyphs.top_right, ink);
        self.put(left, bottom, glyphs.bottom_left, ink);
        self.put(right, bottom, glyphs.bottom_right, ink);
        Ok(())
    }

    fn text_bounds(&self, glyph: &str) -> Rect {
        let cells = glyph.width().max(1) as f32;
        Rect::new(
            0.0,
            -self.metrics.cell_height,
            cells * self.metrics.cell_width,
            0.0,
        )
    }

    fn draw_text(&mut self, glyph: &str, x: f32, y: f32) -> Result<(), Self::Error> {
        let col = self.col(x + self.dx);
        let row = self.row(y + self.dy) - 1;
        let mut offset = 0;
        for ch in glyph.chars() {
            self.put(col + offset, row, ch, Ink::Text);
            let w = UnicodeWidthChar::width(ch).unwrap_or(0) as i64;
            for extra in 1..w {
                self.put(col + offset + extra, row, CONTINUATION, Ink::Text);
            }
            offset += w.max(1);
        }
        Ok(())
    }
}

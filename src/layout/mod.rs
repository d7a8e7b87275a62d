//! # Page Layout Primitives
//!
//! The write position and the accumulated page content for one generation
//! pass.
//!
//! A [`Cursor`] is the single owner of position state: the horizontal write
//! position on the current line, the baseline y, and which page we are on.
//! Composition threads it by `&mut` through every draw, so no segment can
//! leave a stale coordinate behind for the next one.
//!
//! A [`Canvas`] collects [`DrawCommand`]s per page. Coordinates are layout
//! units with a top-left origin; the PDF writer flips them.

pub mod underline;

use crate::model::{FontState, PageSetup};

/// Horizontal gap left after every drawn segment.
pub const SEGMENT_GAP: f64 = 2.0;
/// Distance from the text baseline down to its underline.
pub const UNDERLINE_OFFSET: f64 = 1.0;
/// Stroke width for underlines and rules.
pub const STROKE_WIDTH: f64 = 0.4;

const EPSILON: f64 = 1e-6;

/// Running write position for one generation pass.
#[derive(Debug, Clone)]
pub struct Cursor {
    x: f64,
    y: f64,
    page: usize,
    indent: f64,
    setup: PageSetup,
}

impl Cursor {
    /// A fresh cursor at the template's first baseline.
    pub fn new(setup: &PageSetup) -> Self {
        Self {
            x: setup.margin,
            y: setup.start_y,
            page: 0,
            indent: 0.0,
            setup: setup.clone(),
        }
    }

    pub fn current_x(&self) -> f64 {
        self.x
    }

    pub fn current_y(&self) -> f64 {
        self.y
    }

    /// Zero-based index of the page being written.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn setup(&self) -> &PageSetup {
        &self.setup
    }

    /// Where a new line starts: the margin plus the current indent.
    pub fn line_left(&self) -> f64 {
        self.setup.margin + self.indent
    }

    pub fn right_edge(&self) -> f64 {
        self.setup.right_edge()
    }

    /// Width left on the current line.
    pub fn remaining_width(&self) -> f64 {
        (self.right_edge() - self.x).max(0.0)
    }

    pub fn at_line_start(&self) -> bool {
        (self.x - self.line_left()).abs() < EPSILON
    }

    /// Indent subsequent lines by `indent` past the margin.
    pub fn set_indent(&mut self, indent: f64) {
        self.indent = indent;
    }

    /// Move the baseline down by `lines` line heights. Passing the bottom
    /// margin continues at the top of the next page.
    pub fn advance_line(&mut self, lines: f64) {
        self.y += lines * self.setup.line_height;
        if self.y > self.setup.height - self.setup.bottom {
            self.page += 1;
            self.y = self.setup.top;
            tracing::debug!(page = self.page, "continuing on a new page");
        }
    }

    /// Return to the start of the line.
    pub fn carriage_return(&mut self) {
        self.x = self.line_left();
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn advance_x(&mut self, dx: f64) {
        self.x += dx;
    }
}

/// What to draw.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A text run with its left edge at `x` and baseline at `y`.
    Text {
        x: f64,
        y: f64,
        text: String,
        font: FontState,
        /// Measured width of `text` in `font`.
        width: f64,
    },
    /// A straight stroke.
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        width: f64,
    },
}

/// A fully laid-out page ready for PDF serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPage {
    pub width: f64,
    pub height: f64,
    pub commands: Vec<DrawCommand>,
}

/// Accumulated page content for one generation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pages: Vec<LayoutPage>,
    width: f64,
    height: f64,
    composed: bool,
}

impl Canvas {
    pub fn new(setup: &PageSetup) -> Self {
        Self {
            pages: vec![LayoutPage {
                width: setup.width,
                height: setup.height,
                commands: Vec::new(),
            }],
            width: setup.width,
            height: setup.height,
            composed: false,
        }
    }

    fn page_mut(&mut self, page: usize) -> &mut LayoutPage {
        while self.pages.len() <= page {
            self.pages.push(LayoutPage {
                width: self.width,
                height: self.height,
                commands: Vec::new(),
            });
        }
        &mut self.pages[page]
    }

    /// Draw a text run. Empty runs leave no text command.
    pub fn draw_text(
        &mut self,
        page: usize,
        x: f64,
        y: f64,
        text: &str,
        font: &FontState,
        width: f64,
    ) {
        if text.is_empty() {
            return;
        }
        self.page_mut(page).commands.push(DrawCommand::Text {
            x,
            y,
            text: text.to_string(),
            font: font.clone(),
            width,
        });
    }

    pub fn draw_line(&mut self, page: usize, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.page_mut(page).commands.push(DrawCommand::Line {
            x1,
            y1,
            x2,
            y2,
            width: STROKE_WIDTH,
        });
    }

    /// Record that a composition pass has written into this canvas.
    pub fn mark_composed(&mut self) {
        self.composed = true;
    }

    pub fn is_composed(&self) -> bool {
        self.composed
    }

    pub fn pages(&self) -> &[LayoutPage] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All commands in draw order, with their page index.
    pub fn commands(&self) -> impl Iterator<Item = (usize, &DrawCommand)> {
        self.pages
            .iter()
            .enumerate()
            .flat_map(|(i, p)| p.commands.iter().map(move |c| (i, c)))
    }

    /// The text runs in draw order joined by single spaces.
    pub fn plain_text(&self) -> String {
        self.commands()
            .filter_map(|(_, c)| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                DrawCommand::Line { .. } => None,
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_starts_at_header_offset() {
        let setup = PageSetup::default().starting_at(30.0);
        let cursor = Cursor::new(&setup);
        assert_eq!(cursor.current_x(), 20.0);
        assert_eq!(cursor.current_y(), 30.0);
        assert!(cursor.at_line_start());
    }

    #[test]
    fn test_advance_line_fractional() {
        let mut cursor = Cursor::new(&PageSetup::default());
        cursor.advance_line(1.5);
        assert_eq!(cursor.current_y(), 35.0);
        cursor.advance_line(1.0);
        assert_eq!(cursor.current_y(), 45.0);
    }

    #[test]
    fn test_advance_past_bottom_starts_new_page() {
        let mut cursor = Cursor::new(&PageSetup::default());
        cursor.move_to(20.0, 270.0);
        cursor.advance_line(1.0);
        assert_eq!(cursor.page(), 1);
        assert_eq!(cursor.current_y(), 20.0);
    }

    #[test]
    fn test_carriage_return_honours_indent() {
        let mut cursor = Cursor::new(&PageSetup::default());
        cursor.set_indent(10.0);
        cursor.advance_x(50.0);
        assert!(!cursor.at_line_start());
        cursor.carriage_return();
        assert_eq!(cursor.current_x(), 30.0);
        assert!(cursor.at_line_start());
    }

    #[test]
    fn test_canvas_skips_empty_text_and_grows_pages() {
        let setup = PageSetup::default();
        let mut canvas = Canvas::new(&setup);
        let font = FontState::default();
        canvas.draw_text(0, 20.0, 20.0, "", &font, 0.0);
        canvas.draw_line(0, 20.0, 21.0, 20.0, 21.0);
        canvas.draw_text(2, 20.0, 20.0, "late", &font, 8.0);
        assert_eq!(canvas.page_count(), 3);
        assert_eq!(canvas.commands().count(), 2);
        assert_eq!(canvas.plain_text(), "late");
        assert!(!canvas.is_composed());
    }
}

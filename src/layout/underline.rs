//! # Underlined Runs
//!
//! Draws a run of text at a point with left, center or right alignment and,
//! for blanks, a stroke directly beneath it. The stroke always spans the
//! measured width of the exact text drawn above it, never the width of the
//! slot the text was allowed to occupy.
//!
//! Runs wider than their `max_width` are greedy-wrapped; every wrapped line
//! is anchored at the same x and gets its own underline.

use super::{Canvas, Cursor, UNDERLINE_OFFSET};
use crate::font::FontContext;
use crate::model::{Align, FontState};
use crate::text::wrap_words;

/// Outcome of writing one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Written {
    /// Lines consumed, at least 1.
    pub lines: usize,
    /// Baseline of the last line written.
    pub final_y: f64,
    /// Measured width of the last line written.
    pub last_width: f64,
}

pub struct UnderlineWriter<'a> {
    fonts: &'a FontContext,
}

impl<'a> UnderlineWriter<'a> {
    pub fn new(fonts: &'a FontContext) -> Self {
        Self { fonts }
    }

    /// Write `text` underlined at (`x`, cursor y).
    pub fn write_underlined(
        &self,
        canvas: &mut Canvas,
        cursor: &mut Cursor,
        text: &str,
        x: f64,
        align: Align,
        max_width: Option<f64>,
        font: &FontState,
    ) -> Written {
        self.write(canvas, cursor, text, x, align, max_width, font, true)
    }

    /// Same wrapping and placement as [`write_underlined`](Self::write_underlined),
    /// without the stroke.
    pub fn write_plain(
        &self,
        canvas: &mut Canvas,
        cursor: &mut Cursor,
        text: &str,
        x: f64,
        align: Align,
        max_width: Option<f64>,
        font: &FontState,
    ) -> Written {
        self.write(canvas, cursor, text, x, align, max_width, font, false)
    }

    #[allow(clippy::too_many_arguments)]
    fn write(
        &self,
        canvas: &mut Canvas,
        cursor: &mut Cursor,
        text: &str,
        x: f64,
        align: Align,
        max_width: Option<f64>,
        font: &FontState,
        underline: bool,
    ) -> Written {
        let width = self.fonts.measure(text, font);
        let max = match max_width {
            Some(max) if width > max => max,
            _ => {
                self.draw_line_of_text(canvas, cursor, text, x, align, font, width, underline);
                return Written {
                    lines: 1,
                    final_y: cursor.current_y(),
                    last_width: width,
                };
            }
        };

        let lines = wrap_words(self.fonts, text, font, max, max);
        let mut last_width = 0.0;
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                cursor.advance_line(1.0);
            }
            last_width = self.fonts.measure(line, font);
            self.draw_line_of_text(canvas, cursor, line, x, align, font, last_width, underline);
        }

        Written {
            lines: lines.len(),
            final_y: cursor.current_y(),
            last_width,
        }
    }

    /// Draw one already-measured line on the cursor's baseline.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_line_of_text(
        &self,
        canvas: &mut Canvas,
        cursor: &Cursor,
        text: &str,
        x: f64,
        align: Align,
        font: &FontState,
        width: f64,
        underline: bool,
    ) {
        let left = match align {
            Align::Left => x,
            Align::Center => x - width / 2.0,
            Align::Right => x - width,
        };
        let y = cursor.current_y();
        canvas.draw_text(cursor.page(), left, y, text, font, width);
        if underline {
            let uy = y + UNDERLINE_OFFSET;
            canvas.draw_line(cursor.page(), left, uy, left + width, uy);
        }
    }
}

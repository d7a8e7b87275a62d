//! # Clause Composition
//!
//! Plays a template's draw script against the form values and produces
//! positioned draw commands on a [`Canvas`].
//!
//! Left-aligned text flows: literals fill the rest of the current line and
//! wrap to the line-left margin, blanks are drawn inline by the
//! [`UnderlineWriter`] and the cursor continues after the last line they
//! occupied. Centered and right-aligned runs are collected until the line
//! ends and then laid out as a single group around the alignment anchor, so
//! "`[name]` ... Petitioner" stays on one line flush against the right
//! margin.

use crate::date;
use crate::font::FontContext;
use crate::layout::underline::UnderlineWriter;
use crate::layout::{Canvas, Cursor, SEGMENT_GAP};
use crate::model::{Align, FontState, FormValues};
use crate::template::Segment;
use crate::text::wrap_words;

/// Slot widths for the three parts of a date blank.
pub const DAY_SLOT: f64 = 30.0;
pub const MONTH_SLOT: f64 = 80.0;
pub const YEAR_SLOT: f64 = 40.0;

/// A text run waiting to be placed.
#[derive(Debug, Clone)]
struct Run {
    text: String,
    font: FontState,
    underline: bool,
    /// Blanks hold a field value; literals hold fixed text.
    blank: bool,
    max_width: Option<f64>,
}

/// One line's share of an aligned run.
struct Piece<'r> {
    run: &'r Run,
    text: String,
    width: f64,
}

/// Per-line state that is not cursor position.
struct LineState {
    font: FontState,
    align: Align,
    anchor: f64,
    pending: Vec<Run>,
}

pub struct ClauseComposer<'a> {
    fonts: &'a FontContext,
    base_font: FontState,
}

impl<'a> ClauseComposer<'a> {
    /// A composer that starts every script in `base_font`.
    pub fn new(fonts: &'a FontContext, base_font: &FontState) -> Self {
        Self {
            fonts,
            base_font: base_font.clone(),
        }
    }

    /// Expand `script` into draw commands, reading blanks from `values`.
    ///
    /// Values missing from `values` render as empty blanks. Marks the canvas
    /// composed when done.
    pub fn compose(
        &self,
        script: &[Segment],
        values: &FormValues,
        canvas: &mut Canvas,
        cursor: &mut Cursor,
    ) {
        let mut line = LineState {
            font: self.base_font.clone(),
            align: Align::Left,
            anchor: cursor.current_x(),
            pending: Vec::new(),
        };

        for segment in script {
            self.apply(segment, values, &mut line, canvas, cursor);
        }
        self.flush(&mut line, canvas, cursor);

        canvas.mark_composed();
        tracing::debug!(
            segments = script.len(),
            pages = canvas.page_count(),
            "composed draw script"
        );
    }

    fn apply(
        &self,
        segment: &Segment,
        values: &FormValues,
        line: &mut LineState,
        canvas: &mut Canvas,
        cursor: &mut Cursor,
    ) {
        match segment {
            Segment::Literal { text, underline } => {
                let run = Run {
                    text: text.clone(),
                    font: line.font.clone(),
                    underline: *underline,
                    blank: false,
                    max_width: None,
                };
                self.place(run, line, canvas, cursor);
            }
            Segment::Blank { key, max_width } => {
                let run = blank_run(values.get(key), &line.font, *max_width);
                self.place(run, line, canvas, cursor);
            }
            Segment::DateBlank { key } => {
                let parts = date::split(values.get(key));
                let font = line.font.clone();
                let runs = [
                    blank_run(&parts.day, &font, Some(DAY_SLOT)),
                    literal_run("day of", &font),
                    blank_run(&parts.month, &font, Some(MONTH_SLOT)),
                    literal_run("20", &font),
                    blank_run(&parts.year2, &font, Some(YEAR_SLOT)),
                ];
                for run in runs {
                    self.place(run, line, canvas, cursor);
                }
            }
            Segment::Break => self.new_line(1.0, line, canvas, cursor),
            Segment::Advance { lines } => self.new_line(*lines, line, canvas, cursor),
            Segment::Align { align } => {
                self.flush(line, canvas, cursor);
                line.align = *align;
                line.anchor = match align {
                    Align::Left => cursor.current_x(),
                    Align::Center => cursor.setup().center_x(),
                    Align::Right => cursor.right_edge(),
                };
            }
            Segment::Column { x } => {
                self.flush(line, canvas, cursor);
                let target = cursor.setup().margin + x;
                match line.align {
                    Align::Left => {
                        if target > cursor.current_x() {
                            cursor.move_to(target, cursor.current_y());
                        }
                    }
                    Align::Center | Align::Right => line.anchor = target,
                }
            }
            Segment::Indent { x } => {
                let at_start = cursor.at_line_start();
                cursor.set_indent(*x);
                if at_start {
                    cursor.carriage_return();
                }
            }
            Segment::Font { family, style, size } => {
                line.font = line.font.patched(family.as_deref(), *style, *size);
            }
            Segment::Paragraph => {
                self.flush(line, canvas, cursor);
                if !cursor.at_line_start() {
                    self.new_line(1.0, line, canvas, cursor);
                }
            }
            Segment::Rule => {
                self.flush(line, canvas, cursor);
                let y = cursor.current_y();
                canvas.draw_line(cursor.page(), cursor.setup().margin, y, cursor.right_edge(), y);
            }
        }
    }

    fn place(&self, run: Run, line: &mut LineState, canvas: &mut Canvas, cursor: &mut Cursor) {
        match line.align {
            Align::Left if run.blank => self.place_blank(&run, canvas, cursor),
            Align::Left => self.flow_literal(&run, canvas, cursor),
            Align::Center | Align::Right => line.pending.push(run),
        }
    }

    /// Draw a blank at the cursor, wrapping within the space it is allowed.
    ///
    /// After a wrapped blank the cursor continues past the tail of its last
    /// line, not at the margin, so following text never overwrites it.
    fn place_blank(&self, run: &Run, canvas: &mut Canvas, cursor: &mut Cursor) {
        let first_word = run.text.split_whitespace().next().unwrap_or("");
        let first_width = self.fonts.measure(first_word, &run.font);
        if !cursor.at_line_start() && first_width > cursor.remaining_width() {
            cursor.advance_line(1.0);
            cursor.carriage_return();
        }

        let available = cursor.remaining_width();
        let max = run.max_width.map_or(available, |m| m.min(available));
        let start_x = cursor.current_x();
        let writer = UnderlineWriter::new(self.fonts);
        let written = writer.write_underlined(
            canvas,
            cursor,
            &run.text,
            start_x,
            Align::Left,
            Some(max),
            &run.font,
        );

        cursor.move_to(start_x + written.last_width + SEGMENT_GAP, written.final_y);
    }

    /// Draw fixed text from the cursor, continuing on new lines as needed.
    fn flow_literal(&self, run: &Run, canvas: &mut Canvas, cursor: &mut Cursor) {
        if run.text.trim().is_empty() {
            return;
        }

        let width = self.fonts.measure(&run.text, &run.font);
        let available = cursor.remaining_width();
        let lines = if width <= available {
            vec![run.text.clone()]
        } else {
            let full = cursor.right_edge() - cursor.line_left();
            wrap_words(self.fonts, &run.text, &run.font, available, full)
        };

        let writer = UnderlineWriter::new(self.fonts);
        for (i, text) in lines.iter().enumerate() {
            if i > 0 {
                cursor.advance_line(1.0);
                cursor.carriage_return();
            }
            if text.is_empty() {
                continue;
            }
            let w = self.fonts.measure(text, &run.font);
            let x = cursor.current_x();
            let font = &run.font;
            writer.draw_line_of_text(canvas, cursor, text, x, Align::Left, font, w, run.underline);
            cursor.advance_x(w);
        }
        cursor.advance_x(SEGMENT_GAP);
    }

    /// Lay out the runs collected under center/right alignment.
    ///
    /// The group keeps to the span between the line-left margin and the
    /// anchor. Runs that do not fit go to a following line aligned on the
    /// same anchor.
    fn flush(&self, line: &mut LineState, canvas: &mut Canvas, cursor: &mut Cursor) {
        if line.pending.is_empty() {
            return;
        }
        let runs = std::mem::take(&mut line.pending);
        let span = aligned_span(line, cursor);
        let writer = UnderlineWriter::new(self.fonts);

        if let [run] = runs.as_slice() {
            let max = Some(run.max_width.map_or(span, |m| m.min(span)));
            let (anchor, align) = (line.anchor, line.align);
            let written = if run.underline {
                writer.write_underlined(canvas, cursor, &run.text, anchor, align, max, &run.font)
            } else {
                writer.write_plain(canvas, cursor, &run.text, anchor, align, max, &run.font)
            };
            let end = match line.align {
                Align::Center => line.anchor + written.last_width / 2.0,
                Align::Left | Align::Right => line.anchor,
            };
            cursor.move_to(end + SEGMENT_GAP, written.final_y);
            return;
        }

        let mut x = line.anchor;
        for (i, pieces) in self.pack(&runs, span).iter().enumerate() {
            if i > 0 {
                cursor.advance_line(1.0);
            }
            let total = pieces.iter().map(|p| p.width).sum::<f64>()
                + SEGMENT_GAP * pieces.len().saturating_sub(1) as f64;
            x = match line.align {
                Align::Center => line.anchor - total / 2.0,
                Align::Right => line.anchor - total,
                Align::Left => line.anchor,
            };
            for piece in pieces {
                writer.draw_line_of_text(
                    canvas,
                    cursor,
                    &piece.text,
                    x,
                    Align::Left,
                    &piece.run.font,
                    piece.width,
                    piece.run.underline,
                );
                x += piece.width + SEGMENT_GAP;
            }
        }
        cursor.move_to(x, cursor.current_y());
    }

    /// Pack aligned runs into lines no wider than `span`.
    ///
    /// A run that fits whole is never split. Wider runs, or blanks wider
    /// than their own `max_width`, are word-wrapped.
    fn pack<'r>(&self, runs: &'r [Run], span: f64) -> Vec<Vec<Piece<'r>>> {
        let mut lines: Vec<Vec<Piece<'r>>> = vec![Vec::new()];
        let mut used = 0.0;

        for run in runs {
            let limit = run.max_width.map_or(span, |m| m.min(span));
            let width = self.fonts.measure(&run.text, &run.font);
            let room = |used: f64, empty: bool| {
                if empty {
                    span
                } else {
                    span - used - SEGMENT_GAP
                }
            };

            let texts = if width <= limit {
                vec![run.text.clone()]
            } else {
                let current = lines.last().map_or(true, |l| l.is_empty());
                let first = room(used, current).min(limit);
                wrap_words(self.fonts, &run.text, &run.font, first, limit)
            };

            let wrapped = texts.len() > 1;
            for (i, text) in texts.into_iter().enumerate() {
                let current_empty = lines.last().map_or(true, |l| l.is_empty());
                // An empty first line means the first word did not fit here.
                if i == 0 && wrapped && text.is_empty() {
                    continue;
                }
                let w = self.fonts.measure(&text, &run.font);
                if !current_empty && (i > 0 || w > room(used, false)) {
                    lines.push(Vec::new());
                    used = 0.0;
                }
                let Some(current) = lines.last_mut() else { continue };
                if !current.is_empty() {
                    used += SEGMENT_GAP;
                }
                used += w;
                current.push(Piece { run, text, width: w });
            }
        }
        lines
    }

    /// End the current line and move down `lines` line heights.
    fn new_line(&self, lines: f64, line: &mut LineState, canvas: &mut Canvas, cursor: &mut Cursor) {
        self.flush(line, canvas, cursor);
        cursor.advance_line(lines);
        cursor.carriage_return();
        line.align = Align::Left;
        line.anchor = cursor.current_x();
    }
}

/// Width an aligned group may occupy around its anchor.
fn aligned_span(line: &LineState, cursor: &Cursor) -> f64 {
    let left = line.anchor - cursor.line_left();
    let span = match line.align {
        Align::Right => left,
        Align::Center => 2.0 * left.min(cursor.right_edge() - line.anchor),
        Align::Left => cursor.right_edge() - line.anchor,
    };
    span.max(0.0)
}

fn blank_run(value: &str, font: &FontState, max_width: Option<f64>) -> Run {
    Run {
        text: value.to_string(),
        font: font.clone(),
        underline: true,
        blank: true,
        max_width,
    }
}

fn literal_run(text: &str, font: &FontState) -> Run {
    Run {
        text: text.to_string(),
        font: font.clone(),
        underline: false,
        blank: false,
        max_width: None,
    }
}

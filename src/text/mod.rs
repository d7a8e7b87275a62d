//! # Text Layout
//!
//! Greedy word wrapping against measured widths.
//!
//! Words are never split: a word wider than the line is placed on a line of
//! its own and allowed to overflow. Form values are short identifiers and
//! names far more often than prose, and a broken case number is worse than
//! one that runs into the margin.

use crate::font::FontContext;
use crate::model::FontState;

/// Break `text` into lines by packing as many words as fit.
///
/// The first line may be narrower than the rest (`first_width` is what is
/// left of a partially written line). If not even one word fits there, the
/// first returned line is empty and packing starts over at `rest_width`.
///
/// Always returns at least one line; empty text yields a single empty line.
pub fn wrap_words(
    fonts: &FontContext,
    text: &str,
    font: &FontState,
    first_width: f64,
    rest_width: f64,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut limit = first_width;

    for word in text.split_whitespace() {
        if line.is_empty() {
            if lines.is_empty() && limit < rest_width && fonts.measure(word, font) > limit {
                lines.push(String::new());
                limit = rest_width;
            }
            line.push_str(word);
            continue;
        }

        let candidate = format!("{} {}", line, word);
        if fonts.measure(&candidate, font) <= limit {
            line = candidate;
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
            limit = rest_width;
        }
    }

    lines.push(line);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> FontContext {
        FontContext::new()
    }

    #[test]
    fn test_single_line_when_it_fits() {
        let fc = ctx();
        let font = FontState::helvetica(12.0);
        let lines = wrap_words(&fc, "Ravi Kumar", &font, 100.0, 100.0);
        assert_eq!(lines, vec!["Ravi Kumar"]);
    }

    #[test]
    fn test_flush_after_second_word() {
        let fc = ctx();
        let font = FontState::helvetica(12.0);
        let two = fc.measure("alpha beta", &font);
        let three = fc.measure("alpha beta gamma", &font);
        let max = (two + three) / 2.0;
        let lines = wrap_words(&fc, "alpha beta gamma", &font, max, max);
        assert_eq!(lines, vec!["alpha beta", "gamma"]);
    }

    #[test]
    fn test_long_word_is_never_split() {
        let fc = ctx();
        let font = FontState::helvetica(12.0);
        let lines = wrap_words(&fc, "a Supercalifragilisticexpialidocious b", &font, 10.0, 10.0);
        assert_eq!(lines, vec!["a", "Supercalifragilisticexpialidocious", "b"]);
    }

    #[test]
    fn test_narrow_first_line_is_given_up() {
        let fc = ctx();
        let font = FontState::helvetica(12.0);
        let lines = wrap_words(&fc, "residing at Chennai", &font, 2.0, 170.0);
        assert_eq!(lines, vec!["", "residing at Chennai"]);
    }

    #[test]
    fn test_partial_first_line_then_full_width() {
        let fc = ctx();
        let font = FontState::helvetica(12.0);
        let first = fc.measure("one two", &font) + 0.1;
        let lines = wrap_words(&fc, "one two three four", &font, first, 500.0);
        assert_eq!(lines, vec!["one two", "three four"]);
    }

    #[test]
    fn test_empty_text_yields_one_empty_line() {
        let fc = ctx();
        let lines = wrap_words(&fc, "", &FontState::default(), 50.0, 50.0);
        assert_eq!(lines, vec![String::new()]);
    }
}

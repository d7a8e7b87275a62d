//! Structured error types for the Docket form generator.
//!
//! Template misconfiguration is fatal and surfaces at load time. Missing or
//! unparsable field values are never errors: they degrade to empty blanks.

use thiserror::Error;

/// The unified error type returned by all public Docket API functions.
#[derive(Debug, Error)]
pub enum DocketError {
    /// Template or form-value JSON failed to parse.
    #[error("Failed to parse input: {source}{}", hint_suffix(.hint))]
    ParseError {
        source: serde_json::Error,
        hint: String,
    },

    /// A draw script refers to a field the template does not declare.
    #[error("Template `{template}` references unknown field `{key}`")]
    UnknownField { template: String, key: String },

    /// Two fields in one schema share a key.
    #[error("Template `{template}` declares field `{key}` more than once")]
    DuplicateField { template: String, key: String },

    /// A date blank points at a field whose input kind is not `date`.
    #[error("Template `{template}` renders `{key}` as a date but the field is not a date input")]
    NotADateField { template: String, key: String },

    /// No built-in template with this id.
    #[error("No template named `{0}`")]
    UnknownTemplate(String),

    /// A `KEY=VALUE` assignment without the `=`.
    #[error("Invalid field assignment `{0}`, expected KEY=VALUE")]
    InvalidAssignment(String),

    /// Preview or download requested before any document was generated.
    #[error("Nothing to export: generate the document first")]
    NotRendered,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn hint_suffix(hint: &str) -> String {
    if hint.is_empty() {
        String::new()
    } else {
        format!("\n  Hint: {}", hint)
    }
}

impl From<serde_json::Error> for DocketError {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "Check for trailing commas, missing quotes, or unescaped characters.".to_string()
            }
            serde_json::error::Category::Data => {
                "The JSON is valid but doesn't match the expected shape. \
                 Check field names and types."
                    .to_string()
            }
            serde_json::error::Category::Eof => {
                "Unexpected end of input. Is the JSON truncated?".to_string()
            }
            serde_json::error::Category::Io => String::new(),
        };
        DocketError::ParseError { source: e, hint }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_carries_hint() {
        let err: DocketError = serde_json::from_str::<serde_json::Value>("{\"a\": 1,}")
            .unwrap_err()
            .into();
        let msg = err.to_string();
        assert!(msg.starts_with("Failed to parse input"));
        assert!(msg.contains("Hint: Check for trailing commas"));
    }

    #[test]
    fn test_unknown_field_message() {
        let err = DocketError::UnknownField {
            template: "bail".to_string(),
            key: "ccNumbr".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Template `bail` references unknown field `ccNumbr`"
        );
    }
}

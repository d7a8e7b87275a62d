//! # Form Templates
//!
//! A template is pure data: the field schema that drives the input form, and
//! the draw script the composer plays back against the filled-in values.
//! The four court forms differ only in that data.
//!
//! Templates are validated when they are loaded, so a script that points at
//! a field the schema does not declare never reaches a user.

pub mod affidavit;
pub mod bail;
pub mod family_court;
pub mod surrender;

use crate::error::DocketError;
use crate::model::{Align, FieldSpec, FontState, FontStyle, FormValues, InputKind, PageSetup};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One step of a draw script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Segment {
    /// Fixed text. Underlined only when marked.
    Literal {
        text: String,
        #[serde(default)]
        underline: bool,
    },
    /// A field value, underlined.
    Blank {
        key: String,
        #[serde(default, rename = "maxWidth", skip_serializing_if = "Option::is_none")]
        max_width: Option<f64>,
    },
    /// A date field as three underlined blanks: day, month name, two-digit year.
    DateBlank { key: String },
    /// Next line.
    Break,
    /// Move down by a number of line heights and start a new line.
    Advance { lines: f64 },
    /// Alignment for the rest of the current line.
    Align { align: Align },
    /// Tab stop, measured from the left margin.
    Column { x: f64 },
    /// Left indent for subsequent lines, measured from the margin.
    Indent { x: f64 },
    /// Change some of the font properties.
    Font {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        family: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<FontStyle>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<f64>,
    },
    /// Start a new paragraph unless already at the start of a line.
    Paragraph,
    /// Horizontal rule across the writable width.
    Rule,
}

/// Ordered draw steps for one template.
pub type DrawScript = Vec<Segment>;

impl Segment {
    pub fn lit(text: &str) -> Self {
        Segment::Literal {
            text: text.to_string(),
            underline: false,
        }
    }

    pub fn underlined(text: &str) -> Self {
        Segment::Literal {
            text: text.to_string(),
            underline: true,
        }
    }

    pub fn blank(key: &str) -> Self {
        Segment::Blank {
            key: key.to_string(),
            max_width: None,
        }
    }

    pub fn blank_max(key: &str, max_width: f64) -> Self {
        Segment::Blank {
            key: key.to_string(),
            max_width: Some(max_width),
        }
    }

    pub fn date(key: &str) -> Self {
        Segment::DateBlank {
            key: key.to_string(),
        }
    }

    pub fn advance(lines: f64) -> Self {
        Segment::Advance { lines }
    }

    pub fn align(align: Align) -> Self {
        Segment::Align { align }
    }

    pub fn center() -> Self {
        Segment::align(Align::Center)
    }

    pub fn right() -> Self {
        Segment::align(Align::Right)
    }

    pub fn column(x: f64) -> Self {
        Segment::Column { x }
    }

    pub fn indent(x: f64) -> Self {
        Segment::Indent { x }
    }

    pub fn style(style: FontStyle) -> Self {
        Segment::Font {
            family: None,
            style: Some(style),
            size: None,
        }
    }

    pub fn size(size: f64) -> Self {
        Segment::Font {
            family: None,
            style: None,
            size: Some(size),
        }
    }

    pub fn font(style: FontStyle, size: f64) -> Self {
        Segment::Font {
            family: None,
            style: Some(style),
            size: Some(size),
        }
    }

    /// The field this segment reads, if any.
    pub fn field_key(&self) -> Option<&str> {
        match self {
            Segment::Blank { key, .. } | Segment::DateBlank { key } => Some(key),
            _ => None,
        }
    }
}

/// A complete form definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Name the generated PDF is saved under.
    pub filename: String,
    #[serde(default)]
    pub page: PageSetup,
    /// Font in effect at the start of the script.
    #[serde(default)]
    pub font: FontState,
    pub fields: Vec<FieldSpec>,
    pub script: DrawScript,
}

impl Template {
    /// Parse a template from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, DocketError> {
        let template: Template = serde_json::from_str(json)?;
        template.validate()?;
        Ok(template)
    }

    /// Check the script against the schema.
    ///
    /// Field keys must be unique, every key the script reads must be
    /// declared, and date blanks must read date fields.
    pub fn validate(&self) -> Result<(), DocketError> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.key.as_str()) {
                return Err(DocketError::DuplicateField {
                    template: self.id.clone(),
                    key: field.key.clone(),
                });
            }
        }

        for segment in &self.script {
            let Some(key) = segment.field_key() else {
                continue;
            };
            let field = self.field(key).ok_or_else(|| DocketError::UnknownField {
                template: self.id.clone(),
                key: key.to_string(),
            })?;
            if matches!(segment, Segment::DateBlank { .. }) && field.kind != InputKind::Date {
                return Err(DocketError::NotADateField {
                    template: self.id.clone(),
                    key: key.to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Initial form state with the schema's defaults filled in.
    pub fn default_values(&self) -> FormValues {
        FormValues::from_schema(&self.fields)
    }
}

/// Ids of the built-in templates, in catalogue order.
pub const BUILTIN_IDS: [&str; 4] = ["family-court", "bail", "affidavit", "surrender"];

/// Load a built-in template by id.
pub fn by_id(id: &str) -> Result<Template, DocketError> {
    let template = match id {
        "family-court" => family_court::template(),
        "bail" => bail::template(),
        "affidavit" => affidavit::template(),
        "surrender" => surrender::template(),
        _ => return Err(DocketError::UnknownTemplate(id.to_string())),
    };
    template.validate()?;
    tracing::debug!(template = id, fields = template.fields.len(), "loaded template");
    Ok(template)
}

/// Load every built-in template.
pub fn builtin() -> Result<Vec<Template>, DocketError> {
    BUILTIN_IDS.iter().map(|id| by_id(id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny(script: DrawScript) -> Template {
        Template {
            id: "tiny".to_string(),
            title: "Tiny".to_string(),
            description: String::new(),
            filename: "tiny.pdf".to_string(),
            page: PageSetup::default(),
            font: FontState::default(),
            fields: vec![
                FieldSpec::text("name", "Name"),
                FieldSpec::date("when", "When"),
            ],
            script,
        }
    }

    #[test]
    fn test_all_builtins_validate() {
        let templates = builtin().unwrap();
        assert_eq!(templates.len(), 4);
        for t in &templates {
            assert!(t.filename.ends_with(".pdf"), "{} has no pdf filename", t.id);
            assert!(!t.script.is_empty());
        }
    }

    #[test]
    fn test_builtin_filenames() {
        let names: Vec<String> = builtin().unwrap().into_iter().map(|t| t.filename).collect();
        assert_eq!(
            names,
            vec![
                "family_court_form.pdf",
                "bail_application_form.pdf",
                "affidavit_of_service.pdf",
                "surrender_petition.pdf",
            ]
        );
    }

    #[test]
    fn test_unknown_template() {
        assert!(matches!(by_id("divorce"), Err(DocketError::UnknownTemplate(_))));
    }

    #[test]
    fn test_unknown_field_fails_at_load() {
        let t = tiny(vec![Segment::blank("name"), Segment::blank("nmae")]);
        match t.validate() {
            Err(DocketError::UnknownField { template, key }) => {
                assert_eq!(template, "tiny");
                assert_eq!(key, "nmae");
            }
            other => panic!("expected UnknownField, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let mut t = tiny(vec![]);
        t.fields.push(FieldSpec::text("name", "Again"));
        assert!(matches!(t.validate(), Err(DocketError::DuplicateField { .. })));
    }

    #[test]
    fn test_date_blank_needs_date_field() {
        let t = tiny(vec![Segment::date("name")]);
        assert!(matches!(t.validate(), Err(DocketError::NotADateField { .. })));
        assert!(tiny(vec![Segment::date("when")]).validate().is_ok());
    }

    #[test]
    fn test_template_from_json() {
        let json = r#"{
            "id": "notice",
            "title": "Notice",
            "filename": "notice.pdf",
            "fields": [
                { "key": "name", "label": "Name" },
                { "key": "on", "label": "On", "kind": "date" }
            ],
            "script": [
                { "type": "font", "style": "bold" },
                { "type": "align", "align": "center" },
                { "type": "literal", "text": "NOTICE" },
                { "type": "break" },
                { "type": "literal", "text": "To" },
                { "type": "blank", "key": "name", "maxWidth": 80 },
                { "type": "dateBlank", "key": "on" }
            ]
        }"#;
        let t = Template::from_json(json).unwrap();
        assert_eq!(t.page, PageSetup::default());
        assert_eq!(t.script[5], Segment::blank_max("name", 80.0));
        assert_eq!(t.script[0], Segment::style(FontStyle::Bold));
    }

    #[test]
    fn test_template_from_json_validates() {
        let json = r#"{
            "id": "broken", "title": "Broken", "filename": "b.pdf",
            "fields": [],
            "script": [{ "type": "blank", "key": "ghost" }]
        }"#;
        assert!(matches!(
            Template::from_json(json),
            Err(DocketError::UnknownField { .. })
        ));
    }
}

//! # Document Model
//!
//! The value types shared by every stage of generation: explicit font state,
//! alignment, page geometry, the field schema a template declares, and the
//! form values a user fills in.
//!
//! Geometry is in layout units (millimetres, top-left origin, y grows down).
//! Font sizes are in points, as on a printed form.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Millimetres per PDF point.
pub const MM_PER_PT: f64 = 25.4 / 72.0;

/// Font weight/slant selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
}

/// The complete font state for a measure or draw call.
///
/// Passed explicitly to every call that depends on it, so a width is always
/// computed against the same font that draws the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontState {
    pub family: String,
    #[serde(default)]
    pub style: FontStyle,
    /// Size in points.
    pub size: f64,
}

impl FontState {
    pub fn new(family: &str, style: FontStyle, size: f64) -> Self {
        Self {
            family: family.to_string(),
            style,
            size,
        }
    }

    pub fn helvetica(size: f64) -> Self {
        Self::new("Helvetica", FontStyle::Normal, size)
    }

    pub fn times(size: f64) -> Self {
        Self::new("Times", FontStyle::Normal, size)
    }

    /// Copy of this state with some properties replaced.
    pub fn patched(
        &self,
        family: Option<&str>,
        style: Option<FontStyle>,
        size: Option<f64>,
    ) -> Self {
        Self {
            family: family.unwrap_or(&self.family).to_string(),
            style: style.unwrap_or(self.style),
            size: size.unwrap_or(self.size),
        }
    }
}

impl Default for FontState {
    fn default() -> Self {
        Self::helvetica(12.0)
    }
}

/// Horizontal alignment of a text run relative to its anchor x.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Page geometry and line metrics for one template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSetup {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    /// Left and right margin.
    #[serde(default = "default_margin")]
    pub margin: f64,
    /// Where a continuation page starts writing.
    #[serde(default = "default_margin")]
    pub top: f64,
    #[serde(default = "default_margin")]
    pub bottom: f64,
    /// Baseline of the first line on the first page.
    #[serde(default = "default_margin")]
    pub start_y: f64,
    #[serde(default = "default_line_height")]
    pub line_height: f64,
}

fn default_width() -> f64 {
    210.0
}

fn default_height() -> f64 {
    297.0
}

fn default_margin() -> f64 {
    20.0
}

fn default_line_height() -> f64 {
    10.0
}

impl Default for PageSetup {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            margin: default_margin(),
            top: default_margin(),
            bottom: default_margin(),
            start_y: default_margin(),
            line_height: default_line_height(),
        }
    }
}

impl PageSetup {
    /// Same geometry with a different first baseline.
    pub fn starting_at(mut self, start_y: f64) -> Self {
        self.start_y = start_y;
        self
    }

    /// Right edge of the writable area.
    pub fn right_edge(&self) -> f64 {
        self.width - self.margin
    }

    pub fn center_x(&self) -> f64 {
        self.width / 2.0
    }
}

/// The HTML input type a field is edited with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    #[default]
    Text,
    Number,
    /// ISO `YYYY-MM-DD`.
    Date,
}

/// One editable field of a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub kind: InputKind,
    /// Pre-filled value shown when the form opens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl FieldSpec {
    pub fn text(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind: InputKind::Text,
            default: None,
        }
    }

    pub fn number(key: &str, label: &str) -> Self {
        Self {
            kind: InputKind::Number,
            ..Self::text(key, label)
        }
    }

    pub fn date(key: &str, label: &str) -> Self {
        Self {
            kind: InputKind::Date,
            ..Self::text(key, label)
        }
    }

    pub fn with_default(mut self, value: &str) -> Self {
        self.default = Some(value.to_string());
        self
    }
}

/// Current form input, keyed by field key. Every value is a string, as it
/// is in the input widgets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state for a schema: defaults filled in, everything else empty.
    pub fn from_schema(fields: &[FieldSpec]) -> Self {
        let map = fields
            .iter()
            .map(|f| (f.key.clone(), f.default.clone().unwrap_or_default()))
            .collect();
        Self(map)
    }

    /// The value for `key`, or `""` when unset.
    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_string(), value.to_string());
    }

    /// Builder-style `set`.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }

    /// Overlay another set of values on top of this one.
    pub fn merge(&mut self, other: &FormValues) {
        for (k, v) in &other.0 {
            self.0.insert(k.clone(), v.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn from_json(json: &str) -> Result<Self, crate::error::DocketError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Document information written to the PDF Info dictionary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_value_is_empty() {
        let values = FormValues::new().with("a", "1");
        assert_eq!(values.get("a"), "1");
        assert_eq!(values.get("b"), "");
    }

    #[test]
    fn test_from_schema_applies_defaults() {
        let fields = vec![
            FieldSpec::text("courtName", "Court Name").with_default("Chennai"),
            FieldSpec::date("givenDate", "Given Date"),
        ];
        let values = FormValues::from_schema(&fields);
        assert_eq!(values.get("courtName"), "Chennai");
        assert_eq!(values.get("givenDate"), "");
        assert_eq!(values.iter().count(), 2);
    }

    #[test]
    fn test_values_json_is_a_flat_object() {
        let values = FormValues::from_json(r#"{"ccNumber": "123", "year": "24"}"#).unwrap();
        assert_eq!(values.get("ccNumber"), "123");
        assert_eq!(
            serde_json::to_string(&values).unwrap(),
            r#"{"ccNumber":"123","year":"24"}"#
        );
    }

    #[test]
    fn test_font_patch() {
        let base = FontState::times(12.0);
        let bold = base.patched(None, Some(FontStyle::Bold), Some(14.0));
        assert_eq!(bold, FontState::new("Times", FontStyle::Bold, 14.0));
    }

    #[test]
    fn test_page_setup_defaults_are_a4_mm() {
        let setup: PageSetup = serde_json::from_str("{}").unwrap();
        assert_eq!(setup, PageSetup::default());
        assert_eq!(setup.right_edge(), 190.0);
        assert_eq!(setup.center_x(), 105.0);
    }
}

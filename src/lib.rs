//! # Docket
//!
//! Fills court forms. Each form is a [`Template`]: a field schema for the
//! input form and a draw script that says where fixed text and underlined
//! blanks go. Generation plays the script against the typed-in values and
//! writes a print-ready PDF.
//!
//! ## Architecture
//!
//! ```text
//! Template (schema + draw script)  +  FormValues
//!       ↓
//!   [template]    validated at load, every blank names a declared field
//!       ↓
//!   [compose]     script → positioned text runs and underlines
//!       ↓         (layout, layout::underline, text, font, date)
//!   [pdf]         serialize pages to PDF bytes
//!       ↓
//!   [export]      RenderedDocument with bytes, preview URI and download
//! ```
//!
//! Generation is synchronous and deterministic: the same template and
//! values always produce the same bytes.

pub mod compose;
pub mod date;
pub mod error;
pub mod export;
pub mod font;
pub mod layout;
pub mod model;
pub mod pdf;
pub mod session;
pub mod template;
pub mod text;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::DocketError;
pub use export::{PreviewHandle, RenderedDocument};
pub use model::FormValues;
pub use session::FormSession;
pub use template::{Segment, Template};

use compose::ClauseComposer;
use export::DocumentExporter;
use font::FontContext;
use layout::{Canvas, Cursor};
use model::Metadata;

/// Compose a template against values without serializing.
///
/// Each call starts from a fresh cursor at the template's first baseline.
pub fn layout(template: &Template, values: &FormValues, fonts: &FontContext) -> Canvas {
    let mut canvas = Canvas::new(&template.page);
    let mut cursor = Cursor::new(&template.page);
    ClauseComposer::new(fonts, &template.font).compose(
        &template.script,
        values,
        &mut canvas,
        &mut cursor,
    );
    canvas
}

/// Render a template to a finished document.
///
/// This is the primary entry point.
pub fn generate(template: &Template, values: &FormValues) -> Result<RenderedDocument, DocketError> {
    generate_with(template, values, &FontContext::new())
}

pub(crate) fn generate_with(
    template: &Template,
    values: &FormValues,
    fonts: &FontContext,
) -> Result<RenderedDocument, DocketError> {
    let canvas = layout(template, values, fonts);
    let metadata = Metadata {
        title: Some(template.title.clone()),
        subject: Some(template.description.clone()).filter(|s| !s.is_empty()),
        ..Metadata::default()
    };
    DocumentExporter::new(metadata).finalize(&canvas, &template.filename, fonts)
}

/// Render a built-in template from a JSON object of field values.
pub fn generate_json(
    template_id: &str,
    values_json: &str,
) -> Result<RenderedDocument, DocketError> {
    let template = template::by_id(template_id)?;
    let mut values = template.default_values();
    values.merge(&FormValues::from_json(values_json)?);
    generate(&template, &values)
}

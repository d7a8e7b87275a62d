use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::model::FieldSpec;
use crate::template;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogEntry {
    id: String,
    title: String,
    description: String,
    filename: String,
    fields: Vec<FieldSpec>,
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// PDF bytes for a built-in template filled with a JSON object of values.
#[wasm_bindgen(js_name = generatePdf)]
pub fn generate_pdf(template_id: &str, values_json: &str) -> Result<Vec<u8>, JsValue> {
    crate::generate_json(template_id, values_json)
        .map(|doc| doc.into_bytes())
        .map_err(to_js)
}

/// Same as [`generate_pdf`], as a `data:application/pdf` URI for an iframe.
#[wasm_bindgen(js_name = previewUri)]
pub fn preview_uri(template_id: &str, values_json: &str) -> Result<String, JsValue> {
    crate::generate_json(template_id, values_json)
        .map(|doc| doc.preview_handle().into_string())
        .map_err(to_js)
}

/// Every built-in template with its field schema, for building the forms.
#[wasm_bindgen(js_name = templateCatalog)]
pub fn template_catalog() -> Result<JsValue, JsValue> {
    let entries: Vec<CatalogEntry> = template::builtin()
        .map_err(to_js)?
        .into_iter()
        .map(|t| CatalogEntry {
            id: t.id,
            title: t.title,
            description: t.description,
            filename: t.filename,
            fields: t.fields,
        })
        .collect();
    serde_wasm_bindgen::to_value(&entries).map_err(to_js)
}

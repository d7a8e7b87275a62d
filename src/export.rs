//! # Document Export
//!
//! Turns a composed canvas into the finished artifact: PDF bytes with the
//! template's file name, an inline preview handle, and a way to save it.

use std::fs;
use std::path::{Path, PathBuf};

use base64::Engine;

use crate::error::DocketError;
use crate::font::FontContext;
use crate::layout::Canvas;
use crate::model::Metadata;
use crate::pdf::PdfWriter;

/// Something a browser can embed directly: a `data:` URI carrying the PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewHandle(String);

impl PreviewHandle {
    fn for_pdf(bytes: &[u8]) -> Self {
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        Self(format!("data:application/pdf;base64,{}", encoded))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for PreviewHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A finished document.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    bytes: Vec<u8>,
    filename: String,
    pages: usize,
}

impl RenderedDocument {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Name the document is saved under.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn page_count(&self) -> usize {
        self.pages
    }

    pub fn preview_handle(&self) -> PreviewHandle {
        PreviewHandle::for_pdf(&self.bytes)
    }

    /// Save into `dir` under the document's file name.
    pub fn download(&self, dir: &Path) -> Result<PathBuf, DocketError> {
        let path = dir.join(&self.filename);
        self.save_as(&path)?;
        Ok(path)
    }

    /// Save to an explicit path.
    pub fn save_as(&self, path: &Path) -> Result<(), DocketError> {
        fs::write(path, &self.bytes)?;
        tracing::info!(path = %path.display(), bytes = self.bytes.len(), "saved document");
        Ok(())
    }
}

pub struct DocumentExporter {
    writer: PdfWriter,
    metadata: Metadata,
}

impl DocumentExporter {
    pub fn new(metadata: Metadata) -> Self {
        Self {
            writer: PdfWriter::new(),
            metadata,
        }
    }

    /// Serialize a composed canvas.
    ///
    /// Fails with [`DocketError::NotRendered`] if no composition pass has
    /// written into `canvas`.
    pub fn finalize(
        &self,
        canvas: &Canvas,
        filename: &str,
        fonts: &FontContext,
    ) -> Result<RenderedDocument, DocketError> {
        if !canvas.is_composed() {
            return Err(DocketError::NotRendered);
        }

        let bytes = self.writer.write(canvas.pages(), &self.metadata, fonts);
        tracing::info!(
            filename,
            pages = canvas.page_count(),
            bytes = bytes.len(),
            "generated document"
        );

        Ok(RenderedDocument {
            bytes,
            filename: filename.to_string(),
            pages: canvas.page_count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FontState, PageSetup};

    fn composed() -> Canvas {
        let mut canvas = Canvas::new(&PageSetup::default());
        canvas.draw_text(0, 20.0, 20.0, "Versus", &FontState::default(), 14.0);
        canvas.mark_composed();
        canvas
    }

    #[test]
    fn test_export_before_compose_is_rejected() {
        let canvas = Canvas::new(&PageSetup::default());
        let exporter = DocumentExporter::new(Metadata::default());
        let result = exporter.finalize(&canvas, "x.pdf", &FontContext::new());
        assert!(matches!(result, Err(DocketError::NotRendered)));
    }

    #[test]
    fn test_preview_is_pdf_data_uri() {
        let doc = DocumentExporter::new(Metadata::default())
            .finalize(&composed(), "form.pdf", &FontContext::new())
            .unwrap();
        let handle = doc.preview_handle();
        let b64 = handle
            .as_str()
            .strip_prefix("data:application/pdf;base64,")
            .unwrap();
        let decoded = base64::engine::general_purpose::STANDARD.decode(b64).unwrap();
        assert_eq!(decoded, doc.bytes());
        assert_eq!(doc.page_count(), 1);
    }

    #[test]
    fn test_download_uses_template_filename() {
        let doc = DocumentExporter::new(Metadata::default())
            .finalize(&composed(), "surrender_petition.pdf", &FontContext::new())
            .unwrap();
        let dir = std::env::temp_dir().join(format!("docket-export-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let path = doc.download(&dir).unwrap();

        assert_eq!(path.file_name().unwrap(), "surrender_petition.pdf");
        assert_eq!(fs::read(&path).unwrap(), doc.bytes());
        fs::remove_dir_all(&dir).unwrap();
    }
}

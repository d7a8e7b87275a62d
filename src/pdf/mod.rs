//! # PDF Serializer
//!
//! Takes the composed canvas pages and writes a PDF 1.7 file.
//!
//! The documents are text and strokes in the standard Type1 fonts, so the
//! writer is small: one content stream per page, one font dictionary per
//! face actually used, and an Info dictionary. Nothing time-dependent is
//! written, so identical input produces identical bytes.
//!
//! ## PDF Structure (simplified)
//!
//! ```text
//! %PDF-1.7            <- header
//! 1 0 obj ... endobj  <- catalog, page tree, fonts, pages, content streams
//! ...
//! xref                <- cross-reference table (byte offsets of each object)
//! trailer             <- points to the root object
//! %%EOF
//! ```
//!
//! Layout coordinates are millimetres from the top-left corner; PDF user
//! space is points from the bottom-left. Conversion happens here and only
//! here.

use std::collections::BTreeSet;
use std::fmt::Write as FmtWrite; // for write! on String
use std::io::Write as IoWrite; // for write! on Vec<u8>

use crate::font::metrics::winansi_code;
use crate::font::{FontContext, StandardFont};
use crate::layout::{DrawCommand, LayoutPage};
use crate::model::{Metadata, MM_PER_PT};
use miniz_oxide::deflate::compress_to_vec_zlib;

pub struct PdfWriter;

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Tracks allocated PDF objects during writing.
struct PdfBuilder {
    objects: Vec<PdfObject>,
    /// Registered faces in resource order: `/F{i}` is `font_objects[i]`.
    font_objects: Vec<(StandardFont, usize)>,
}

struct PdfObject {
    data: Vec<u8>,
}

/// Layout units to PDF points.
fn pt(mm: f64) -> f64 {
    mm / MM_PER_PT
}

impl PdfWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write composed pages to a PDF byte vector.
    pub fn write(&self, pages: &[LayoutPage], metadata: &Metadata, fonts: &FontContext) -> Vec<u8> {
        let mut builder = PdfBuilder {
            objects: Vec::new(),
            font_objects: Vec::new(),
        };

        // 0 = placeholder (PDF objects are 1-indexed)
        // 1 = Catalog
        // 2 = Pages (page tree root)
        // 3+ = fonts, then content stream and page object pairs
        for _ in 0..3 {
            builder.objects.push(PdfObject { data: vec![] });
        }

        self.register_fonts(&mut builder, pages, fonts);
        let font_resources = self.build_font_resource_dict(&builder.font_objects);

        let mut page_obj_ids: Vec<usize> = Vec::new();
        for page in pages {
            let content = self.build_content_stream(page, &builder.font_objects, fonts);
            let compressed = compress_to_vec_zlib(content.as_bytes(), 6);

            let content_obj_id = builder.objects.len();
            let mut content_data: Vec<u8> = Vec::new();
            let _ = write!(
                content_data,
                "<< /Length {} /Filter /FlateDecode >>\nstream\n",
                compressed.len()
            );
            content_data.extend_from_slice(&compressed);
            content_data.extend_from_slice(b"\nendstream");
            builder.objects.push(PdfObject { data: content_data });

            let page_obj_id = builder.objects.len();
            let page_dict = format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
                 /Contents {} 0 R /Resources << /Font << {} >> >> >>",
                pt(page.width),
                pt(page.height),
                content_obj_id,
                font_resources
            );
            builder.objects.push(PdfObject {
                data: page_dict.into_bytes(),
            });
            page_obj_ids.push(page_obj_id);
        }

        builder.objects[1].data = b"<< /Type /Catalog /Pages 2 0 R >>".to_vec();

        let kids: String = page_obj_ids
            .iter()
            .map(|id| format!("{} 0 R", id))
            .collect::<Vec<_>>()
            .join(" ");
        builder.objects[2].data = format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids,
            page_obj_ids.len()
        )
        .into_bytes();

        let info_obj_id = builder.objects.len();
        builder.objects.push(PdfObject {
            data: self.build_info_dict(metadata).into_bytes(),
        });

        self.serialize(&builder, info_obj_id)
    }

    fn build_info_dict(&self, metadata: &Metadata) -> String {
        let mut info = String::from("<< ");
        if let Some(ref title) = metadata.title {
            let _ = write!(info, "/Title ({}) ", Self::encode_text(title));
        }
        if let Some(ref author) = metadata.author {
            let _ = write!(info, "/Author ({}) ", Self::encode_text(author));
        }
        if let Some(ref subject) = metadata.subject {
            let _ = write!(info, "/Subject ({}) ", Self::encode_text(subject));
        }
        let creator = metadata.creator.as_deref().unwrap_or("Docket");
        let _ = write!(
            info,
            "/Creator ({}) /Producer (Docket {}) >>",
            Self::encode_text(creator),
            env!("CARGO_PKG_VERSION")
        );
        info
    }

    /// Build the PDF content stream for a single page.
    fn build_content_stream(
        &self,
        page: &LayoutPage,
        font_objects: &[(StandardFont, usize)],
        fonts: &FontContext,
    ) -> String {
        let mut stream = String::new();
        let page_height = page.height;

        for command in &page.commands {
            match command {
                DrawCommand::Text { x, y, text, font, .. } => {
                    let face = fonts.resolve(font);
                    let idx = Self::font_index(face, font_objects);
                    let _ = write!(
                        stream,
                        "BT\n/F{} {:.1} Tf\n{:.2} {:.2} Td\n({}) Tj\nET\n",
                        idx,
                        font.size,
                        pt(*x),
                        pt(page_height - y),
                        Self::encode_text(text)
                    );
                }
                DrawCommand::Line { x1, y1, x2, y2, width } => {
                    let _ = write!(
                        stream,
                        "q\n{:.2} w\n{:.2} {:.2} m\n{:.2} {:.2} l\nS\nQ\n",
                        pt(*width),
                        pt(*x1),
                        pt(page_height - y1),
                        pt(*x2),
                        pt(page_height - y2)
                    );
                }
            }
        }

        stream
    }

    /// Register each face drawn on any page, in a fixed order.
    fn register_fonts(&self, builder: &mut PdfBuilder, pages: &[LayoutPage], fonts: &FontContext) {
        let mut faces: BTreeSet<StandardFont> = pages
            .iter()
            .flat_map(|p| p.commands.iter())
            .filter_map(|c| match c {
                DrawCommand::Text { font, .. } => Some(fonts.resolve(font)),
                DrawCommand::Line { .. } => None,
            })
            .collect();

        // Always have at least Helvetica
        if faces.is_empty() {
            faces.insert(StandardFont::Helvetica);
        }

        for face in faces {
            let obj_id = builder.objects.len();
            let font_dict = format!(
                "<< /Type /Font /Subtype /Type1 /BaseFont /{} \
                 /Encoding /WinAnsiEncoding >>",
                face.pdf_name()
            );
            builder.objects.push(PdfObject {
                data: font_dict.into_bytes(),
            });
            builder.font_objects.push((face, obj_id));
        }
    }

    fn build_font_resource_dict(&self, font_objects: &[(StandardFont, usize)]) -> String {
        font_objects
            .iter()
            .enumerate()
            .map(|(i, (_, obj_id))| format!("/F{} {} 0 R", i, obj_id))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Resource index (/F0, /F1, ...) of a registered face.
    fn font_index(face: StandardFont, font_objects: &[(StandardFont, usize)]) -> usize {
        font_objects
            .iter()
            .position(|(f, _)| *f == face)
            .unwrap_or(0)
    }

    /// Encode text as the body of a PDF literal string in WinAnsiEncoding.
    ///
    /// Characters with no WinAnsi code become `?`.
    fn encode_text(s: &str) -> String {
        let mut out = String::new();
        for ch in s.chars() {
            let b = winansi_code(ch).unwrap_or(b'?');
            match b {
                b'\\' => out.push_str("\\\\"),
                b'(' => out.push_str("\\("),
                b')' => out.push_str("\\)"),
                0x20..=0x7E => out.push(b as char),
                _ => {
                    let _ = write!(out, "\\{:03o}", b);
                }
            }
        }
        out
    }

    /// Serialize all objects into the final PDF byte stream.
    fn serialize(&self, builder: &PdfBuilder, info_obj_id: usize) -> Vec<u8> {
        let mut output: Vec<u8> = Vec::new();
        let mut offsets: Vec<usize> = vec![0; builder.objects.len()];

        output.extend_from_slice(b"%PDF-1.7\n");
        output.extend_from_slice(b"%\xe2\xe3\xcf\xd3\n");

        for (i, obj) in builder.objects.iter().enumerate().skip(1) {
            offsets[i] = output.len();
            let header = format!("{} 0 obj\n", i);
            output.extend_from_slice(header.as_bytes());
            output.extend_from_slice(&obj.data);
            output.extend_from_slice(b"\nendobj\n\n");
        }

        let xref_offset = output.len();
        let _ = write!(output, "xref\n0 {}\n", builder.objects.len());
        let _ = write!(output, "0000000000 65535 f \n");
        for offset in offsets.iter().skip(1) {
            let _ = write!(output, "{:010} 00000 n \n", offset);
        }

        let _ = write!(
            output,
            "trailer\n<< /Size {} /Root 1 0 R /Info {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            builder.objects.len(),
            info_obj_id,
            xref_offset
        );

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FontState, FontStyle};
    use miniz_oxide::inflate::decompress_to_vec_zlib;

    fn a4(commands: Vec<DrawCommand>) -> Vec<LayoutPage> {
        vec![LayoutPage {
            width: 210.0,
            height: 297.0,
            commands,
        }]
    }

    fn text(s: &str, font: FontState) -> DrawCommand {
        DrawCommand::Text {
            x: 20.0,
            y: 20.0,
            text: s.to_string(),
            font,
            width: 10.0,
        }
    }

    /// Inflate every content stream in a PDF and concatenate them.
    fn content_streams(pdf: &[u8]) -> String {
        let mut out = String::new();
        let mut rest = pdf;
        while let Some(start) = find(rest, b"stream\n") {
            let body = &rest[start + 7..];
            let Some(end) = find(body, b"\nendstream") else { break };
            if let Ok(bytes) = decompress_to_vec_zlib(&body[..end]) {
                out.push_str(&String::from_utf8_lossy(&bytes));
            }
            rest = &body[end + 10..];
        }
        out
    }

    fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        haystack.windows(needle.len()).position(|w| w == needle)
    }

    #[test]
    fn test_encode_text_escapes() {
        assert_eq!(PdfWriter::encode_text("Hello (World)"), "Hello \\(World\\)");
        assert_eq!(PdfWriter::encode_text("back\\slash"), "back\\\\slash");
        assert_eq!(PdfWriter::encode_text("Hon\u{2019}ble"), "Hon\\222ble");
        assert_eq!(PdfWriter::encode_text("\u{0B85}"), "?");
    }

    #[test]
    fn test_empty_document_produces_valid_pdf() {
        let bytes = PdfWriter::new().write(&a4(vec![]), &Metadata::default(), &FontContext::new());

        assert!(bytes.starts_with(b"%PDF-1.7"));
        assert!(bytes.windows(5).any(|w| w == b"%%EOF"));
        assert!(bytes.windows(4).any(|w| w == b"xref"));
        assert!(bytes.windows(7).any(|w| w == b"trailer"));
    }

    #[test]
    fn test_a4_media_box_in_points() {
        let bytes = PdfWriter::new().write(&a4(vec![]), &Metadata::default(), &FontContext::new());
        let pdf = String::from_utf8_lossy(&bytes);
        assert!(pdf.contains("/MediaBox [0 0 595.28 841.89]"));
    }

    #[test]
    fn test_metadata_in_pdf() {
        let metadata = Metadata {
            title: Some("Bail Application Form".to_string()),
            author: Some("Counsel".to_string()),
            subject: None,
            creator: None,
        };
        let bytes = PdfWriter::new().write(&a4(vec![]), &metadata, &FontContext::new());
        let pdf = String::from_utf8_lossy(&bytes);

        assert!(pdf.contains("/Title (Bail Application Form)"));
        assert!(pdf.contains("/Author (Counsel)"));
        assert!(!pdf.contains("/CreationDate"));
    }

    #[test]
    fn test_bold_font_registered_separately() {
        let pages = a4(vec![
            text("A", FontState::helvetica(12.0)),
            text("A", FontState::new("Helvetica", FontStyle::Bold, 12.0)),
        ]);
        let bytes = PdfWriter::new().write(&pages, &Metadata::default(), &FontContext::new());
        let pdf = String::from_utf8_lossy(&bytes);

        assert!(pdf.contains("/BaseFont /Helvetica "));
        assert!(pdf.contains("/BaseFont /Helvetica-Bold "));
        let stream = content_streams(&bytes);
        assert!(stream.contains("/F0 12.0 Tf"));
        assert!(stream.contains("/F1 12.0 Tf"));
    }

    #[test]
    fn test_coordinates_flip_to_points() {
        let pages = a4(vec![
            text("C.C. No.", FontState::times(12.0)),
            DrawCommand::Line {
                x1: 20.0,
                y1: 21.0,
                x2: 45.4,
                y2: 21.0,
                width: 0.4,
            },
        ]);
        let bytes = PdfWriter::new().write(&pages, &Metadata::default(), &FontContext::new());
        let stream = content_streams(&bytes);

        assert!(stream.contains("56.69 785.20 Td\n(C.C. No.) Tj"), "{}", stream);
        assert!(stream.contains("1.13 w\n56.69 782.36 m\n128.69 782.36 l\nS"), "{}", stream);
    }

    #[test]
    fn test_output_is_deterministic() {
        let pages = a4(vec![text("Versus", FontState::times(12.0))]);
        let fonts = FontContext::new();
        let meta = Metadata {
            title: Some("t".to_string()),
            ..Metadata::default()
        };
        let writer = PdfWriter::new();
        assert_eq!(writer.write(&pages, &meta, &fonts), writer.write(&pages, &meta, &fonts));
    }
}

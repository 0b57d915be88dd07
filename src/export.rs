//! PDF export
//!
//! Renders finished content into a paginated A4 document: an uppercased
//! title, one body paragraph per newline-delimited segment, and (when
//! sources exist) a horizontal rule followed by a "VERIFIED SOURCES"
//! section with one URL per line. Layout plumbing only; nothing here
//! touches session state.

use crate::error::PipelineError;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rgb,
};
use std::io::BufWriter;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
// ~50pt margins, matching the document template the UI advertises
const MARGIN_MM: f32 = 17.6;

const TITLE_SIZE: f32 = 18.0;
const HEADING_SIZE: f32 = 13.0;
const BODY_SIZE: f32 = 11.0;

const PT_TO_MM: f32 = 0.352_778;
// Average glyph width for Helvetica, as a fraction of the font size
const AVG_GLYPH_WIDTH: f32 = 0.5;

/// Render content into a PDF document
///
/// `text` is split into paragraphs on newlines; blank segments are skipped.
/// `urls` are appended as a sources section when non-empty.
pub fn render_document(
    text: &str,
    title: &str,
    urls: &[String],
) -> Result<Vec<u8>, PipelineError> {
    let title = title.to_uppercase();
    let (doc, page, layer) = PdfDocument::new(
        &title,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let body_font = builtin_font(&doc, BuiltinFont::Helvetica)?;
    let bold_font = builtin_font(&doc, BuiltinFont::HelveticaBold)?;

    let first_layer = doc.get_page(page).get_layer(layer);
    let mut writer = DocumentWriter {
        doc,
        layer: first_layer,
        y: PAGE_HEIGHT_MM - MARGIN_MM,
    };

    writer.write_wrapped(&title, TITLE_SIZE, &bold_font);
    writer.space(4.2);

    for para in text.split('\n') {
        let para = para.trim();
        if para.is_empty() {
            continue;
        }
        writer.write_wrapped(para, BODY_SIZE, &body_font);
        writer.space(2.1);
    }

    if !urls.is_empty() {
        writer.space(7.0);
        writer.rule();
        writer.space(4.2);
        writer.write_wrapped("VERIFIED SOURCES:", HEADING_SIZE, &bold_font);
        writer
            .layer
            .set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 1.0, None)));
        for url in urls {
            writer.write_wrapped(url, BODY_SIZE, &body_font);
        }
    }

    writer.finish()
}

fn builtin_font(
    doc: &PdfDocumentReference,
    font: BuiltinFont,
) -> Result<IndirectFontRef, PipelineError> {
    doc.add_builtin_font(font)
        .map_err(|e| PipelineError::Export(format!("failed to load builtin font: {}", e)))
}

/// Cursor over the document: tracks the current layer and baseline,
/// inserting pages as content runs past the bottom margin.
struct DocumentWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl DocumentWriter {
    fn line_height(size: f32) -> f32 {
        size * 1.3 * PT_TO_MM
    }

    fn ensure_room(&mut self, needed: f32) {
        if self.y - needed >= MARGIN_MM {
            return;
        }
        let (page, layer) =
            self.doc
                .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT_MM - MARGIN_MM;
    }

    fn space(&mut self, mm: f32) {
        self.y -= mm;
    }

    fn write_wrapped(&mut self, text: &str, size: f32, font: &IndirectFontRef) {
        let usable = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
        let max_chars = (usable / (AVG_GLYPH_WIDTH * size * PT_TO_MM)).max(1.0) as usize;
        for line in wrap_text(text, max_chars) {
            let height = Self::line_height(size);
            self.ensure_room(height);
            self.y -= height;
            self.layer
                .use_text(line, size, Mm(MARGIN_MM), Mm(self.y), font);
        }
    }

    /// Full-width grey horizontal rule at the current baseline
    fn rule(&mut self) {
        self.ensure_room(2.0);
        self.layer
            .set_outline_color(Color::Rgb(Rgb::new(0.5, 0.5, 0.5, None)));
        self.layer.set_outline_thickness(1.0);
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(MARGIN_MM), Mm(self.y)), false),
                (
                    Point::new(Mm(PAGE_WIDTH_MM - MARGIN_MM), Mm(self.y)),
                    false,
                ),
            ],
            is_closed: false,
        });
    }

    fn finish(self) -> Result<Vec<u8>, PipelineError> {
        let mut buffer = Vec::new();
        self.doc
            .save(&mut BufWriter::new(&mut buffer))
            .map_err(|e| PipelineError::Export(e.to_string()))?;
        Ok(buffer)
    }
}

/// Greedy word wrap; words longer than the line are hard-split so long URLs
/// cannot overflow the page
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if word.len() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(max_chars) {
                lines.push(chunk.iter().collect());
            }
            continue;
        }
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

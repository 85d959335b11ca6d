//! Text-to-PDF exporter.
//!
//! Renders itinerary text into a paginated A4 document: one logical
//! line per fixed-height row, left-aligned, no word-wrap. The whole
//! document is produced in memory; nothing is written to disk.

use crate::{PlannerError, Result};
use printpdf::{BuiltinFont, Mm, PdfDocument};

/// File name offered to the browser for the exported document.
pub const EXPORT_FILE_NAME: &str = "trip_itinerary.pdf";

/// MIME type of the exported document.
pub const EXPORT_CONTENT_TYPE: &str = "application/pdf";

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_LEFT_MM: f32 = 10.0;
const MARGIN_TOP_MM: f32 = 10.0;
const MARGIN_BOTTOM_MM: f32 = 10.0;
const ROW_HEIGHT_MM: f32 = 5.0;
const FONT_SIZE_PT: f32 = 12.0;

/// Number of text rows that fit on one page.
pub fn rows_per_page() -> usize {
    ((PAGE_HEIGHT_MM - MARGIN_TOP_MM - MARGIN_BOTTOM_MM) / ROW_HEIGHT_MM) as usize
}

/// Render `text` into PDF bytes.
///
/// The input is split on `\n`; each logical line becomes exactly one
/// row. A new page is started before a row would cross the bottom
/// margin, so content of any length produces a valid multi-page
/// document with every line on exactly one page, in order.
///
/// Windows (`\r\n`) and bare-`\r` line endings are treated as line
/// breaks and tabs are expanded to spaces before layout, so ordinary
/// whitespace variation in upstream text never fails the export.
///
/// Fails with [`PlannerError::Encoding`] if the input contains a
/// character outside the printable Latin-1 subset the builtin PDF
/// font can represent; the error names the character and its
/// line/column position.
pub fn render_document(text: &str) -> Result<Vec<u8>> {
    let text = normalize_whitespace(text);
    let text = text.as_str();
    check_encodable(text)?;

    let (doc, first_page, first_layer) = PdfDocument::new(
        "Trip Itinerary",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Courier)
        .map_err(|e| PlannerError::general(format!("Failed to load PDF font: {e}")))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    // Baseline of the first row sits one row below the top margin.
    let mut y = PAGE_HEIGHT_MM - MARGIN_TOP_MM - ROW_HEIGHT_MM;

    for line in text.split('\n') {
        if y < MARGIN_BOTTOM_MM {
            let (page, layer_index) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            layer = doc.get_page(page).get_layer(layer_index);
            y = PAGE_HEIGHT_MM - MARGIN_TOP_MM - ROW_HEIGHT_MM;
        }
        layer.use_text(line, FONT_SIZE_PT, Mm(MARGIN_LEFT_MM), Mm(y), &font);
        y -= ROW_HEIGHT_MM;
    }

    doc.save_to_bytes()
        .map_err(|e| PlannerError::general(format!("Failed to serialize PDF: {e}")))
}

/// Fold line-ending variants into `\n` and expand tabs, the only
/// control characters the exporter gives meaning to. Everything else
/// is left for the encoding check.
fn normalize_whitespace(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\t', "    ")
}

/// Reject characters the builtin-font encoding cannot represent.
/// Accepted: printable ASCII plus the Latin-1 range U+00A0..=U+00FF.
/// Everything else would be silently garbled by the single-byte text
/// encoding, so it is reported instead.
fn check_encodable(text: &str) -> Result<()> {
    for (line_index, line) in text.split('\n').enumerate() {
        for (column_index, character) in line.chars().enumerate() {
            let encodable = matches!(character, ' '..='~' | '\u{A0}'..='\u{FF}');
            if !encodable {
                return Err(PlannerError::Encoding {
                    character,
                    line: line_index + 1,
                    column: column_index + 1,
                });
            }
        }
    }
    Ok(())
}

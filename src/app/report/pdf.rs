//! PDF report rendering.
//!
//! Writes the aggregated scan rows as a landscape A4 table, one header row
//! per page, body rows in input order, followed by a warnings section when
//! the sweep recorded region failures.
//!
//! The writer emits PDF 1.4 objects directly: built-in Type1 fonts, literal
//! text runs, and stroked grid lines need nothing beyond the object/xref
//! framing, and producing the bytes ourselves keeps the output fully
//! deterministic. No timestamps, document IDs, or other varying metadata are
//! embedded: rendering the same rows twice yields identical bytes.

use crate::app::errors::{RemoteQueryError, RenderError};
use crate::app::scanner::sweep::ScanRow;
use std::fmt::Write as _;

pub const REPORT_TITLE: &str = "AWS Services Utilization Report";

// Landscape A4 in points.
const PAGE_WIDTH: f64 = 841.89;
const PAGE_HEIGHT: f64 = 595.28;
const MARGIN: f64 = 40.0;
const ROW_HEIGHT: f64 = 22.0;
const NOTE_LINE_HEIGHT: f64 = 14.0;

// Column layout: [Region | Service | Resource Count].
const TABLE_LEFT: f64 = MARGIN;
const TABLE_RIGHT: f64 = PAGE_WIDTH - MARGIN;
const COL_SERVICE_X: f64 = 280.0;
const COL_COUNT_X: f64 = 600.0;
const CELL_PADDING: f64 = 6.0;

/// Render the report as PDF bytes.
///
/// `rows` become the table body in input order; `failures` become the
/// trailing warnings section. Callers should not invoke this with an empty
/// row list (an empty report is delivered as a plain message instead), but
/// doing so still produces a valid document with only the header row.
pub fn render_pdf(rows: &[ScanRow], failures: &[RemoteQueryError]) -> Result<Vec<u8>, RenderError> {
    let mut pages: Vec<String> = Vec::new();
    let mut content = String::new();
    let mut y = PAGE_HEIGHT - MARGIN;

    // Title on the first page only.
    write!(
        content,
        "BT /F2 18 Tf 1 0 0 1 {:.2} {:.2} Tm ({}) Tj ET\n",
        MARGIN,
        y - 16.0,
        escape_text(REPORT_TITLE)
    )?;
    y -= 40.0;

    write_header_row(&mut content, y)?;
    y -= ROW_HEIGHT;

    for row in rows {
        if y - ROW_HEIGHT < MARGIN {
            pages.push(std::mem::take(&mut content));
            y = PAGE_HEIGHT - MARGIN;
            write_header_row(&mut content, y)?;
            y -= ROW_HEIGHT;
        }
        write_body_row(&mut content, y, row)?;
        y -= ROW_HEIGHT;
    }

    if !failures.is_empty() {
        // Keep the heading and at least one note together.
        if y - (ROW_HEIGHT + 2.0 * NOTE_LINE_HEIGHT) < MARGIN {
            pages.push(std::mem::take(&mut content));
            y = PAGE_HEIGHT - MARGIN;
        }
        y -= 12.0;
        write!(
            content,
            "BT /F2 12 Tf 1 0 0 1 {:.2} {:.2} Tm (Scan warnings) Tj ET\n",
            MARGIN,
            y - 12.0
        )?;
        y -= 28.0;

        for failure in failures {
            if y - NOTE_LINE_HEIGHT < MARGIN {
                pages.push(std::mem::take(&mut content));
                y = PAGE_HEIGHT - MARGIN;
            }
            let note = truncate_note(&failure.to_string(), 150);
            write!(
                content,
                "BT /F1 9 Tf 1 0 0 1 {:.2} {:.2} Tm ({}) Tj ET\n",
                MARGIN,
                y - 9.0,
                escape_text(&note)
            )?;
            y -= NOTE_LINE_HEIGHT;
        }
    }

    pages.push(content);
    Ok(assemble_document(&pages))
}

/// Header row: bold labels over a full-width cell rectangle.
fn write_header_row(content: &mut String, y: f64) -> Result<(), RenderError> {
    write_row_grid(content, y)?;
    let baseline = y - 15.0;
    write!(
        content,
        "BT /F2 11 Tf 1 0 0 1 {:.2} {baseline:.2} Tm (Region) Tj ET\n",
        TABLE_LEFT + CELL_PADDING
    )?;
    write!(
        content,
        "BT /F2 11 Tf 1 0 0 1 {:.2} {baseline:.2} Tm (Service) Tj ET\n",
        COL_SERVICE_X + CELL_PADDING
    )?;
    write!(
        content,
        "BT /F2 11 Tf 1 0 0 1 {:.2} {baseline:.2} Tm (Resource Count) Tj ET\n",
        COL_COUNT_X + CELL_PADDING
    )?;
    Ok(())
}

fn write_body_row(content: &mut String, y: f64, row: &ScanRow) -> Result<(), RenderError> {
    write_row_grid(content, y)?;
    let baseline = y - 15.0;
    write!(
        content,
        "BT /F1 10 Tf 1 0 0 1 {:.2} {baseline:.2} Tm ({}) Tj ET\n",
        TABLE_LEFT + CELL_PADDING,
        escape_text(&row.region)
    )?;
    write!(
        content,
        "BT /F1 10 Tf 1 0 0 1 {:.2} {baseline:.2} Tm ({}) Tj ET\n",
        COL_SERVICE_X + CELL_PADDING,
        escape_text(&row.service)
    )?;
    write!(
        content,
        "BT /F1 10 Tf 1 0 0 1 {:.2} {baseline:.2} Tm ({}) Tj ET\n",
        COL_COUNT_X + CELL_PADDING,
        row.count
    )?;
    Ok(())
}

/// Cell outline plus the two column separators for one row.
fn write_row_grid(content: &mut String, y: f64) -> Result<(), RenderError> {
    let bottom = y - ROW_HEIGHT;
    write!(
        content,
        "0.5 w {TABLE_LEFT:.2} {bottom:.2} {:.2} {ROW_HEIGHT:.2} re S\n",
        TABLE_RIGHT - TABLE_LEFT
    )?;
    write!(
        content,
        "{COL_SERVICE_X:.2} {bottom:.2} m {COL_SERVICE_X:.2} {y:.2} l S\n"
    )?;
    write!(
        content,
        "{COL_COUNT_X:.2} {bottom:.2} m {COL_COUNT_X:.2} {y:.2} l S\n"
    )?;
    Ok(())
}

/// Escape a string for a PDF literal text run.
///
/// Backslash and parentheses are the delimiters of literal strings; anything
/// outside printable ASCII is replaced since the built-in fonts are only
/// addressed with the standard encoding here.
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '(' => escaped.push_str("\\("),
            ')' => escaped.push_str("\\)"),
            ' '..='~' => escaped.push(c),
            _ => escaped.push('?'),
        }
    }
    escaped
}

fn truncate_note(note: &str, max_len: usize) -> String {
    if note.len() <= max_len {
        return note.to_string();
    }
    let cut = note
        .char_indices()
        .take_while(|(index, _)| *index <= max_len - 3)
        .last()
        .map(|(index, _)| index)
        .unwrap_or(0);
    format!("{}...", &note[..cut])
}

/// Frame the page content streams into a complete document: catalog, page
/// tree, the two built-in fonts, one page + content stream pair per page,
/// then the xref table and trailer.
fn assemble_document(pages: &[String]) -> Vec<u8> {
    let mut objects: Vec<String> = Vec::new();

    let kids = (0..pages.len())
        .map(|index| format!("{} 0 R", 5 + 2 * index))
        .collect::<Vec<_>>()
        .join(" ");

    objects.push("<< /Type /Catalog /Pages 2 0 R >>".to_string());
    objects.push(format!(
        "<< /Type /Pages /Kids [{kids}] /Count {} >>",
        pages.len()
    ));
    objects.push("<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string());
    objects.push("<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold >>".to_string());

    for (index, content) in pages.iter().enumerate() {
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH:.2} {PAGE_HEIGHT:.2}] \
             /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> /Contents {} 0 R >>",
            6 + 2 * index
        ));
        objects.push(format!(
            "<< /Length {} >>\nstream\n{content}\nendstream",
            content.len()
        ));
    }

    let mut out: Vec<u8> = Vec::new();
    out.extend_from_slice(b"%PDF-1.4\n");

    let mut offsets = Vec::with_capacity(objects.len());
    for (index, object) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n", index + 1).as_bytes());
        out.extend_from_slice(object.as_bytes());
        out.extend_from_slice(b"\nendobj\n");
    }

    let xref_offset = out.len();
    out.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    out.extend_from_slice(b"0000000000 65535 f \n");
    for offset in offsets {
        out.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
    }
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
            objects.len() + 1
        )
        .as_bytes(),
    );
    out
}

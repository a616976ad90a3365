//! Minimal PDF 1.4 writer for the comparison report.
//!
//! Text is set in the standard Helvetica font, so nothing has to be embedded,
//! and it is converted to ASCII beforehand.

use std::fmt::Write;

use itertools::Itertools;

use crate::{
    core::comparison::Comparison,
    export::{ascii::to_ascii, plain},
    prelude::*,
};

pub const FILE_NAME: &str = "tarifvergleich.pdf";

const TITLE: &str = "Stromtarif-Vergleich";

/// Points per millimetre.
const MM: f64 = 72.0 / 25.4;

/// A4 portrait.
const PAGE_WIDTH: f64 = 210.0 * MM;
const PAGE_HEIGHT: f64 = 297.0 * MM;

const MARGIN: f64 = 10.0 * MM;
const BOTTOM_MARGIN: f64 = 20.0 * MM;
const CELL_PADDING: f64 = 1.0 * MM;
const LINE_HEIGHT: f64 = 10.0 * MM;
const FONT_SIZE: f64 = 12.0;

/// Helvetica glyph widths for `' '..='~'`, in thousandths of the font size.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Render the comparison as a paginated document listing every result.
#[instrument(skip_all, fields(n_results = comparison.results.len()))]
pub fn to_pdf(comparison: &Comparison) -> Result<Vec<u8>> {
    let pages = layout(comparison);
    debug!(n_pages = pages.len(), "laid out");

    let mut writer = Writer::new();
    let kids = (0..pages.len()).map(|index| format!("{} 0 R", page_id(index))).join(" ");
    let root = writer.object("<< /Type /Catalog /Pages 2 0 R >>")?;
    writer.object(&format!("<< /Type /Pages /Kids [{kids}] /Count {} >>", pages.len()))?;
    writer.object(
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>",
    )?;
    let info = writer.object(&format!(
        "<< /Title ({TITLE}) /Producer ({} {}) >>",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    ))?;

    for (index, lines) in pages.iter().enumerate() {
        let page = writer.object(&format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH:.2} {PAGE_HEIGHT:.2}] \
             /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
            page_id(index) + 1,
        ))?;
        debug_assert_eq!(page, page_id(index));
        writer.stream(&content(lines)?)?;
    }

    writer.finish(root, info)
}

/// Catalog, page tree, font and info come first, then every page is followed by its content.
const fn page_id(index: usize) -> usize {
    5 + 2 * index
}

#[derive(Copy, Clone)]
enum Align {
    Left,
    Center,
}

#[derive(Debug, PartialEq)]
struct Line {
    x: f64,

    /// Distance of the baseline from the top of the page.
    baseline: f64,

    text: String,
}

/// Places lines top to bottom, starting a new page when the bottom margin is reached.
struct Layout {
    pages: Vec<Vec<Line>>,
    current: Vec<Line>,
    y: f64,
}

impl Layout {
    const fn new() -> Self {
        Self { pages: Vec::new(), current: Vec::new(), y: MARGIN }
    }

    fn cell(&mut self, text: &str, align: Align) {
        if self.y + LINE_HEIGHT > PAGE_HEIGHT - BOTTOM_MARGIN {
            self.pages.push(std::mem::take(&mut self.current));
            self.y = MARGIN;
        }
        let text = to_ascii(text);
        let x = match align {
            Align::Left => MARGIN + CELL_PADDING,
            Align::Center => (PAGE_WIDTH - text_width(&text)) / 2.0,
        };
        let baseline = self.y + LINE_HEIGHT / 2.0 + 0.3 * FONT_SIZE;
        self.current.push(Line { x, baseline, text });
        self.y += LINE_HEIGHT;
    }

    fn gap(&mut self, height: f64) {
        self.y += height;
    }

    fn finish(mut self) -> Vec<Vec<Line>> {
        self.pages.push(self.current);
        self.pages
    }
}

fn layout(comparison: &Comparison) -> Vec<Vec<Line>> {
    let mut layout = Layout::new();
    layout.cell(TITLE, Align::Center);
    layout.gap(LINE_HEIGHT);
    for result in &comparison.results {
        layout.cell(&result.name, Align::Left);
        layout.cell(&format!("  Gesamtkosten: {} EUR", plain(result.total_cost)), Align::Left);
        layout.cell(&format!("  Gezahlt: {} EUR", plain(result.amount_paid)), Align::Left);
        layout.cell(&format!("  Differenz: {} EUR", plain(result.difference)), Align::Left);
        layout.cell(
            &format!("  Idealer Abschlag: {} EUR", plain(result.ideal_payment)),
            Align::Left,
        );
        layout.gap(LINE_HEIGHT / 2.0);
    }
    layout.finish()
}

fn text_width(text: &str) -> f64 {
    let thousandths: u32 = text
        .bytes()
        .map(|byte| {
            usize::from(byte)
                .checked_sub(usize::from(b' '))
                .and_then(|index| HELVETICA_WIDTHS.get(index))
                .map_or(0, |width| u32::from(*width))
        })
        .sum();
    f64::from(thousandths) * FONT_SIZE / 1000.0
}

fn content(lines: &[Line]) -> Result<String> {
    let mut content = String::new();
    writeln!(content, "BT")?;
    writeln!(content, "/F1 {FONT_SIZE:.0} Tf")?;
    for line in lines {
        writeln!(
            content,
            "1 0 0 1 {:.2} {:.2} Tm ({}) Tj",
            line.x,
            PAGE_HEIGHT - line.baseline,
            escape(&line.text),
        )?;
    }
    writeln!(content, "ET")?;
    Ok(content)
}

/// Escape the string delimiters of a PDF literal string.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '(' | ')' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Appends numbered objects and keeps their byte offsets for the cross-reference table.
struct Writer {
    buffer: String,
    offsets: Vec<usize>,
}

impl Writer {
    fn new() -> Self {
        Self { buffer: String::from("%PDF-1.4\n"), offsets: Vec::new() }
    }

    fn object(&mut self, body: &str) -> Result<usize> {
        self.offsets.push(self.buffer.len());
        let id = self.offsets.len();
        write!(self.buffer, "{id} 0 obj\n{body}\nendobj\n")?;
        Ok(id)
    }

    fn stream(&mut self, data: &str) -> Result<usize> {
        self.object(&format!("<< /Length {} >>\nstream\n{data}endstream", data.len()))
    }

    fn finish(mut self, root: usize, info: usize) -> Result<Vec<u8>> {
        let xref_offset = self.buffer.len();
        let size = self.offsets.len() + 1;
        write!(self.buffer, "xref\n0 {size}\n0000000000 65535 f \n")?;
        for offset in &self.offsets {
            write!(self.buffer, "{offset:010} 00000 n \n")?;
        }
        write!(self.buffer, "trailer\n<< /Size {size} /Root {root} 0 R /Info {info} 0 R >>\n")?;
        write!(self.buffer, "startxref\n{xref_offset}\n%%EOF\n")?;
        Ok(self.buffer.into_bytes())
    }
}

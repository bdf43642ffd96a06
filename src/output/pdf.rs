//! PDF rendering of resume text.
//!
//! Layout happens in two steps: [`layout`] places every line on a page using
//! Helvetica glyph widths, then [`render_pdf`] draws the placed lines with the
//! PDF base-14 fonts. The base-14 fonts only cover Latin-1, so anything outside
//! it is replaced with `?` before layout.

use crate::error::{Result, ResumeAssistantError};
use printpdf::{BuiltinFont, Mm, PdfDocument};

// A4, millimetres
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const SIDE_MARGIN_MM: f32 = 10.0;
const TOP_MARGIN_MM: f32 = 10.0;
const BREAK_MARGIN_MM: f32 = 15.0;
/// Horizontal padding inside the text cell
const CELL_PADDING_MM: f32 = 1.0;

const TITLE: &str = "Resume";
const TITLE_SIZE_PT: f32 = 16.0;
const TITLE_LINE_MM: f32 = 10.0;
const BODY_SIZE_PT: f32 = 11.0;
const BODY_LINE_MM: f32 = 6.0;
const PARAGRAPH_GAP_MM: f32 = 1.0;

const EMPTY_BODY: &str = "(No content provided)";
const REPLACEMENT: char = '?';

const MM_PER_PT: f32 = 25.4 / 72.0;

/// Helvetica advance widths for 0x20..=0x7E, in 1/1000 em
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' ' .. '/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // digits
    278, 278, 584, 584, 584, 556, 1015, // ':' .. '@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A' .. 'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N' .. 'Z'
    278, 278, 278, 469, 556, 333, // '[' .. '`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a' .. 'm'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n' .. 'z'
    334, 260, 334, 584, // '{' .. '~'
];
const DEFAULT_WIDTH: u16 = 556;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
}

/// A line of text fixed to a page position
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub page: usize,
    /// Distance of the line box top from the top edge
    pub top_mm: f32,
    pub height_mm: f32,
    pub text: String,
    pub style: FontStyle,
    pub font_size_pt: f32,
}

/// Replace characters the base-14 fonts cannot encode
pub fn to_latin1(text: &str) -> String {
    text.chars()
        .map(|c| if (c as u32) <= 0xFF { c } else { REPLACEMENT })
        .collect()
}

fn char_width(c: char) -> u16 {
    match c as u32 {
        code @ 0x20..=0x7E => HELVETICA_WIDTHS[(code - 0x20) as usize],
        _ => DEFAULT_WIDTH,
    }
}

/// Rendered width of `text` in Helvetica at `font_size_pt`
pub fn text_width_mm(text: &str, font_size_pt: f32) -> f32 {
    let units: u32 = text.chars().map(|c| char_width(c) as u32).sum();
    units as f32 / 1000.0 * font_size_pt * MM_PER_PT
}

/// Greedy word wrap. Explicit newlines always break, and a word wider than
/// the line is split between characters.
pub fn wrap_paragraph(paragraph: &str, font_size_pt: f32, max_width_mm: f32) -> Vec<String> {
    let mut lines = Vec::new();

    for raw_line in paragraph.split('\n') {
        let mut current = String::new();

        for word in raw_line.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };
            if text_width_mm(&candidate, font_size_pt) <= max_width_mm {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            for ch in word.chars() {
                current.push(ch);
                if current.chars().count() > 1 && text_width_mm(&current, font_size_pt) > max_width_mm {
                    current.pop();
                    lines.push(std::mem::take(&mut current));
                    current.push(ch);
                }
            }
        }

        lines.push(current);
    }

    lines
}

struct Cursor {
    page: usize,
    top_mm: f32,
}

impl Cursor {
    /// Reserve a line box, moving to a new page if it would cross the break margin
    fn reserve(&mut self, height_mm: f32) -> (usize, f32) {
        if self.top_mm + height_mm > PAGE_HEIGHT_MM - BREAK_MARGIN_MM {
            self.page += 1;
            self.top_mm = TOP_MARGIN_MM;
        }
        let slot = (self.page, self.top_mm);
        self.top_mm += height_mm;
        slot
    }
}

/// Place the title and every body line
pub fn layout(resume_text: &str) -> Vec<PlacedLine> {
    let body = if resume_text.is_empty() {
        EMPTY_BODY.to_string()
    } else {
        to_latin1(&resume_text.replace('\r', ""))
    };
    let max_width = PAGE_WIDTH_MM - 2.0 * SIDE_MARGIN_MM - 2.0 * CELL_PADDING_MM;

    let mut cursor = Cursor {
        page: 0,
        top_mm: TOP_MARGIN_MM,
    };
    let mut placed = Vec::new();

    let (page, top_mm) = cursor.reserve(TITLE_LINE_MM);
    placed.push(PlacedLine {
        page,
        top_mm,
        height_mm: TITLE_LINE_MM,
        text: TITLE.to_string(),
        style: FontStyle::Bold,
        font_size_pt: TITLE_SIZE_PT,
    });

    for paragraph in body.split("\n\n") {
        for line in wrap_paragraph(paragraph, BODY_SIZE_PT, max_width) {
            let (page, top_mm) = cursor.reserve(BODY_LINE_MM);
            placed.push(PlacedLine {
                page,
                top_mm,
                height_mm: BODY_LINE_MM,
                text: line,
                style: FontStyle::Regular,
                font_size_pt: BODY_SIZE_PT,
            });
        }
        cursor.top_mm += PARAGRAPH_GAP_MM;
    }

    placed
}

fn render_error(e: impl std::fmt::Display) -> ResumeAssistantError {
    ResumeAssistantError::ProcessingFailure(format!("PDF rendering failed: {}", e))
}

pub fn render_pdf(resume_text: &str) -> Result<Vec<u8>> {
    let placed = layout(resume_text);

    let (doc, first_page, first_layer) =
        PdfDocument::new(TITLE, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Page 1");
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(render_error)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(render_error)?;

    let mut layers = vec![doc.get_page(first_page).get_layer(first_layer)];
    for line in &placed {
        while layers.len() <= line.page {
            let (page, layer) = doc.add_page(
                Mm(PAGE_WIDTH_MM),
                Mm(PAGE_HEIGHT_MM),
                format!("Page {}", layers.len() + 1),
            );
            layers.push(doc.get_page(page).get_layer(layer));
        }
        if line.text.is_empty() {
            continue;
        }

        let font = match line.style {
            FontStyle::Regular => &regular,
            FontStyle::Bold => &bold,
        };
        // Baseline sits slightly below the middle of the line box
        let baseline_from_top = line.top_mm + line.height_mm / 2.0 + 0.3 * line.font_size_pt * MM_PER_PT;
        layers[line.page].use_text(
            line.text.clone(),
            line.font_size_pt,
            Mm(SIDE_MARGIN_MM + CELL_PADDING_MM),
            Mm(PAGE_HEIGHT_MM - baseline_from_top),
            font,
        );
    }
    drop(layers);

    doc.save_to_bytes().map_err(render_error)
}

//! Receipt placement shared by PDF writers.
//!
//! Turns a [`ReceiptDocument`] into positioned text runs; the writer only
//! has to draw them. Coordinates are millimetres from the bottom-left
//! corner, as PDF expects.

use crate::layout::ReceiptLayout;
use crate::receipt::ReceiptDocument;

/// Text weight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Regular,
    Bold,
}

/// A single line of text on the page
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x_mm: f32,
    pub y_mm: f32,
    pub size_pt: f32,
    pub style: TextStyle,
}

/// Horizontal rule
#[derive(Debug, Clone, PartialEq)]
pub struct RuleLine {
    pub x1_mm: f32,
    pub x2_mm: f32,
    pub y_mm: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReceiptPage {
    pub texts: Vec<TextRun>,
    pub rules: Vec<RuleLine>,
}

impl ReceiptPage {
    fn text(&mut self, text: impl Into<String>, x_mm: f32, y_mm: f32, size_pt: f32, style: TextStyle) {
        self.texts.push(TextRun {
            text: text.into(),
            x_mm,
            y_mm,
            size_pt,
            style,
        });
    }
}

/// Millimetres taken by one text line of `size_pt`
fn line_height_mm(size_pt: f32) -> f32 {
    size_pt * 0.3528 * 1.4
}

/// Lays out header, field grid, distance, note, totals and signatures.
pub fn layout_receipt(doc: &ReceiptDocument, layout: &ReceiptLayout) -> ReceiptPage {
    let mut page = ReceiptPage::default();
    let left = layout.margin_mm;
    let right = layout.page_width_mm - layout.margin_mm;
    let mut y = layout.page_height_mm - layout.margin_mm;

    // header
    y -= line_height_mm(layout.title_size_pt);
    page.text(doc.title, left, y, layout.title_size_pt, TextStyle::Bold);
    y -= line_height_mm(layout.value_size_pt);
    page.text(&doc.header_line, left, y, layout.value_size_pt, TextStyle::Regular);
    y = layout.page_height_mm - layout.margin_mm - layout.header_height_mm;
    page.rules.push(RuleLine { x1_mm: left, x2_mm: right, y_mm: y });
    y -= layout.gap_mm;

    // field grid
    let column_width = layout.column_width_mm();
    for row in doc.fields.chunks(layout.grid_columns.max(1)) {
        for (col, field) in row.iter().enumerate() {
            let x = left + col as f32 * (column_width + layout.gap_mm);
            page.text(
                field.label.to_uppercase(),
                x,
                y - line_height_mm(layout.label_size_pt),
                layout.label_size_pt,
                TextStyle::Bold,
            );
            page.text(
                &field.value,
                x,
                y - line_height_mm(layout.label_size_pt) - line_height_mm(layout.value_size_pt),
                layout.value_size_pt,
                TextStyle::Regular,
            );
        }
        y -= layout.grid_row_height_mm;
    }

    // distance
    y -= layout.gap_mm;
    page.text(
        doc.distance.label.to_uppercase(),
        left,
        y,
        layout.label_size_pt,
        TextStyle::Bold,
    );
    y -= line_height_mm(layout.total_size_pt);
    page.text(&doc.distance.value, left, y, layout.total_size_pt, TextStyle::Bold);

    if let Some(note) = &doc.note {
        y -= layout.gap_mm * 2.0;
        page.text("OBSERVAÇÕES", left, y, layout.label_size_pt, TextStyle::Bold);
        for line in note.lines() {
            y -= line_height_mm(layout.value_size_pt);
            page.text(line, left, y, layout.value_size_pt, TextStyle::Regular);
        }
    }

    // totals
    y -= layout.gap_mm * 2.0;
    page.rules.push(RuleLine { x1_mm: left, x2_mm: right, y_mm: y });
    y -= line_height_mm(layout.value_size_pt);
    page.text(&doc.toll_line, left, y, layout.value_size_pt, TextStyle::Regular);
    y -= line_height_mm(layout.total_size_pt);
    page.text(
        format!("{}: {}", doc.total_label, doc.total_value),
        left,
        y,
        layout.total_size_pt,
        TextStyle::Bold,
    );

    // signatures, anchored to the bottom of the page
    let sig_y = layout.margin_mm + 20.0;
    let slot = layout.content_width_mm() / doc.signatures.len() as f32;
    for (i, caption) in doc.signatures.iter().enumerate() {
        let x1 = left + slot * i as f32 + (slot - layout.signature_width_mm) / 2.0;
        page.rules.push(RuleLine {
            x1_mm: x1,
            x2_mm: x1 + layout.signature_width_mm,
            y_mm: sig_y,
        });
        page.text(
            *caption,
            x1,
            sig_y - line_height_mm(layout.value_size_pt),
            layout.label_size_pt + 2.0,
            TextStyle::Regular,
        );
    }

    page
}

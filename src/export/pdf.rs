//! Receipt PDF writer
//!
//! Draws the runs computed by `pdf_core::layout_receipt`; all placement
//! decisions live in the shared core.

use crate::error::{FlatbedError, Result};
use flatbed_log_common::export::pdf_core::{layout_receipt, TextStyle};
use flatbed_log_common::{ReceiptDocument, ReceiptLayout};
use printpdf::{BuiltinFont, Line, Mm, PdfDocument, Point};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub fn generate_receipt_pdf(receipt: &ReceiptDocument, output_path: &Path) -> Result<()> {
    let layout = ReceiptLayout::a4();
    let page = layout_receipt(receipt, &layout);

    let (doc, page1, layer1) = PdfDocument::new(
        &receipt.document_name,
        Mm(layout.page_width_mm),
        Mm(layout.page_height_mm),
        "Layer 1",
    );
    let current_layer = doc.get_page(page1).get_layer(layer1);

    // TODO: embed a TTF font; the builtin Helvetica has no glyphs outside WinAnsi
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| FlatbedError::PdfGeneration(format!("fonte: {:?}", e)))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| FlatbedError::PdfGeneration(format!("fonte: {:?}", e)))?;

    for run in &page.texts {
        let font = match run.style {
            TextStyle::Regular => &regular,
            TextStyle::Bold => &bold,
        };
        current_layer.use_text(run.text.clone(), run.size_pt, Mm(run.x_mm), Mm(run.y_mm), font);
    }

    current_layer.set_outline_thickness(0.5);
    for rule in &page.rules {
        current_layer.add_line(Line {
            points: vec![
                (Point::new(Mm(rule.x1_mm), Mm(rule.y_mm)), false),
                (Point::new(Mm(rule.x2_mm), Mm(rule.y_mm)), false),
            ],
            is_closed: false,
        });
    }

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(output_path)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| FlatbedError::PdfGeneration(format!("falha ao salvar: {:?}", e)))?;

    log::debug!("receipt #{} written to {}", receipt.id, output_path.display());
    Ok(())
}

/// `recibo-<short id>.pdf`
pub fn default_receipt_file_name(receipt: &ReceiptDocument) -> String {
    format!("recibo-{}.pdf", receipt.id.short())
}

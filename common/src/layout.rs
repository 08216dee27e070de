//! Receipt page layout
//!
//! A4 portrait, all lengths in millimetres. `mm_to_pt` converts for PDF
//! writers that work in points.

pub const MM_TO_PT: f32 = 72.0 / 25.4;

pub fn mm_to_pt(mm: f32) -> f32 {
    mm * MM_TO_PT
}

/// Receipt geometry
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLayout {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub margin_mm: f32,
    /// Title + header line block
    pub header_height_mm: f32,
    /// Height of one field-grid row (label + value)
    pub grid_row_height_mm: f32,
    pub grid_columns: usize,
    pub gap_mm: f32,
    pub title_size_pt: f32,
    pub label_size_pt: f32,
    pub value_size_pt: f32,
    pub total_size_pt: f32,
    pub signature_width_mm: f32,
}

impl ReceiptLayout {
    pub fn a4() -> Self {
        Self {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            margin_mm: 15.0,
            header_height_mm: 28.0,
            grid_row_height_mm: 14.0,
            grid_columns: 2,
            gap_mm: 5.0,
            title_size_pt: 20.0,
            label_size_pt: 8.0,
            value_size_pt: 11.0,
            total_size_pt: 16.0,
            signature_width_mm: 70.0,
        }
    }

    pub fn content_width_mm(&self) -> f32 {
        self.page_width_mm - self.margin_mm * 2.0
    }

    pub fn column_width_mm(&self) -> f32 {
        let columns = self.grid_columns.max(1) as f32;
        (self.content_width_mm() - self.gap_mm * (columns - 1.0)) / columns
    }
}

impl Default for ReceiptLayout {
    fn default() -> Self {
        Self::a4()
    }
}

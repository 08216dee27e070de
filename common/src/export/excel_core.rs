//! Job list spreadsheet (shared core)
//!
//! One sheet, one row per job in display order, totals at the bottom.

use crate::format::format_date;
use crate::stats::JobStats;
use crate::types::Job;
use crate::view::sorted_view;
use rust_xlsxwriter::*;

/// Column header and width
const COLUMNS: &[(&str, f64)] = &[
    ("ID", 16.0),
    ("Data", 12.0),
    ("Contratante", 28.0),
    ("Local/Origem", 24.0),
    ("Frota", 10.0),
    ("Motorista", 20.0),
    ("Responsável", 20.0),
    ("Saída", 8.0),
    ("Chegada", 8.0),
    ("KM Saída", 12.0),
    ("KM Chegada", 12.0),
    ("KM Total", 10.0),
    ("Valor Total", 14.0),
    ("Pedágio", 12.0),
    ("Observação", 40.0),
];

const COL_KM_TOTAL: u16 = 11;
const COL_VALUE: u16 = 12;
const COL_TOLL: u16 = 13;

/// Builds the workbook in memory.
pub fn generate_excel_buffer(jobs: &[Job], sheet_name: &str) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(0x4F46E5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin);

    let text_format = Format::new().set_border(FormatBorder::Hair);
    let km_format = Format::new()
        .set_num_format("#,##0.0")
        .set_border(FormatBorder::Hair);
    let money_format = Format::new()
        .set_num_format("#,##0.00")
        .set_border(FormatBorder::Hair);
    let total_label_format = Format::new().set_bold().set_border(FormatBorder::Thin);
    let total_km_format = Format::new()
        .set_bold()
        .set_num_format("#,##0.0")
        .set_border(FormatBorder::Thin);
    let total_money_format = Format::new()
        .set_bold()
        .set_num_format("#,##0.00")
        .set_border(FormatBorder::Thin);

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sheet_name)
        .map_err(|e| format!("sheet name error: {}", e))?;

    for (col, (title, width)) in COLUMNS.iter().enumerate() {
        let col = col as u16;
        worksheet
            .set_column_width(col, *width)
            .map_err(|e| format!("column width error: {}", e))?;
        worksheet
            .write_string_with_format(0, col, *title, &header_format)
            .map_err(|e| format!("header write error: {}", e))?;
    }
    worksheet
        .set_freeze_panes(1, 0)
        .map_err(|e| format!("freeze panes error: {}", e))?;

    let mut row: u32 = 1;
    for job in sorted_view(jobs) {
        let texts: [(u16, String); 10] = [
            (0, job.id.to_string()),
            (1, format_date(job.date)),
            (2, job.client.clone()),
            (3, job.origin.clone()),
            (4, job.fleet_number.clone()),
            (5, job.driver.clone()),
            (6, job.responsible.clone().unwrap_or_default()),
            (7, job.departure_time.clone()),
            (8, job.arrival_time.clone()),
            (14, job.note.clone().unwrap_or_default()),
        ];
        for (col, text) in &texts {
            worksheet
                .write_string_with_format(row, *col, text.as_str(), &text_format)
                .map_err(|e| format!("cell write error: {}", e))?;
        }

        let numbers: [(u16, f64, &Format); 5] = [
            (9, job.odometer_start, &km_format),
            (10, job.odometer_end, &km_format),
            (COL_KM_TOTAL, job.distance.unwrap_or(0.0), &km_format),
            (COL_VALUE, job.total_value, &money_format),
            (COL_TOLL, job.charged_toll().unwrap_or(0.0), &money_format),
        ];
        for (col, value, format) in numbers {
            worksheet
                .write_number_with_format(row, col, value, format)
                .map_err(|e| format!("cell write error: {}", e))?;
        }

        row += 1;
    }

    let stats = JobStats::from_jobs(jobs);
    worksheet
        .write_string_with_format(row, 0, "TOTAL", &total_label_format)
        .map_err(|e| format!("total write error: {}", e))?;
    worksheet
        .write_string_with_format(row, 2, stats.count.to_string().as_str(), &total_label_format)
        .map_err(|e| format!("total write error: {}", e))?;
    worksheet
        .write_number_with_format(row, COL_KM_TOTAL, stats.total_distance, &total_km_format)
        .map_err(|e| format!("total write error: {}", e))?;
    worksheet
        .write_number_with_format(row, COL_VALUE, stats.total_value, &total_money_format)
        .map_err(|e| format!("total write error: {}", e))?;
    worksheet
        .write_number_with_format(row, COL_TOLL, stats.total_toll, &total_money_format)
        .map_err(|e| format!("total write error: {}", e))?;

    workbook
        .save_to_buffer()
        .map_err(|e| format!("workbook save error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::tests::sample_fields;
    use crate::types::JobId;

    #[test]
    fn test_generate_excel_buffer() {
        let jobs = vec![
            Job::from_fields(JobId(1), sample_fields()),
            Job::from_fields(JobId(2), sample_fields()),
        ];
        let buffer = generate_excel_buffer(&jobs, "Serviços").expect("excel failed");

        // xlsx is a zip archive
        assert!(buffer.starts_with(b"PK"));
    }

    #[test]
    fn test_generate_excel_buffer_empty() {
        let buffer = generate_excel_buffer(&[], "Serviços").expect("excel failed");
        assert!(!buffer.is_empty());
    }

    #[test]
    fn test_invalid_sheet_name() {
        assert!(generate_excel_buffer(&[], "a/b").is_err());
    }
}

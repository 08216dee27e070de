//! Job list spreadsheet (CLI)

use crate::error::{FlatbedError, Result};
use flatbed_log_common::export::excel_core::generate_excel_buffer;
use flatbed_log_common::Job;
use std::path::Path;

pub fn generate_excel(jobs: &[Job], output_path: &Path, title: &str) -> Result<()> {
    let buffer = generate_excel_buffer(jobs, title).map_err(FlatbedError::ExcelGeneration)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output_path, buffer)?;
    Ok(())
}

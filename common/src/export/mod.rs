//! Export cores shared by every front end.

pub mod pdf_core;

#[cfg(feature = "excel")]
pub mod excel_core;

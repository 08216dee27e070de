//! Receipt (ordem de serviço) document
//!
//! Builds the printable summary of one job. The PDF writer in the CLI and
//! any other sink only lay these strings out.

use crate::format::{format_date, MoneyFormat};
use crate::types::{Job, JobId};

pub const RECEIPT_TITLE: &str = "Ordem de Serviço";
pub const NOT_INFORMED: &str = "Não informado";

/// One box of the field grid
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptField {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptDocument {
    pub id: JobId,
    pub title: &'static str,
    /// Window/document title, e.g. `Comprovante - Porto Seguro`
    pub document_name: String,
    /// `Data: 14/03/2025 | ID: #600123`
    pub header_line: String,
    /// Two-column grid, row-major
    pub fields: Vec<ReceiptField>,
    pub distance: ReceiptField,
    pub note: Option<String>,
    pub toll_line: String,
    pub total_label: &'static str,
    pub total_value: String,
    pub signatures: [&'static str; 2],
}

impl ReceiptDocument {
    pub fn from_job(job: &Job, fmt: &MoneyFormat) -> Self {
        let field = |label, value: String| ReceiptField { label, value };

        let fields = vec![
            field("Contratante", job.client.clone()),
            field("Frota", job.fleet_number.clone()),
            field("Motorista", job.driver.clone()),
            field(
                "Responsável",
                job.responsible.clone().unwrap_or_else(|| NOT_INFORMED.to_string()),
            ),
            field("Local/Origem", job.origin.clone()),
            field(
                "Horário",
                format!("{} às {}", job.departure_time, job.arrival_time),
            ),
            field("KM Saída", fmt.format_km(job.odometer_start)),
            field("KM Chegada", fmt.format_km(job.odometer_end)),
        ];

        Self {
            id: job.id,
            title: RECEIPT_TITLE,
            document_name: format!("Comprovante - {}", job.client),
            header_line: format!("Data: {} | ID: #{}", format_date(job.date), job.id.short()),
            fields,
            distance: field("Total Percorrido", fmt.format_km(job.distance.unwrap_or(0.0))),
            note: job.note.clone(),
            toll_line: format!("Pedágio: {}", fmt.format(job.toll.unwrap_or(0.0))),
            total_label: "VALOR TOTAL DO FRETE",
            total_value: fmt.format(job.total_value),
            signatures: ["Assinatura do Motorista", "Assinatura do Cliente"],
        }
    }
}

/// Receipt for `id`, or `None` when no such job exists.
pub fn receipt_document(jobs: &[Job], id: JobId, fmt: &MoneyFormat) -> Option<ReceiptDocument> {
    jobs.iter()
        .find(|j| j.id == id)
        .map(|job| ReceiptDocument::from_job(job, fmt))
}

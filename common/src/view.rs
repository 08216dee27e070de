//! List view models
//!
//! Pure transforms from jobs to render-ready text. Rendering itself
//! (terminal, HTML, ...) belongs to the caller.

use crate::format::{format_date, MoneyFormat};
use crate::types::{Job, JobId};

/// Date descending; jobs on the same date keep their collection order.
pub fn sorted_view<'a, I>(jobs: I) -> Vec<&'a Job>
where
    I: IntoIterator<Item = &'a Job>,
{
    let mut sorted: Vec<&Job> = jobs.into_iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// One label/value line of a card
#[derive(Debug, Clone, PartialEq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
    pub highlight: bool,
}

impl DetailField {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self { label, value: value.into(), highlight: false }
    }

    fn highlighted(label: &'static str, value: impl Into<String>) -> Self {
        Self { label, value: value.into(), highlight: true }
    }
}

/// A job as shown in the list
#[derive(Debug, Clone, PartialEq)]
pub struct JobCard {
    pub id: JobId,
    pub title: String,
    pub subtitle: String,
    pub details: Vec<DetailField>,
    pub note: Option<String>,
}

impl JobCard {
    pub fn from_job(job: &Job, fmt: &MoneyFormat) -> Self {
        let mut details = vec![
            DetailField::new("Local", &job.origin),
            DetailField::new("Motorista", &job.driver),
        ];
        if let Some(responsible) = &job.responsible {
            details.push(DetailField::new("Responsável", responsible));
        }
        details.extend([
            DetailField::new(
                "Horário",
                format!("{} → {}", job.departure_time, job.arrival_time),
            ),
            DetailField::new("KM Saída", fmt.format_km(job.odometer_start)),
            DetailField::new("KM Chegada", fmt.format_km(job.odometer_end)),
            DetailField::highlighted("KM Total", fmt.format_km(job.distance.unwrap_or(0.0))),
            DetailField::highlighted("Valor Total", fmt.format(job.total_value)),
        ]);
        if let Some(toll) = job.charged_toll() {
            details.push(DetailField::new("Pedágio", fmt.format(toll)));
        }

        Self {
            id: job.id,
            title: job.client.clone(),
            subtitle: format!("{} • Frota: {}", format_date(job.date), job.fleet_number),
            details,
            note: job.note.clone(),
        }
    }
}

/// Cards in display order
pub fn job_cards<'a, I>(jobs: I, fmt: &MoneyFormat) -> Vec<JobCard>
where
    I: IntoIterator<Item = &'a Job>,
{
    sorted_view(jobs)
        .into_iter()
        .map(|job| JobCard::from_job(job, fmt))
        .collect()
}

/// `1 serviço`, `3 serviços`
pub fn count_badge(count: usize) -> String {
    if count == 1 {
        "1 serviço".to_string()
    } else {
        format!("{} serviços", count)
    }
}

/// Empty list placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub title: &'static str,
    pub hint: &'static str,
}

pub fn empty_state(filtered: bool) -> EmptyState {
    EmptyState {
        title: "Nenhum serviço encontrado",
        hint: if filtered {
            "Tente ajustar os filtros de busca"
        } else {
            "Use o comando `add` para cadastrar o primeiro serviço"
        },
    }
}

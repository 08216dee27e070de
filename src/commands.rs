//! CLI adapter: turns arguments into typed service calls and view models
//! into terminal text.

use crate::cli::JobArgs;
use crate::error::{FlatbedError, Result};
use crate::storage::FileStorage;
use chrono::NaiveDate;
use flatbed_log_common::stats::StatsDisplay;
use flatbed_log_common::view::EmptyState;
use flatbed_log_common::{JobCard, JobFields, JobService, MoneyFormat};
use std::path::Path;

pub type FileJobService = JobService<FileStorage>;

pub fn open_service(data_dir: &Path) -> FileJobService {
    log::debug!("data dir: {}", data_dir.display());
    JobService::open(FileStorage::new(data_dir))
}

pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| FlatbedError::InvalidDate(text.to_string()))
}

impl JobArgs {
    /// Fields for a new job. `date` defaults to `today`, toll and the
    /// free-text extras are optional, everything else must be given.
    pub fn into_new_fields(self, fmt: &MoneyFormat, today: NaiveDate) -> Result<JobFields> {
        let date = match &self.date {
            Some(text) => parse_date(text)?,
            None => today,
        };

        Ok(JobFields {
            date,
            client: self.client.ok_or(FlatbedError::MissingField("client"))?,
            origin: self.origin.ok_or(FlatbedError::MissingField("origin"))?,
            odometer_start: self.km_start.ok_or(FlatbedError::MissingField("km-start"))?,
            odometer_end: self.km_end.ok_or(FlatbedError::MissingField("km-end"))?,
            departure_time: self.departure.unwrap_or_default(),
            arrival_time: self.arrival.unwrap_or_default(),
            total_value: self
                .value
                .as_deref()
                .map(|v| fmt.parse(v))
                .ok_or(FlatbedError::MissingField("value"))?,
            toll: self.toll.as_deref().map(|t| fmt.parse(t)),
            fleet_number: self.fleet.ok_or(FlatbedError::MissingField("fleet"))?,
            note: self.note,
            driver: self.driver.ok_or(FlatbedError::MissingField("driver"))?,
            responsible: self.responsible,
        })
    }

    /// Overrides the given fields of an existing job. An empty `--note`,
    /// `--responsible` or `--toll` clears it.
    pub fn apply_to(self, base: JobFields, fmt: &MoneyFormat) -> Result<JobFields> {
        let date = match &self.date {
            Some(text) => parse_date(text)?,
            None => base.date,
        };

        Ok(JobFields {
            date,
            client: self.client.unwrap_or(base.client),
            origin: self.origin.unwrap_or(base.origin),
            odometer_start: self.km_start.unwrap_or(base.odometer_start),
            odometer_end: self.km_end.unwrap_or(base.odometer_end),
            departure_time: self.departure.unwrap_or(base.departure_time),
            arrival_time: self.arrival.unwrap_or(base.arrival_time),
            total_value: self.value.as_deref().map(|v| fmt.parse(v)).unwrap_or(base.total_value),
            toll: match self.toll.as_deref() {
                Some(t) if t.trim().is_empty() => None,
                Some(t) => Some(fmt.parse(t)),
                None => base.toll,
            },
            fleet_number: self.fleet.unwrap_or(base.fleet_number),
            note: self.note.or(base.note),
            driver: self.driver.unwrap_or(base.driver),
            responsible: self.responsible.or(base.responsible),
        })
    }
}

pub fn render_card(card: &JobCard) -> String {
    let mut out = format!("#{}  {}\n    {}\n", card.id, card.title, card.subtitle);
    for detail in &card.details {
        let marker = if detail.highlight { "*" } else { " " };
        out.push_str(&format!("  {} {:<12} {}\n", marker, detail.label, detail.value));
    }
    if let Some(note) = &card.note {
        out.push_str(&format!("    Observação: {}\n", note));
    }
    out
}

pub fn render_empty_state(state: &EmptyState) -> String {
    format!("{}\n{}\n", state.title, state.hint)
}

pub fn render_stats(stats: &StatsDisplay) -> String {
    format!(
        "Serviços:    {}\nKM total:    {}\nValor total: {}\nPedágios:    {}\n",
        stats.count, stats.total_distance, stats.total_value, stats.total_toll
    )
}

pub fn confirm(prompt: &str) -> Result<bool> {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| FlatbedError::Io(std::io::Error::other(e.to_string())))
}

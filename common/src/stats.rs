//! Summary statistics over the full collection

use crate::format::MoneyFormat;
use crate::types::Job;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStats {
    pub count: usize,
    /// Jobs without a distance count as zero
    pub total_distance: f64,
    pub total_value: f64,
    pub total_toll: f64,
}

impl JobStats {
    pub fn from_jobs(jobs: &[Job]) -> Self {
        jobs.iter().fold(
            Self {
                count: jobs.len(),
                ..Default::default()
            },
            |mut acc, job| {
                acc.total_distance += job.distance.unwrap_or(0.0);
                acc.total_value += job.total_value;
                acc.total_toll += job.charged_toll().unwrap_or(0.0);
                acc
            },
        )
    }

    pub fn display(&self, fmt: &MoneyFormat) -> StatsDisplay {
        StatsDisplay {
            count: self.count.to_string(),
            total_distance: fmt.format_km(self.total_distance),
            total_value: fmt.format(self.total_value),
            total_toll: fmt.format(self.total_toll),
        }
    }
}

/// Render-ready statistics
#[derive(Debug, Clone, PartialEq)]
pub struct StatsDisplay {
    pub count: String,
    pub total_distance: String,
    pub total_value: String,
    pub total_toll: String,
}

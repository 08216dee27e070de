//! Search and driver filter
//!
//! `search` and `filter_by_driver` are the two independent list views of
//! the job screen. [`JobQuery`] combines them (both must match), which the
//! CLI uses when both `--search` and `--driver` are given.

use crate::types::Job;
use std::collections::BTreeSet;

/// Case-insensitive substring match on client, driver, fleet number,
/// origin, responsible and note. An empty term matches everything.
pub fn search<'a>(jobs: &'a [Job], term: &str) -> Vec<&'a Job> {
    if term.is_empty() {
        return jobs.iter().collect();
    }
    let term = term.to_lowercase();
    jobs.iter().filter(|j| matches_term(j, &term)).collect()
}

/// Exact (case-sensitive) driver match. An empty name matches everything.
pub fn filter_by_driver<'a>(jobs: &'a [Job], driver: &str) -> Vec<&'a Job> {
    if driver.is_empty() {
        return jobs.iter().collect();
    }
    jobs.iter().filter(|j| j.driver == driver).collect()
}

/// Sorted, de-duplicated driver names (filter options)
pub fn distinct_drivers(jobs: &[Job]) -> Vec<String> {
    jobs.iter()
        .map(|j| j.driver.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// `term` must already be lowercase.
fn matches_term(job: &Job, term: &str) -> bool {
    let contains = |value: &str| value.to_lowercase().contains(term);

    contains(&job.client)
        || contains(&job.driver)
        || contains(&job.fleet_number)
        || contains(&job.origin)
        || job.responsible.as_deref().is_some_and(contains)
        || job.note.as_deref().is_some_and(contains)
}

/// Search term and driver filter applied together
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobQuery {
    pub search: Option<String>,
    pub driver: Option<String>,
}

impl JobQuery {
    pub fn is_filtered(&self) -> bool {
        self.search.as_deref().is_some_and(|s| !s.is_empty())
            || self.driver.as_deref().is_some_and(|d| !d.is_empty())
    }

    pub fn apply<'a>(&self, jobs: &'a [Job]) -> Vec<&'a Job> {
        let term = self.search.as_deref().unwrap_or("").to_lowercase();
        let driver = self.driver.as_deref().unwrap_or("");

        jobs.iter()
            .filter(|j| term.is_empty() || matches_term(j, &term))
            .filter(|j| driver.is_empty() || j.driver == driver)
            .collect()
    }
}

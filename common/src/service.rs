//! Record service: create / update / delete / lookup
//!
//! Every mutation is written through to the [`JobStore`] before it returns.
//! When the write fails the in-memory change is undone, so memory and
//! storage always hold the same collection.

use crate::error::{Error, Result};
use crate::store::{JobStore, Storage};
use crate::types::{Job, JobFields, JobId};

pub struct JobService<S> {
    store: JobStore<S>,
    jobs: Vec<Job>,
}

impl<S: Storage> JobService<S> {
    /// Opens the default storage key and loads the collection.
    pub fn open(storage: S) -> Self {
        Self::from_store(JobStore::new(storage))
    }

    pub fn from_store(mut store: JobStore<S>) -> Self {
        let jobs = store.load();
        Self { store, jobs }
    }

    /// Jobs in insertion order
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn store(&self) -> &JobStore<S> {
        &self.store
    }

    pub fn find_by_id(&self, id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    pub fn create(&mut self, fields: JobFields) -> Result<Job> {
        self.create_at(fields, now_millis())
    }

    /// [`create`](Self::create) with an explicit clock reading.
    pub fn create_at(&mut self, fields: JobFields, now_millis: u64) -> Result<Job> {
        let fields = fields.normalized();
        fields.validate()?;

        let id = next_id(&self.jobs, now_millis);
        let job = Job::from_fields(id, fields);
        self.jobs.push(job.clone());

        if let Err(e) = self.store.save(&self.jobs) {
            self.jobs.pop();
            return Err(e);
        }

        log::info!("created job #{} ({})", job.id, job.client);
        Ok(job)
    }

    pub fn update(&mut self, id: JobId, fields: JobFields) -> Result<Job> {
        let index = self
            .jobs
            .iter()
            .position(|j| j.id == id)
            .ok_or(Error::NotFound(id))?;

        let fields = fields.normalized();
        fields.validate()?;

        let job = Job::from_fields(id, fields);
        let previous = std::mem::replace(&mut self.jobs[index], job.clone());

        if let Err(e) = self.store.save(&self.jobs) {
            self.jobs[index] = previous;
            return Err(e);
        }

        log::info!("updated job #{}", id);
        Ok(job)
    }

    /// Removes a job. Unknown ids are a no-op and return `Ok(false)`.
    pub fn delete(&mut self, id: JobId) -> Result<bool> {
        let Some(index) = self.jobs.iter().position(|j| j.id == id) else {
            log::debug!("delete: job #{} not found, nothing to do", id);
            return Ok(false);
        };

        let removed = self.jobs.remove(index);
        if let Err(e) = self.store.save(&self.jobs) {
            self.jobs.insert(index, removed);
            return Err(e);
        }

        log::info!("deleted job #{}", id);
        Ok(true)
    }
}

/// Timestamp-based id that never repeats or goes backwards within a collection.
pub fn next_id(jobs: &[Job], now_millis: u64) -> JobId {
    let after_last = jobs
        .iter()
        .map(|j| j.id.0)
        .max()
        .map(|max| max.saturating_add(1))
        .unwrap_or(0);
    JobId(now_millis.max(after_last))
}

fn now_millis() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
}

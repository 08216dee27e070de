//! Job collection persistence
//!
//! The whole collection lives under a single key of a key/value
//! [`Storage`] and is rewritten on every change. Unreadable state never
//! reaches the caller: it loads as an empty collection and the raw text is
//! kept under `<key>.bak`.
//!
//! When the backend itself fails to read the key, the store does not know
//! what is on disk and refuses to save until it is reopened.
//!
//! Records written by the browser version are tidied on load (blank
//! optionals, zero tolls, repeated ids) so the rest of the crate sees the
//! same shape `JobService::create` produces.

use crate::error::{Error, Result};
use crate::types::{Job, JobId};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Key under which the browser version of the log keeps its jobs
pub const DEFAULT_STORAGE_KEY: &str = "servicos-caminhao-prancha";

/// Minimal key/value backend
pub trait Storage {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
    /// Returns `false` when the key did not exist.
    fn remove(&mut self, key: &str) -> Result<bool>;
}

/// In-process storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.entries.insert(key.to_string(), value.to_string());
        storage
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        Ok(self.entries.remove(key).is_some())
    }
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        (**self).remove(key)
    }
}

/// Persisted document (schema version 1)
#[derive(Debug, Serialize, Deserialize)]
struct StoredJobs {
    version: u32,
    jobs: Vec<Job>,
}

/// Accepted on-disk layouts
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredLayout {
    Versioned(StoredJobs),
    /// Bare array written by the browser tool
    Legacy(Vec<Job>),
}

/// Loads and saves the full job collection
#[derive(Debug)]
pub struct JobStore<S> {
    storage: S,
    key: String,
    read_failed: bool,
}

impl<S: Storage> JobStore<S> {
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: &str) -> Self {
        Self {
            storage,
            key: key.to_string(),
            read_failed: false,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backup_key(&self) -> String {
        format!("{}.bak", self.key)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// `true` after a load whose read failed; saves are refused.
    pub fn is_read_only(&self) -> bool {
        self.read_failed
    }

    /// Reads the collection; empty when absent or unreadable.
    pub fn load(&mut self) -> Vec<Job> {
        self.read_failed = false;
        let raw = match self.storage.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("could not read '{}', starting empty and read-only: {}", self.key, e);
                self.read_failed = true;
                return Vec::new();
            }
        };

        if raw.trim().is_empty() {
            return Vec::new();
        }

        match Self::decode(&raw) {
            Ok(mut jobs) => {
                for job in &mut jobs {
                    job.normalize_stored();
                }
                reassign_duplicate_ids(&mut jobs);
                log::debug!("loaded {} jobs from '{}'", jobs.len(), self.key);
                jobs
            }
            Err(e) => {
                log::warn!("stored jobs under '{}' are malformed, starting empty: {}", self.key, e);
                let backup = self.backup_key();
                if let Err(e) = self.storage.write(&backup, &raw) {
                    log::warn!("could not keep a copy under '{}': {}", backup, e);
                }
                Vec::new()
            }
        }
    }

    /// Overwrites the stored collection.
    pub fn save(&mut self, jobs: &[Job]) -> Result<()> {
        if self.read_failed {
            return Err(Error::Storage(format!(
                "'{}' could not be read; refusing to overwrite it",
                self.key
            )));
        }
        let document = StoredJobs {
            version: Self::CURRENT_VERSION,
            jobs: jobs.to_vec(),
        };
        let json = serde_json::to_string_pretty(&document)?;
        self.storage.write(&self.key, &json)?;
        log::debug!("saved {} jobs to '{}'", jobs.len(), self.key);
        Ok(())
    }

    fn decode(raw: &str) -> Result<Vec<Job>> {
        match serde_json::from_str::<StoredLayout>(raw)? {
            StoredLayout::Versioned(doc) if doc.version == Self::CURRENT_VERSION => Ok(doc.jobs),
            StoredLayout::Versioned(doc) => Err(Error::Storage(format!(
                "unsupported schema version {}",
                doc.version
            ))),
            StoredLayout::Legacy(jobs) => Ok(jobs),
        }
    }
}

/// Later records sharing an id get fresh ones past the current maximum.
fn reassign_duplicate_ids(jobs: &mut [Job]) {
    let mut next = jobs.iter().map(|j| j.id.0).max().unwrap_or(0);
    let mut seen = HashSet::new();
    for job in jobs.iter_mut() {
        if !seen.insert(job.id) {
            next = next.saturating_add(1);
            log::warn!("duplicate job id #{} ({}), now #{}", job.id, job.client, next);
            job.id = JobId(next);
            seen.insert(job.id);
        }
    }
}

//! Flatbed job log core
//!
//! Storage-agnostic types and logic shared by the CLI and any other front end:
//! records, money/date formatting, persistence over a key/value store,
//! the record service, search, statistics and view models.

pub mod types;
pub mod format;
pub mod error;
pub mod store;
pub mod service;
pub mod query;
pub mod stats;
pub mod view;
pub mod receipt;
pub mod layout;
pub mod export;

pub use types::{compute_distance, Job, JobFields, JobId};
pub use format::{format_date, MoneyFormat};
pub use error::{Error, Result};
pub use store::{JobStore, MemoryStorage, Storage, DEFAULT_STORAGE_KEY};
pub use service::JobService;
pub use query::{distinct_drivers, filter_by_driver, search, JobQuery};
pub use stats::JobStats;
pub use view::{count_badge, empty_state, job_cards, sorted_view, JobCard};
pub use receipt::{receipt_document, ReceiptDocument};
pub use layout::ReceiptLayout;

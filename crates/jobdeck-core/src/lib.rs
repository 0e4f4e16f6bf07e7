//! # jobdeck-core
//!
//! Client library for the jobdeck job-listing dashboard.
//!
//! The crate talks to a small REST API (the `/stats` and `/api/jobs`
//! endpoints) and keeps a client-side mirror of the server's current
//! filtered view of job records:
//!
//! - **Stats Reader**: one-shot, best-effort aggregate statistics for the
//!   landing view ([`stats::StatsReader`])
//! - **Notification Emitter**: transient, self-dismissing banners raised by
//!   operation outcomes ([`notify::NotificationCenter`])
//! - **Job List Manager**: the mirror plus every list/create/update/delete
//!   round-trip, each mutation followed by a full reload
//!   ([`manager::JobListManager`])
//!
//! The server is the sole source of truth. The mirror is a disposable cache
//! replaced wholesale from list responses; it is never patched
//! incrementally.
//!
//! Presentation is reachable only through the seams in [`view`] and
//! [`notify`]; the library renders nothing itself.
//!
//! ## Example
//!
//! ```rust,no_run
//! use jobdeck_core::prelude::*;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let client = JobsApiClient::new("http://localhost:5000");
//!     let page = client.list_jobs(&JobFilter::default()).await?;
//!     println!("{} jobs", page.count);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod client;
pub mod envelope;
pub mod error;
pub mod job;
pub mod manager;
pub mod notify;
pub mod stats;
pub mod store;
pub mod view;

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust
/// use jobdeck_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::JobsApiClient;
    pub use crate::envelope::{JobsPage, MutationAck};
    pub use crate::error::{Error, Result};
    pub use crate::job::{JobDraft, JobFilter, JobId, JobRecord, JobUpdate, SENTINEL};
    pub use crate::manager::JobListManager;
    pub use crate::notify::{Notice, NotificationCenter, Notifier, Severity};
    pub use crate::stats::{StatsReader, StatsSnapshot};
    pub use crate::store::{JobStore, LoadToken};
    pub use crate::view::{JobListView, StatsPanel};
}

// Re-export key types at crate root for ergonomics
pub use client::JobsApiClient;
pub use envelope::{JobsPage, MutationAck};
pub use error::{Error, Result};
pub use job::{JobDraft, JobFilter, JobId, JobRecord, JobUpdate, SENTINEL};
pub use manager::JobListManager;
pub use notify::{Notice, NotificationCenter, Notifier, Severity};
pub use stats::{StatsReader, StatsSnapshot};
pub use store::JobStore;
pub use view::{JobListView, StatsPanel};

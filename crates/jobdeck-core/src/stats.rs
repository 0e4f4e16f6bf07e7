//! Advisory statistics for the landing view.

use serde::{Deserialize, Serialize};

use crate::client::JobsApiClient;
use crate::view::StatsPanel;

/// Aggregate statistics returned by `GET /stats`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Whether the CSV source file exists on the server.
    #[serde(default)]
    pub csv_exists: bool,
    /// Whether the job database is reachable.
    #[serde(default)]
    pub db_exists: bool,
    /// Total number of stored jobs.
    #[serde(default)]
    pub total_jobs: u64,
}

/// One-shot reader that patches the stats panel on the landing view.
///
/// Statistics are advisory, not critical path: any failure is logged and
/// swallowed, no user-visible error is produced, and nothing retries.
pub struct StatsReader<P> {
    client: JobsApiClient,
    panel: P,
}

impl<P: StatsPanel> StatsReader<P> {
    /// Creates a reader over the given panel.
    pub fn new(client: JobsApiClient, panel: P) -> Self {
        Self { client, panel }
    }

    /// Fetches statistics and updates each panel region independently.
    pub async fn load_stats(&mut self) {
        let result = self.client.stats().await;
        match result {
            Ok(stats) => {
                self.panel.set_csv_status(stats.csv_exists);
                self.panel.set_db_status(stats.db_exists);
                self.panel.set_total_jobs(stats.total_jobs);
            }
            Err(error) => {
                tracing::warn!(%error, "failed to load stats");
            }
        }
    }

    /// Consumes the reader, returning the panel.
    pub fn into_panel(self) -> P {
        self.panel
    }
}

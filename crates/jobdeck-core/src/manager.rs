//! The job-list manager: mirror ownership and server synchronization.
//!
//! Every mutating operation follows the same state machine:
//! request in flight, then on success a notification plus one full reload
//! with the current filter, or on failure a notification and no local
//! mutation at all. A failed reload keeps the previous mirror on display
//! (show-last-good-state) rather than clearing it.

use crate::client::JobsApiClient;
use crate::error::Error;
use crate::job::{JobDraft, JobFilter, JobId, JobRecord, JobUpdate};
use crate::notify::{Notifier, Severity};
use crate::store::JobStore;
use crate::view::JobListView;

/// Owns the job mirror and drives every list/create/update/delete
/// round-trip against the server.
///
/// The mirror is mutated only from response handlers, always as one
/// wholesale replacement; concurrent loads are resolved by generation
/// token, so a late response for a superseded filter is discarded.
pub struct JobListManager<V, N> {
    client: JobsApiClient,
    store: JobStore,
    view: V,
    notifier: N,
    filter: JobFilter,
}

impl<V: JobListView, N: Notifier> JobListManager<V, N> {
    /// Creates a manager with an empty mirror and no filter.
    pub fn new(client: JobsApiClient, view: V, notifier: N) -> Self {
        Self {
            client,
            store: JobStore::new(),
            view,
            notifier,
            filter: JobFilter::default(),
        }
    }

    /// Replaces the active filter inputs.
    ///
    /// Takes effect on the next [`Self::load_jobs`], including the reload
    /// that follows a successful mutation.
    pub fn set_filter(&mut self, filter: JobFilter) {
        self.filter = filter;
    }

    /// The active filter inputs.
    #[must_use]
    pub fn filter(&self) -> &JobFilter {
        &self.filter
    }

    /// The mirrored records, in the order the server returned them.
    #[must_use]
    pub fn jobs(&self) -> &[JobRecord] {
        self.store.jobs()
    }

    /// Reloads the mirror from the server using the active filter.
    ///
    /// On success the mirror is replaced wholesale, the list re-rendered,
    /// and the displayed count updated from the server-reported total. On
    /// an application-level failure the server's error text is surfaced via
    /// the notifier and the stale mirror stays on display. Returns whether
    /// the request succeeded.
    pub async fn load_jobs(&mut self) -> bool {
        let token = self.store.begin_load();
        let result = self.client.list_jobs(&self.filter).await;
        match result {
            Ok(page) => {
                if self.store.commit(token, page.jobs) {
                    self.render();
                    self.view.set_count(page.count);
                } else {
                    tracing::debug!("discarding job list response for a superseded load");
                }
                true
            }
            Err(Error::Api { message }) => {
                self.notifier
                    .notify(Severity::Error, &format!("Failed to load jobs: {message}"));
                false
            }
            Err(error) => {
                self.notifier
                    .notify(Severity::Error, &format!("Error loading jobs: {error}"));
                false
            }
        }
    }

    /// Projects the mirror into the view: the empty-state message for an
    /// empty mirror, otherwise one row per record.
    pub fn render(&mut self) {
        if self.store.is_empty() {
            self.view.show_empty();
        } else {
            self.view.show_jobs(self.store.jobs());
        }
    }

    /// Creates a job, then resynchronizes.
    ///
    /// On success: success notification, entry dialog closed and cleared,
    /// one reload. On failure: error notification carrying the server's
    /// detail, no local mutation. Returns whether the create succeeded.
    pub async fn add_job(&mut self, draft: JobDraft) -> bool {
        let result = self.client.create_job(&draft).await;
        match result {
            Ok(_) => {
                self.notifier
                    .notify(Severity::Success, "Job added successfully!");
                self.view.close_add_dialog();
                self.load_jobs().await;
                true
            }
            Err(Error::Api { message }) => {
                self.notifier
                    .notify(Severity::Error, &format!("Failed to add job: {message}"));
                false
            }
            Err(error) => {
                self.notifier
                    .notify(Severity::Error, &format!("Error adding job: {error}"));
                false
            }
        }
    }

    /// Opens the edit dialog for `id`, pre-populated from the mirror.
    ///
    /// The lookup uses the mirror only, never a fetch. An id absent from
    /// the mirror (stale UI referencing a since-deleted record) is a
    /// silent no-op.
    pub fn open_edit_dialog(&mut self, id: JobId) {
        if let Some(job) = self.store.get(id) {
            self.view.open_edit_dialog(job);
        }
    }

    /// Updates a job, then resynchronizes.
    ///
    /// Fields are sent as entered; no sentinel defaulting on this path.
    /// Returns whether the update succeeded.
    pub async fn update_job(&mut self, id: JobId, update: JobUpdate) -> bool {
        let result = self.client.update_job(id, &update).await;
        match result {
            Ok(_) => {
                self.notifier
                    .notify(Severity::Success, "Job updated successfully!");
                self.view.close_edit_dialog();
                self.load_jobs().await;
                true
            }
            Err(Error::Api { message }) => {
                self.notifier
                    .notify(Severity::Error, &format!("Failed to update job: {message}"));
                false
            }
            Err(error) => {
                self.notifier
                    .notify(Severity::Error, &format!("Error updating job: {error}"));
                false
            }
        }
    }

    /// Deletes a job, then resynchronizes.
    ///
    /// The yes/no confirmation gate belongs to the presentation layer;
    /// this issues the request directly. Returns whether the delete
    /// succeeded.
    pub async fn delete_job(&mut self, id: JobId) -> bool {
        let result = self.client.delete_job(id).await;
        match result {
            Ok(_) => {
                self.notifier
                    .notify(Severity::Success, "Job deleted successfully!");
                self.load_jobs().await;
                true
            }
            Err(Error::Api { message }) => {
                self.notifier
                    .notify(Severity::Error, &format!("Failed to delete job: {message}"));
                false
            }
            Err(error) => {
                self.notifier
                    .notify(Severity::Error, &format!("Error deleting job: {error}"));
                false
            }
        }
    }
}

//! Presentation seams.
//!
//! The library never draws anything itself; it writes into the display
//! regions these traits describe (the job list and its count, the add and
//! edit dialogs, the three statistics badges). An implementation that
//! lacks a given region simply ignores the call; each region is guarded
//! independently, never an error.

use crate::job::JobRecord;

/// Rendering surface for the job list and its dialogs.
pub trait JobListView {
    /// Shows one row per record, in response order, keyed by the record id.
    fn show_jobs(&mut self, jobs: &[JobRecord]);

    /// Shows the empty-state message instead of an empty list.
    fn show_empty(&mut self);

    /// Updates the displayed job count with the server-reported total.
    fn set_count(&mut self, count: u64);

    /// Opens the edit dialog pre-populated from `job`.
    fn open_edit_dialog(&mut self, job: &JobRecord);

    /// Closes the edit dialog.
    fn close_edit_dialog(&mut self);

    /// Clears the entry form and closes the add dialog.
    fn close_add_dialog(&mut self);
}

/// Display regions for the aggregate statistics on the landing view.
pub trait StatsPanel {
    /// Updates the CSV-source badge.
    fn set_csv_status(&mut self, exists: bool);

    /// Updates the database badge.
    fn set_db_status(&mut self, exists: bool);

    /// Updates the raw total-job count.
    fn set_total_jobs(&mut self, total: u64);
}

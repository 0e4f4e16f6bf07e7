//! The client-held mirror of server job records.
//!
//! The mirror is valid only until the next reload. It is replaced wholesale
//! from list responses and never patched incrementally; between a mutation
//! and the following reload it may be stale, which is why edit operations
//! use it only to pre-populate the edit form.

use crate::job::{JobId, JobRecord};

/// Token identifying one load request.
///
/// Every [`JobStore::begin_load`] supersedes all earlier tokens; a commit
/// with a superseded token is discarded, so a late-arriving response for an
/// outdated filter can never overwrite a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken(u64);

/// Single-writer container for the job mirror.
///
/// All mutations funnel through [`JobStore::commit`], which performs one
/// atomic wholesale replacement. The server remains the sole source of
/// truth; this is a disposable cache.
#[derive(Debug, Default)]
pub struct JobStore {
    jobs: Vec<JobRecord>,
    generation: u64,
}

impl JobStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new load request, superseding any still in flight.
    pub fn begin_load(&mut self) -> LoadToken {
        self.generation += 1;
        LoadToken(self.generation)
    }

    /// Replaces the mirror wholesale if `token` is still the newest load.
    ///
    /// Returns whether the replacement applied.
    pub fn commit(&mut self, token: LoadToken, jobs: Vec<JobRecord>) -> bool {
        if token.0 != self.generation {
            return false;
        }
        self.jobs = jobs;
        true
    }

    /// Looks up a record by id in the current mirror.
    #[must_use]
    pub fn get(&self, id: JobId) -> Option<&JobRecord> {
        self.jobs.iter().find(|job| job.id == id)
    }

    /// The mirrored records, in the order the server returned them.
    #[must_use]
    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    /// Number of mirrored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether the mirror is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

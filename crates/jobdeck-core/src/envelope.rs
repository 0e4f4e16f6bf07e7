//! Uniform `{success, ...}` response envelopes.
//!
//! Every API endpoint wraps its payload in a boolean `success` flag plus
//! either payload fields or an `error` string. Decoding is defensive: a
//! missing or malformed `success` field defaults to `false` and is treated
//! as a failure.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::job::{JobId, JobRecord};

/// Envelope for `GET /api/jobs`.
#[derive(Debug, Deserialize)]
pub struct JobListEnvelope {
    /// Whether the server reported success.
    #[serde(default)]
    pub success: bool,
    /// The job sequence, in server order.
    #[serde(default)]
    pub jobs: Vec<JobRecord>,
    /// Server-reported total for the current filter.
    #[serde(default)]
    pub count: u64,
    /// Server-provided error text on failure.
    #[serde(default)]
    pub error: Option<String>,
}

impl JobListEnvelope {
    /// Unwraps the envelope into a page or an application-level error.
    pub fn into_result(self) -> Result<JobsPage> {
        if self.success {
            Ok(JobsPage {
                jobs: self.jobs,
                count: self.count,
            })
        } else {
            Err(Error::from_envelope(self.error))
        }
    }
}

/// A successfully fetched page of jobs with the server-reported count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobsPage {
    /// The job sequence, in server order.
    pub jobs: Vec<JobRecord>,
    /// Server-reported total for the current filter.
    pub count: u64,
}

/// Envelope for `GET /api/jobs/{id}`.
#[derive(Debug, Deserialize)]
pub struct JobItemEnvelope {
    /// Whether the server reported success.
    #[serde(default)]
    pub success: bool,
    /// The requested job on success.
    #[serde(default)]
    pub job: Option<JobRecord>,
    /// Server-provided error text on failure.
    #[serde(default)]
    pub error: Option<String>,
}

impl JobItemEnvelope {
    /// Unwraps the envelope into the record or an error.
    pub fn into_result(self) -> Result<JobRecord> {
        if self.success {
            self.job
                .ok_or_else(|| Error::decode("successful envelope without a job payload"))
        } else {
            Err(Error::from_envelope(self.error))
        }
    }
}

/// Envelope for the mutating endpoints (POST/PUT/DELETE).
#[derive(Debug, Deserialize)]
pub struct AckEnvelope {
    /// Whether the server reported success.
    #[serde(default)]
    pub success: bool,
    /// Server-provided confirmation text.
    #[serde(default)]
    pub message: Option<String>,
    /// Id of the created job, on the create path.
    #[serde(default)]
    pub job_id: Option<JobId>,
    /// Server-provided error text on failure.
    #[serde(default)]
    pub error: Option<String>,
}

impl AckEnvelope {
    /// Unwraps the envelope into an acknowledgement or an error.
    pub fn into_result(self) -> Result<MutationAck> {
        if self.success {
            Ok(MutationAck {
                message: self.message,
                job_id: self.job_id,
            })
        } else {
            Err(Error::from_envelope(self.error))
        }
    }
}

/// Acknowledgement of a successful mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationAck {
    /// Server-provided confirmation text, if any.
    pub message: Option<String>,
    /// Id of the created job, on the create path.
    pub job_id: Option<JobId>,
}

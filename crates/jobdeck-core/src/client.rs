//! HTTP client for the job-listing REST API.
//!
//! All endpoints answer with the uniform `{success, ...}` envelope, so the
//! client decodes the body without consulting the HTTP status: the server
//! signals failures in-envelope. A body that is not valid JSON for the
//! expected shape is a transport/parse failure.
//!
//! No request timeout is configured and nothing retries; a hung request
//! stays pending as long as the server does.

use serde::de::DeserializeOwned;

use crate::envelope::{AckEnvelope, JobItemEnvelope, JobListEnvelope, JobsPage, MutationAck};
use crate::error::{Error, Result};
use crate::job::{JobDraft, JobFilter, JobId, JobRecord, JobUpdate};
use crate::stats::StatsSnapshot;

/// Client for the job-listing REST API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct JobsApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl JobsApiClient {
    /// Creates a client targeting the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// The base URL this client targets.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches aggregate statistics (`GET /stats`).
    ///
    /// The stats body is not enveloped; any transport or parse failure is
    /// the only error mode.
    pub async fn stats(&self) -> Result<StatsSnapshot> {
        let url = format!("{}/stats", self.base_url);
        let response = self.client.get(&url).send().await.map_err(send_error)?;
        decode(response).await
    }

    /// Fetches the filtered job list (`GET /api/jobs?city=&position=`).
    ///
    /// Only present filter inputs become query parameters; encoding is
    /// handled by the HTTP layer.
    pub async fn list_jobs(&self, filter: &JobFilter) -> Result<JobsPage> {
        let url = format!("{}/api/jobs", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&filter.query_pairs())
            .send()
            .await
            .map_err(send_error)?;
        decode::<JobListEnvelope>(response).await?.into_result()
    }

    /// Fetches a single job (`GET /api/jobs/{id}`).
    pub async fn fetch_job(&self, id: JobId) -> Result<JobRecord> {
        let url = format!("{}/api/jobs/{id}", self.base_url);
        let response = self.client.get(&url).send().await.map_err(send_error)?;
        decode::<JobItemEnvelope>(response).await?.into_result()
    }

    /// Creates a job (`POST /api/jobs`).
    pub async fn create_job(&self, draft: &JobDraft) -> Result<MutationAck> {
        let url = format!("{}/api/jobs", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(draft)
            .send()
            .await
            .map_err(send_error)?;
        decode::<AckEnvelope>(response).await?.into_result()
    }

    /// Updates a job (`PUT /api/jobs/{id}`).
    pub async fn update_job(&self, id: JobId, update: &JobUpdate) -> Result<MutationAck> {
        let url = format!("{}/api/jobs/{id}", self.base_url);
        let response = self
            .client
            .put(&url)
            .json(update)
            .send()
            .await
            .map_err(send_error)?;
        decode::<AckEnvelope>(response).await?.into_result()
    }

    /// Deletes a job (`DELETE /api/jobs/{id}`).
    pub async fn delete_job(&self, id: JobId) -> Result<MutationAck> {
        let url = format!("{}/api/jobs/{id}", self.base_url);
        let response = self.client.delete(&url).send().await.map_err(send_error)?;
        decode::<AckEnvelope>(response).await?.into_result()
    }
}

fn send_error(source: reqwest::Error) -> Error {
    Error::transport_with_source(source.to_string(), source)
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| Error::decode(format!("malformed response body: {e}")))
}

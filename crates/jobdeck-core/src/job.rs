//! Job records, request payloads, and filter inputs.
//!
//! All job fields are free-text strings; an absent optional value is carried
//! as the [`SENTINEL`] string rather than a null or empty marker. The server
//! is the sole validator; nothing here rejects input.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sentinel string standing in for an absent optional field.
pub const SENTINEL: &str = "N/A";

/// Server-assigned job identifier.
///
/// Ids are allocated by the server on insert, unique within a fetched set,
/// and immutable; the client never generates one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct JobId(pub i64);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for JobId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

/// A job posting as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    /// Server-assigned unique id.
    pub id: JobId,
    /// Job title.
    pub title: String,
    /// Hiring company.
    pub company: String,
    /// Job location.
    pub location: String,
    /// Salary text, or the sentinel.
    pub salary: String,
    /// Employment type, or the sentinel.
    pub job_type: String,
    /// Free-text description, or the sentinel.
    pub description: String,
    /// Posting date text, or the sentinel.
    pub posted_date: String,
    /// Original listing URL, or the sentinel.
    pub job_url: String,
    /// When the scraper captured this row; absent for hand-entered jobs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scraped_at: Option<String>,
}

/// Payload for creating a job (`POST /api/jobs`).
///
/// Only `title` and `company` are required by convention; the six optional
/// fields fall back to the [`SENTINEL`] when left blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobDraft {
    /// Job title, as entered.
    pub title: String,
    /// Hiring company, as entered.
    pub company: String,
    /// Job location, or the sentinel.
    pub location: String,
    /// Salary text, or the sentinel.
    pub salary: String,
    /// Employment type, or the sentinel.
    pub job_type: String,
    /// Free-text description, or the sentinel.
    pub description: String,
    /// Posting date text, or the sentinel.
    pub posted_date: String,
    /// Original listing URL, or the sentinel.
    pub job_url: String,
}

impl JobDraft {
    /// Creates a draft with the required fields; every optional field starts
    /// at the sentinel.
    #[must_use]
    pub fn new(title: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            location: SENTINEL.to_owned(),
            salary: SENTINEL.to_owned(),
            job_type: SENTINEL.to_owned(),
            description: SENTINEL.to_owned(),
            posted_date: SENTINEL.to_owned(),
            job_url: SENTINEL.to_owned(),
        }
    }

    /// Sets the location, falling back to the sentinel when blank.
    #[must_use]
    pub fn with_location(mut self, value: &str) -> Self {
        self.location = or_sentinel(value);
        self
    }

    /// Sets the salary, falling back to the sentinel when blank.
    #[must_use]
    pub fn with_salary(mut self, value: &str) -> Self {
        self.salary = or_sentinel(value);
        self
    }

    /// Sets the employment type, falling back to the sentinel when blank.
    #[must_use]
    pub fn with_job_type(mut self, value: &str) -> Self {
        self.job_type = or_sentinel(value);
        self
    }

    /// Sets the description, falling back to the sentinel when blank.
    #[must_use]
    pub fn with_description(mut self, value: &str) -> Self {
        self.description = or_sentinel(value);
        self
    }

    /// Sets the posting date, falling back to the sentinel when blank.
    #[must_use]
    pub fn with_posted_date(mut self, value: &str) -> Self {
        self.posted_date = or_sentinel(value);
        self
    }

    /// Sets the listing URL, falling back to the sentinel when blank.
    #[must_use]
    pub fn with_job_url(mut self, value: &str) -> Self {
        self.job_url = or_sentinel(value);
        self
    }
}

fn or_sentinel(value: &str) -> String {
    if value.is_empty() {
        SENTINEL.to_owned()
    } else {
        value.to_owned()
    }
}

/// Payload for updating a job (`PUT /api/jobs/{id}`).
///
/// Fields are sent exactly as entered: this path edits existing records, so
/// no sentinel defaulting applies. Unset fields are omitted from the body;
/// the server updates only what is present. The listing URL is not editable
/// after creation, so it has no member here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JobUpdate {
    /// New title, if edited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New company, if edited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// New location, if edited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// New salary, if edited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    /// New employment type, if edited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    /// New description, if edited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New posting date, if edited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<String>,
}

impl JobUpdate {
    /// The full update an edit dialog submits: every editable field, as
    /// entered.
    #[must_use]
    pub fn full(
        title: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
        salary: impl Into<String>,
        job_type: impl Into<String>,
        description: impl Into<String>,
        posted_date: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            company: Some(company.into()),
            location: Some(location.into()),
            salary: Some(salary.into()),
            job_type: Some(job_type.into()),
            description: Some(description.into()),
            posted_date: Some(posted_date.into()),
        }
    }

    /// Whether no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.company.is_none()
            && self.location.is_none()
            && self.salary.is_none()
            && self.job_type.is_none()
            && self.description.is_none()
            && self.posted_date.is_none()
    }
}

/// Filter inputs for the job list query.
///
/// Blank inputs count as absent: an empty city or position box contributes
/// no query parameter at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    /// Substring match against the job location.
    pub city: Option<String>,
    /// Substring match against the job title.
    pub position: Option<String>,
}

impl JobFilter {
    /// Builds a filter, normalizing blank inputs to absent.
    #[must_use]
    pub fn new(city: Option<String>, position: Option<String>) -> Self {
        Self {
            city: city.filter(|c| !c.is_empty()),
            position: position.filter(|p| !p.is_empty()),
        }
    }

    /// Whether both inputs are absent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.city.is_none() && self.position.is_none()
    }

    /// Query pairs for the list request, present inputs only.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::new();
        if let Some(city) = self.city.as_deref() {
            pairs.push(("city", city));
        }
        if let Some(position) = self.position.as_deref() {
            pairs.push(("position", position));
        }
        pairs
    }
}

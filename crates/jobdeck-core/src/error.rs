//! Error types and result alias for jobdeck.
//!
//! Two failure classes exist, mirroring the API contract: transport/parse
//! failures (the request never produced a decodable body) and
//! application-level failures (the server answered with `success: false`
//! and an `error` string). No error is fatal to the session and nothing
//! here retries.

/// The result type used throughout jobdeck.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the job-listing API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request could not be sent or the response body could not be read.
    #[error("request failed: {message}")]
    Transport {
        /// Description of the transport failure.
        message: String,
        /// The underlying cause, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The response body was not the expected JSON shape.
    #[error("invalid response: {message}")]
    Decode {
        /// Description of what failed to decode.
        message: String,
    },

    /// The server reported a failure in the response envelope.
    ///
    /// `Display` is the server's `error` string verbatim so callers can
    /// surface it to the user unchanged.
    #[error("{message}")]
    Api {
        /// The server-provided error text.
        message: String,
    },
}

impl Error {
    /// Creates a transport error with the given message.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a transport error with a source cause.
    #[must_use]
    pub fn transport_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Transport {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a decode error with the given message.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates an application-level error carrying the server's text.
    #[must_use]
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Builds the failure for an envelope whose `success` flag was unset.
    ///
    /// A missing `error` field still yields a usable message; the envelope
    /// is treated as a failure either way.
    #[must_use]
    pub fn from_envelope(error: Option<String>) -> Self {
        Self::api(error.unwrap_or_else(|| "unknown error".to_owned()))
    }

    /// Whether this is an application-level (`success: false`) failure.
    #[must_use]
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}

use thiserror::Error;

/// Failure of a single provider lookup.
///
/// The widget never shows these to the user directly; every variant collapses
/// to the same generic message.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The request could not be sent or the body could not be read.
    #[error("request to {provider} failed: {source}")]
    Request {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The provider answered with a non-success status.
    #[error("{provider} request failed with status {status}: {body}")]
    Status {
        provider: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    /// The body was not the JSON shape we expect.
    #[error("failed to parse {provider} response: {source}")]
    Parse {
        provider: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl WeatherError {
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

use thiserror::Error;

/// Errors returned by [`CatApiClient`](super::CatApiClient).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid API URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("API key contains characters that cannot be sent in a header")]
    InvalidApiKey,

    #[error("Failed to build HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: u16 },

    #[error("Failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// Short message for display in the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::InvalidUrl { .. } | ApiError::InvalidApiKey | ApiError::Client { .. } => {
                "API client is misconfigured"
            }
            ApiError::Transport { .. } => "Could not reach the image API",
            ApiError::Status { status, .. } if *status == 401 || *status == 403 => {
                "The image API rejected the API key"
            }
            ApiError::Status { .. } => "The image API returned an error",
            ApiError::Decode { .. } => "The image API sent an unexpected response",
        }
    }
}

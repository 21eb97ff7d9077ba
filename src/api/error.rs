use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("failed to build HTTP client")]
    Build(#[source] reqwest::Error),

    #[error("base URL cannot take a path: {url}")]
    BaseUrl { url: String },

    #[error("request to {endpoint} failed")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned HTTP {status}")]
    Status {
        endpoint: String,
        status: StatusCode,
    },

    #[error("failed to parse response from {endpoint}")]
    Parse {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{endpoint} rejected the request: {message}")]
    Rejected { endpoint: String, message: String },
}

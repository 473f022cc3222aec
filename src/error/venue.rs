use thiserror::Error;

#[derive(Debug, Error)]
pub enum VenueError {
    #[error("Invalid venue base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Venue base URL '{url}' cannot carry path segments.")]
    BaseUrlNotHierarchical { url: String },
    #[error("Failed to build HTTP client: {source}")]
    BuildClient {
        #[source]
        source: reqwest::Error,
    },
    #[error("Venue request failed: {source}")]
    Request {
        #[source]
        source: reqwest::Error,
    },
}

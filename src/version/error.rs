use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("Invalid version regex {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Version regex {pattern:?} must have exactly one capture group, found {found}")]
    CaptureGroupCount { pattern: String, found: usize },

    #[error("Not a repository URL: {0}")]
    InvalidSourceUrl(String),

    #[error("No release found")]
    NoReleaseFound,

    #[error("Malformed release feed: {0}")]
    MalformedFeed(String),

    #[error("Release feed not found: {0}")]
    NotFound(String),

    #[error("Rate limited: retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to parse release feed: {0}")]
    Feed(#[from] feed_rs::parser::ParseFeedError),
}

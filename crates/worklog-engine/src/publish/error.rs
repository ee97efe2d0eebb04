use crate::page_id::PageIdError;

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("Workspace integration token is not configured")]
    MissingToken,
    #[error(transparent)]
    InvalidPageReference(#[from] PageIdError),
    #[error("Invalid proxy URL '{proxy}': {source}")]
    InvalidProxy {
        proxy: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    #[error(
        "Cannot reach the workspace service at {endpoint}: {source}. Check the network or proxy settings"
    )]
    Unreachable {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Workspace API rejected the request ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("Failed to decode workspace API response: {0}")]
    Decode(String),
}

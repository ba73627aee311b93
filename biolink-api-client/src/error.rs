use reqwest::StatusCode;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Base URL can't have a path: {url}")]
    InvalidBaseUrl { url: Url },

    #[error("Request failed")]
    Request(#[from] reqwest::Error),

    #[error("Request to {url} returned {status_code}")]
    Status { url: Url, status_code: StatusCode },

    #[error("Could not decode response from {url}")]
    Decode {
        url: Url,
        #[source]
        error: serde_json::Error,
    },
}

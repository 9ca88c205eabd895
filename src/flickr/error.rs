use reqwest::StatusCode;
use thiserror::Error;

/// Failure taxonomy for a single photo grab.
///
/// Transport-level failures (`Transport`, `Status`) stay distinct from
/// payload-level ones (`MalformedJson`, `UnexpectedStatus`, `MissingField`,
/// `EmptyGallery`). Every variant is terminal for its request.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing or invalid API key")]
    InvalidApiKey,

    #[error("Failed to reach the endpoint")]
    Transport(#[source] reqwest::Error),

    #[error("HTTP error {0}")]
    Status(StatusCode),

    #[error("Response body is not valid JSON")]
    MalformedJson(#[source] serde_json::Error),

    #[error("Endpoint reported status {0:?} instead of \"ok\"")]
    UnexpectedStatus(String),

    #[error("Response has no usable `{0}` field")]
    MissingField(&'static str),

    #[error("The gallery contains no photos")]
    EmptyGallery,
}

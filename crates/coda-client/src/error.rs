use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong talking to the API. All variants are fatal
/// to the current request; nothing is retried internally.
#[derive(Debug, Error)]
pub enum Error {
    /// Non-2xx response, captured before any body streaming begins.
    #[error("API error ({status}): {status_text}")]
    HttpStatus {
        status: StatusCode,
        status_text: String,
        body: String,
    },

    /// A streaming endpoint answered without a body to read.
    #[error("streaming response has no body")]
    MissingBody,

    /// The transport failed mid-read; no partial data is returned.
    #[error("stream read failed")]
    StreamRead(#[source] reqwest::Error),

    /// A `data:` line carried invalid JSON. Fails the whole parse.
    #[error("malformed event payload")]
    MalformedEvent(#[source] serde_json::Error),

    #[error("request failed")]
    Http(#[from] reqwest::Error),

    #[error("missing environment variable {0}")]
    Config(&'static str),

    #[error("access token is not a valid header value")]
    InvalidAccessToken,

    #[error("unexpected API response: {0}")]
    UnexpectedResponse(String),
}

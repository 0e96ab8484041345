use futures::StreamExt;
use reqwest::Response;

use crate::error::{Error, Result};

/// Read a streaming response body to completion, appending each decoded
/// chunk to a single buffer. Parsing never starts before the transport
/// signals completion.
///
/// `on_chunk` runs once per received chunk with its byte length; callers use
/// it for progress markers. A non-2xx status fails with
/// [`Error::HttpStatus`] before any read begins, and a mid-read transport
/// failure returns [`Error::StreamRead`] with no partial data.
pub async fn read_event_stream(
    response: Response,
    mut on_chunk: impl FnMut(usize),
) -> Result<String> {
    let status = response.status();
    if !status.is_success() {
        let status_text = status.canonical_reason().unwrap_or("unknown").to_string();
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(%status, "search stream request failed");
        return Err(Error::HttpStatus {
            status,
            status_text,
            body,
        });
    }

    if response.content_length() == Some(0) {
        return Err(Error::MissingBody);
    }

    let mut stream = response.bytes_stream();
    let mut buffer = String::new();

    while let Some(chunk) = stream.next().await {
        let bytes = chunk.map_err(Error::StreamRead)?;
        on_chunk(bytes.len());
        buffer.push_str(&String::from_utf8_lossy(&bytes));
    }

    Ok(buffer)
}

use serde_json::Value;

use crate::error::{Error, Result};

/// One blank-line-delimited block of an event stream: a name plus a
/// JSON-decoded payload.
#[derive(Debug, Clone, PartialEq)]
pub struct SseEvent {
    pub event: String,
    pub data: Value,
}

impl SseEvent {
    pub fn new(event: impl Into<String>, data: Value) -> Self {
        Self {
            event: event.into(),
            data,
        }
    }
}

/// Parse a fully-buffered `text/event-stream` body into discrete events.
///
/// Lines are split on `'\n'` only; `\r\n` input is not normalized. A block
/// is emitted at a blank line only when both an `event:` and a `data:` line
/// have been seen since the last emission; otherwise the partial record is
/// silently discarded. A complete record still pending at end of buffer is
/// flushed. Invalid JSON on any `data:` line fails the whole parse with
/// [`Error::MalformedEvent`].
pub fn parse_events(buffer: &str) -> Result<Vec<SseEvent>> {
    let mut events = Vec::new();
    let mut name: Option<String> = None;
    let mut data: Option<Value> = None;

    for line in buffer.split('\n') {
        if let Some(rest) = line.strip_prefix("event:") {
            name = Some(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix("data:") {
            data = Some(serde_json::from_str(rest.trim()).map_err(Error::MalformedEvent)?);
        } else if line.is_empty() {
            // take() clears both fields either way, so an incomplete
            // record is dropped without emitting.
            if let (Some(event), Some(data)) = (name.take(), data.take()) {
                events.push(SseEvent { event, data });
            }
        }
    }

    // Stream ended without a trailing blank line.
    if let (Some(event), Some(data)) = (name, data) {
        events.push(SseEvent { event, data });
    }

    Ok(events)
}

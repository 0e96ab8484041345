//! Buffered consumption of the streaming commit-search endpoint.
//!
//! Three stages, run strictly in sequence: [`read_event_stream`] buffers the
//! whole `text/event-stream` body, [`parse_events`] splits it into named
//! events with JSON payloads, and [`collect_commit_matches`] flattens the
//! `matches` events into [`CommitSearchResult`] records.

mod parser;
mod reader;

pub use parser::{parse_events, SseEvent};
pub use reader::read_event_stream;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::types::CommitSearchResult;

/// Flatten `matches` events into commit records.
///
/// Events with any other name (progress, filters, done, ...) are skipped
/// entirely, and elements whose `type` is not the literal `"commit"` are
/// dropped. Order is preserved and duplicates are kept.
pub fn collect_commit_matches(events: &[SseEvent]) -> Result<Vec<CommitSearchResult>> {
    let mut results = Vec::new();

    for event in events.iter().filter(|e| e.event == "matches") {
        let Some(items) = event.data.as_array() else {
            tracing::warn!("skipping matches event with non-array payload");
            continue;
        };

        for item in items {
            if item.get("type").and_then(Value::as_str) == Some("commit") {
                let record: CommitSearchResult =
                    serde_json::from_value(item.clone()).map_err(Error::MalformedEvent)?;
                results.push(record);
            }
        }
    }

    Ok(results)
}

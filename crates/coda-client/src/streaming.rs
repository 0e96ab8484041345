use std::collections::VecDeque;
use std::pin::Pin;

use futures::{Stream, StreamExt};
use reqwest::Response;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One event from the streaming completions endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamEvent {
    /// Cumulative completion text observed so far. Each event carries the
    /// full text, not a delta.
    Completion {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        stop_reason: Option<String>,
    },

    Done,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompletionChunk {
    completion: String,
    #[serde(default)]
    stop_reason: Option<String>,
}

/// Parse the `event:`/`data:` lines of a streaming completion response
/// incrementally, yielding an event per `data:` payload and [`StreamEvent::Done`]
/// when the server signals the end of the stream.
pub fn parse_completion_stream(
    response: Response,
) -> Pin<Box<dyn Stream<Item = Result<StreamEvent>> + Send>> {
    let stream = response.bytes_stream();

    Box::pin(async_stream::stream! {
        let mut byte_chunks = Box::pin(stream);
        let mut buffer: VecDeque<u8> = VecDeque::with_capacity(8192);
        let mut current_event: Option<String> = None;

        'read: while let Some(chunk_result) = byte_chunks.next().await {
            match chunk_result {
                Ok(bytes) => {
                    buffer.extend(bytes);

                    while let Some(newline_pos) = buffer.iter().position(|&b| b == b'\n') {
                        let line_bytes: Vec<u8> = buffer.drain(..=newline_pos).collect();

                        let Ok(line_str) = std::str::from_utf8(&line_bytes) else {
                            continue;
                        };
                        let line = line_str.trim();

                        if line.is_empty() {
                            continue;
                        }

                        if let Some(name) = line.strip_prefix("event:") {
                            current_event = Some(name.trim().to_string());
                            continue;
                        }

                        if let Some(data) = line.strip_prefix("data:") {
                            let data = data.trim();

                            if current_event.as_deref() == Some("done") || data == "[DONE]" {
                                yield Ok(StreamEvent::Done);
                                break 'read;
                            }

                            if current_event.as_deref() == Some("error") {
                                yield Err(Error::UnexpectedResponse(data.to_string()));
                                continue;
                            }

                            match serde_json::from_str::<CompletionChunk>(data) {
                                Ok(chunk) => yield Ok(StreamEvent::Completion {
                                    text: chunk.completion,
                                    stop_reason: chunk.stop_reason,
                                }),
                                Err(e) => yield Err(Error::MalformedEvent(e)),
                            }
                        }
                    }
                }
                Err(e) => yield Err(Error::StreamRead(e)),
            }
        }
    })
}

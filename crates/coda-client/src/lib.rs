//! Async client for the Coda code-intelligence / LLM chat API.
//!
//! Covers the five API surfaces: models listing, non-streaming chat
//! completions, streaming completions (server-sent events), context
//! retrieval, and the streaming commit-search endpoint whose `matches`
//! events are flattened into [`CommitSearchResult`] records.

pub mod client;
pub mod config;
pub mod error;
pub mod search_stream;
pub mod streaming;
pub mod types;

pub use client::CodaClient;
pub use config::{CodaConfig, DEFAULT_MODEL};
pub use error::{Error, Result};
pub use search_stream::{collect_commit_matches, parse_events, read_event_stream, SseEvent};
pub use streaming::StreamEvent;
pub use types::{
    ChatOptions, ChatRequest, ChatResponse, CommitSearchResult, CompletionRequest, ContextRequest,
    ContextResult, Message, Model, Speaker, SpeakerMessage,
};

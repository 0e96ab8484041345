pub mod chat;
pub mod context;
pub mod message;
pub mod model;
pub mod search;

pub use chat::{ChatOptions, ChatRequest, ChatResponse, Choice, CompletionRequest, ResponseMessage, Usage};
pub use context::{
    format_context, Blob, CommitRef, ContextRequest, ContextResponse, ContextResult, RepoRef,
    RepoSpec,
};
pub use message::{Message, Speaker, SpeakerMessage};
pub use model::{Model, ModelList};
pub use search::CommitSearchResult;

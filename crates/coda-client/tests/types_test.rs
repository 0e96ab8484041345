use coda_client::types::{format_context, ContextResult};
use coda_client::{
    ChatResponse, CommitSearchResult, ContextRequest, Message, Model, Speaker, SpeakerMessage,
};

#[test]
fn test_message_roles() {
    assert_eq!(Message::system("be brief").role(), "system");
    assert_eq!(Message::human("hello").role(), "user");
    assert_eq!(Message::ai("hi").role(), "assistant");
}

#[test]
fn test_message_serialization() {
    let json = serde_json::to_string(&Message::human("Hello")).unwrap();
    assert!(json.contains("\"role\":\"user\""));
    assert!(json.contains("Hello"));
}

#[test]
fn test_speaker_message_serialization() {
    let json = serde_json::to_string(&SpeakerMessage::human("Tell me a joke")).unwrap();
    assert!(json.contains("\"speaker\":\"human\""));
    assert!(json.contains("\"text\":\"Tell me a joke\""));
}

#[test]
fn test_speaker_message_constructors() {
    assert_eq!(SpeakerMessage::human("q").speaker, Speaker::Human);
    assert_eq!(SpeakerMessage::assistant("a").speaker, Speaker::Assistant);
}

#[test]
fn test_model_list_deserialization() {
    let json = r#"{"object":"list","data":[
        {"id":"anthropic::2023-06-01::claude-3.5-sonnet","object":"model"},
        {"id":"openai::2024-02-01::gpt-4o"}
    ]}"#;

    let list: coda_client::types::ModelList = serde_json::from_str(json).unwrap();
    assert_eq!(list.data.len(), 2);
    assert_eq!(list.data[0].id, "anthropic::2023-06-01::claude-3.5-sonnet");
}

#[test]
fn test_model_round_trip() {
    let model = Model {
        id: "openai::2024-02-01::gpt-4o".to_string(),
        object: Some("model".to_string()),
        created: None,
        owned_by: None,
    };
    let json = serde_json::to_string(&model).unwrap();
    assert!(!json.contains("created"));
    let back: Model = serde_json::from_str(&json).unwrap();
    assert_eq!(back.id, model.id);
}

#[test]
fn test_chat_response_text() {
    let json = r#"{
        "choices": [{"index": 0, "message": {"role": "assistant", "content": "Tuesday"}, "finish_reason": "stop"}],
        "usage": {"prompt_tokens": 12, "completion_tokens": 1, "total_tokens": 13}
    }"#;

    let response: ChatResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.text(), Some("Tuesday"));
    assert_eq!(response.usage.unwrap().total_tokens, 13);
}

#[test]
fn test_chat_response_without_choices() {
    let response: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
    assert_eq!(response.text(), None);
}

#[test]
fn test_context_request_wire_shape() {
    let request = ContextRequest::new(["gitlab.com/acme/widget"], "What is this repo about?")
        .code_results_count(10);

    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("\"codeResultsCount\":10"));
    assert!(json.contains("\"textResultsCount\":5"));
    assert!(json.contains("\"name\":\"gitlab.com/acme/widget\""));
}

#[test]
fn test_context_result_and_formatting() {
    let json = r#"{
        "blob": {"path": "src/auth.rs", "repository": {"name": "acme/widget"}, "commit": {"oid": "abc"}},
        "startLine": 10,
        "endLine": 20,
        "chunkContent": "fn verify_token() {}"
    }"#;

    let result: ContextResult = serde_json::from_str(json).unwrap();
    let block = format_context(std::slice::from_ref(&result));

    assert!(block.starts_with("<context>"));
    assert!(block.contains("<file>src/auth.rs:10-20</file>"));
    assert!(block.contains("<chunk>fn verify_token() {}</chunk>"));
    assert!(block.ends_with("</context>"));
}

#[test]
fn test_commit_search_result_deserialization() {
    let json = r#"{
        "type": "commit",
        "label": "acme/widget · deadbeef",
        "url": "/acme/widget/-/commit/deadbeef",
        "detail": "3 files changed",
        "repositoryID": 42,
        "repository": "acme/widget",
        "externalServiceType": "github",
        "oid": "deadbeef",
        "message": "fix: stop dropping trailing events",
        "authorName": "Ada",
        "authorDate": "2024-05-01T12:00:00Z",
        "committerName": "Ada",
        "committerDate": "2024-05-01T12:05:00Z",
        "repoStars": 7,
        "repoLastFetched": "2024-05-02T00:00:00Z",
        "content": "diff --git a/src/lib.rs b/src/lib.rs"
    }"#;

    let result: CommitSearchResult = serde_json::from_str(json).unwrap();

    assert_eq!(result.result_type, "commit");
    assert_eq!(result.repository_id, Some(42));
    assert_eq!(result.oid.as_deref(), Some("deadbeef"));
    assert_eq!(result.repo_stars, Some(7));
    assert!(result.author_date.is_some());
    assert!(result.content.as_deref().unwrap().starts_with("diff --git"));
}

#[test]
fn test_commit_search_result_sparse_payload() {
    let result: CommitSearchResult =
        serde_json::from_str(r#"{"type": "commit", "oid": "abc"}"#).unwrap();

    assert_eq!(result.result_type, "commit");
    assert_eq!(result.oid.as_deref(), Some("abc"));
    assert!(result.message.is_none());
    assert!(result.author_date.is_none());
}

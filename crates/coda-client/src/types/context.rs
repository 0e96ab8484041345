use serde::{Deserialize, Serialize};

/// Request for the context retrieval endpoint: natural-language query over a
/// set of repositories.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextRequest {
    pub repos: Vec<RepoSpec>,
    pub query: String,
    /// Number of results drawn from source code, 0..=100.
    pub code_results_count: u32,
    /// Number of results drawn from text sources like Markdown, 0..=100.
    pub text_results_count: u32,
}

impl ContextRequest {
    pub fn new<I, S>(repos: I, query: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            repos: repos
                .into_iter()
                .map(|name| RepoSpec { name: name.into() })
                .collect(),
            query: query.into(),
            code_results_count: 15,
            text_results_count: 5,
        }
    }

    pub fn code_results_count(mut self, count: u32) -> Self {
        self.code_results_count = count;
        self
    }

    pub fn text_results_count(mut self, count: u32) -> Self {
        self.text_results_count = count;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoSpec {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContextResponse {
    pub results: Vec<ContextResult>,
}

/// One source-code location relevant to a context query.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextResult {
    pub blob: Blob,
    pub start_line: u32,
    pub end_line: u32,
    pub chunk_content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blob {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<RepoRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<CommitRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitRef {
    pub oid: String,
}

/// Render context results as the `<context>` prompt block the chat endpoint
/// expects to see ahead of the user's query.
pub fn format_context(results: &[ContextResult]) -> String {
    let mut parts = vec!["<context>".to_string()];
    for result in results {
        parts.push("<item>".to_string());
        parts.push(format!(
            "<file>{}:{}-{}</file>",
            result.blob.path, result.start_line, result.end_line
        ));
        parts.push(format!("<chunk>{}</chunk>", result.chunk_content));
        parts.push("</item>".to_string());
    }
    parts.push("</context>".to_string());
    parts.join("\n")
}

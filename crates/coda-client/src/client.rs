use std::pin::Pin;

use futures::{Stream, StreamExt};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};

use crate::config::{CodaConfig, API_VERSION, CLIENT_NAME, CLIENT_VERSION};
use crate::error::{Error, Result};
use crate::search_stream::{collect_commit_matches, parse_events, read_event_stream};
use crate::streaming::{parse_completion_stream, StreamEvent};
use crate::types::{
    ChatRequest, ChatResponse, CommitSearchResult, CompletionRequest, ContextRequest,
    ContextResponse, ContextResult, Model, ModelList,
};

/// Client for the Coda HTTP API (direct HTTP, no SDK).
///
/// Holds one `reqwest::Client` with the authorization and content-type
/// headers baked in; cheap to clone, safe to share across concurrent flows.
#[derive(Clone)]
pub struct CodaClient {
    http_client: reqwest::Client,
    config: CodaConfig,
}

impl CodaClient {
    pub fn new(config: CodaConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("token {}", config.access_token))
                .map_err(|_| Error::InvalidAccessToken)?,
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("{}/{}", CLIENT_NAME, CLIENT_VERSION))
                .map_err(|_| Error::InvalidAccessToken)?,
        );

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Build a client from `CODA_ENDPOINT` and `CODA_ACCESS_TOKEN`.
    pub fn from_env() -> Result<Self> {
        Self::new(CodaConfig::from_env()?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.endpoint, path)
    }

    /// Turn a non-2xx response into [`Error::HttpStatus`], capturing the body.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let status_text = status.canonical_reason().unwrap_or("unknown").to_string();
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(%status, "API request failed");
        Err(Error::HttpStatus {
            status,
            status_text,
            body,
        })
    }

    /// List the models available to this endpoint.
    pub async fn models(&self) -> Result<Vec<Model>> {
        let response = self
            .http_client
            .get(self.url("/.api/llm/models"))
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let list: ModelList = response.json().await?;
        Ok(list.data)
    }

    /// Non-streaming chat completion.
    pub async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        tracing::debug!(model = %request.model, "sending chat completion request");
        let mut payload = serde_json::json!({
            "model": request.model,
            "messages": request.messages,
            "stream": false,
            "max_tokens": request.options.max_tokens,
        });
        if let Some(temp) = request.options.temperature {
            payload
                .as_object_mut()
                .expect("payload is an object")
                .insert("temperature".to_string(), serde_json::json!(temp));
        }

        let response = self
            .http_client
            .post(self.url("/.api/llm/chat/completions"))
            .json(&payload)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Streaming completion, yielding cumulative snapshots as they arrive.
    pub async fn completion_stream(
        &self,
        request: CompletionRequest,
    ) -> Result<Pin<Box<dyn Stream<Item = Result<StreamEvent>> + Send>>> {
        tracing::debug!(model = %request.model, "opening completion stream");
        let mut payload = serde_json::json!({
            "model": request.model,
            "messages": request.messages,
            "maxTokensToSample": request.max_tokens_to_sample,
            "stream": true,
        });
        if let Some(temp) = request.temperature {
            payload
                .as_object_mut()
                .expect("payload is an object")
                .insert("temperature".to_string(), serde_json::json!(temp));
        }

        let response = self
            .http_client
            .post(self.url("/.api/completions/stream"))
            .query(&[
                ("api-version", API_VERSION),
                ("client-name", CLIENT_NAME),
                ("client-version", CLIENT_VERSION),
            ])
            .json(&payload)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        Ok(parse_completion_stream(response))
    }

    /// Drain a completion stream and return the final completion text.
    pub async fn completion(&self, request: CompletionRequest) -> Result<String> {
        let mut stream = self.completion_stream(request).await?;
        let mut last = None;

        while let Some(event) = stream.next().await {
            match event? {
                StreamEvent::Completion { text, .. } => last = Some(text),
                StreamEvent::Done => break,
            }
        }

        last.ok_or_else(|| {
            Error::UnexpectedResponse("stream ended without a completion event".to_string())
        })
    }

    /// Source-code locations relevant to a natural-language query.
    pub async fn context(&self, request: ContextRequest) -> Result<Vec<ContextResult>> {
        let response = self
            .http_client
            .post(self.url("/.api/cody/context"))
            .json(&request)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let body: ContextResponse = response.json().await?;
        Ok(body.results)
    }

    /// Run a streaming search and return the commit matches.
    ///
    /// The whole `text/event-stream` body is buffered before parsing; with
    /// `show_progress` set, one marker per received chunk goes to stderr.
    pub async fn search_commits(
        &self,
        query: &str,
        context_lines: u32,
    ) -> Result<Vec<CommitSearchResult>> {
        tracing::debug!(query, context_lines, "starting commit search stream");
        let response = self
            .http_client
            .get(self.url("/.api/search/stream"))
            .header(ACCEPT, "text/event-stream")
            .query(&[("q", query), ("cl", &context_lines.to_string())])
            .send()
            .await?;

        let buffer = if self.config.show_progress {
            let buffer = read_event_stream(response, |_| eprint!(".")).await?;
            eprintln!();
            buffer
        } else {
            read_event_stream(response, |_| {}).await?
        };

        let events = parse_events(&buffer)?;
        collect_commit_matches(&events)
    }
}

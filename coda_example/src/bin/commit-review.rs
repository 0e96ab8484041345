//! Search for commits and ask the chat API to review each diff.
//!
//! A failed review is logged and skipped so one bad commit does not abort
//! the rest of the batch.

use anyhow::Result;
use clap::Parser;
use coda_client::{ChatRequest, CodaClient, CodaConfig, Message, DEFAULT_MODEL};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "commit-review", about = "Review commits matching a search query")]
struct Args {
    /// Search query, e.g. "repo:acme/widget type:commit after:yesterday"
    #[arg(long)]
    query: String,

    /// Context lines around each diff hunk
    #[arg(long, default_value_t = 3)]
    context_lines: u32,

    /// Model used for the reviews
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = CodaConfig::from_env()?.with_progress(true);
    let client = CodaClient::new(config)?;

    let commits = client
        .search_commits(&args.query, args.context_lines)
        .await?;
    tracing::info!(count = commits.len(), "commits matched");

    for commit in commits {
        let oid = commit.oid.clone().unwrap_or_default();
        let diff = match commit.content.as_deref() {
            Some(diff) => diff.to_string(),
            None => {
                tracing::warn!(%oid, "commit match has no diff content, skipping");
                continue;
            }
        };

        let prompt = format!(
            "Review the following commit diff. Summarize what changed and point \
             out anything risky in at most five sentences.\n\n\
             Commit: {}\nMessage: {}\n\n{}",
            oid,
            commit.message.as_deref().unwrap_or(""),
            diff,
        );

        let request = ChatRequest::new(&args.model, vec![Message::human(prompt)]);
        match client.chat(request).await {
            Ok(response) => {
                println!("== {}\n{}\n", oid, response.text().unwrap_or_default());
            }
            Err(e) => tracing::warn!(%oid, error = %e, "review failed, skipping commit"),
        }
    }

    Ok(())
}

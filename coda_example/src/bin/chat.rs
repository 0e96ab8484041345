//! One-shot chat with optional repository context.

use anyhow::Result;
use clap::Parser;
use coda_client::types::format_context;
use coda_client::{CodaClient, CompletionRequest, ContextRequest, DEFAULT_MODEL};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "chat", about = "Ask a question, optionally grounded in repository context")]
struct Args {
    /// The message to send
    #[arg(long)]
    message: String,

    /// Repository to pull context from (repeatable)
    #[arg(long = "context-repo")]
    context_repos: Vec<String>,

    /// Model to ask
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
    let client = CodaClient::from_env()?;

    let prompt = if args.context_repos.is_empty() {
        args.message.clone()
    } else {
        let request = ContextRequest::new(args.context_repos.clone(), &args.message);
        let results = client.context(request).await?;
        tracing::info!(count = results.len(), "context results retrieved");
        format!(
            "You are a helpful assistant.\n\
             You are given the following context:\n{}\n\
             You are also given the following query:\n{}\n\
             Answer the query based on the context.",
            format_context(&results),
            args.message,
        )
    };

    let answer = client
        .completion(CompletionRequest::query(&args.model, prompt))
        .await?;
    println!("{}", answer);

    Ok(())
}

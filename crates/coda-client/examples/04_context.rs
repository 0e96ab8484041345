use anyhow::Result;
use coda_client::types::format_context;
use coda_client::{CodaClient, ContextRequest};

#[tokio::main]
async fn main() -> Result<()> {
    let client = CodaClient::from_env()?;

    let request = ContextRequest::new(
        ["github.com/acme/widget"],
        "How does request authentication work?",
    );

    let results = client.context(request).await?;
    println!("{}", format_context(&results));

    Ok(())
}

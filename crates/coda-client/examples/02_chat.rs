use anyhow::Result;
use coda_client::{ChatRequest, CodaClient, Message, DEFAULT_MODEL};

#[tokio::main]
async fn main() -> Result<()> {
    let client = CodaClient::from_env()?;

    let request = ChatRequest::new(
        DEFAULT_MODEL,
        vec![Message::human("What is the capital of France?")],
    );

    let response = client.chat(request).await?;
    println!("Response: {}", response.text().unwrap_or_default());

    if let Some(usage) = response.usage {
        println!("Tokens used: {}", usage.total_tokens);
    }

    Ok(())
}

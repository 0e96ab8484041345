use std::io::Write;

use anyhow::Result;
use coda_client::{CodaClient, CompletionRequest, StreamEvent, DEFAULT_MODEL};
use futures::StreamExt;

#[tokio::main]
async fn main() -> Result<()> {
    let client = CodaClient::from_env()?;

    let request = CompletionRequest::query(DEFAULT_MODEL, "Tell me a joke about version control.");
    let mut stream = client.completion_stream(request).await?;

    // Each event carries the full text so far, so print only the new tail.
    let mut printed = 0;
    while let Some(event) = stream.next().await {
        match event? {
            StreamEvent::Completion { text, .. } => {
                if text.len() > printed {
                    print!("{}", &text[printed..]);
                    std::io::stdout().flush()?;
                    printed = text.len();
                }
            }
            StreamEvent::Done => break,
        }
    }
    println!();

    Ok(())
}

use anyhow::Result;
use coda_client::CodaClient;

#[tokio::main]
async fn main() -> Result<()> {
    let client = CodaClient::from_env()?;

    for model in client.models().await? {
        println!("{}", model.id);
    }

    Ok(())
}

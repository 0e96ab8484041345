use anyhow::Result;
use coda_client::{CodaClient, CodaConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = CodaConfig::from_env()?.with_progress(true);
    let client = CodaClient::new(config)?;

    let commits = client
        .search_commits("repo:acme/widget type:commit fix", 3)
        .await?;

    for commit in commits {
        println!(
            "{} {}",
            commit.oid.as_deref().unwrap_or("<unknown>"),
            commit.message.as_deref().unwrap_or("").lines().next().unwrap_or("")
        );
    }

    Ok(())
}

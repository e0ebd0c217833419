use anyhow::Result;
use eventboard::Config;
use eventboard_db::JsonStore;

/// Deletes both data files so the next start begins empty.
#[tracing::instrument(skip(config))]
pub async fn reset(config: Config) -> Result<()> {
    tracing::info!("Resetting data files...");

    JsonStore::destroy(&config.storage.users_path, &config.storage.events_path).await?;

    tracing::info!("Reset complete");

    Ok(())
}

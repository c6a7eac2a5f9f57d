use admin_settings::{merge, Config, Database, SettingsStore};
use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::load()?;
    let db = Database::connect(&config.connection.to_connection_string()).await?;
    let schema = db.introspect(&config.schema).await?;

    let mut store = SettingsStore::load()?;
    merge::refresh(&mut store.tables, &schema, config.column_settings.as_ref())?;
    store.mark_refreshed();
    store.save()?;

    info!(
        tables = store.tables.len(),
        path = %SettingsStore::save_path()?.display(),
        "admin settings refreshed"
    );

    Ok(())
}

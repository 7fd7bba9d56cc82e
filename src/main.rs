//! Staff ledger HTTP server.

use staff_ledger::api::{AppState, create_router};
use staff_ledger::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

const CONFIG_ENV: &str = "STAFF_LEDGER_CONFIG";
const DEFAULT_CONFIG_DIR: &str = "./config/default";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = ConfigLoader::load(&config_dir)?;
    let bind_address = config.bind_address().to_string();

    info!(
        config_dir = %config_dir,
        display_currency = %config.display_currency(),
        rates = config.default_rates().len(),
        "Loaded configuration"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!(address = %bind_address, "Listening");
    axum::serve(listener, router).await?;

    Ok(())
}

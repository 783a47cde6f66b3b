//! Phone Detector Bot - main entry point.

use anyhow::Result;
use phone_detector_bot::grammar::{LibPhoneGrammar, PhoneGrammar};
use phone_detector_bot::services::{GuessConfig, PhoneService};
use phone_detector_bot::{bot, http, Config};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(environment = %config.environment, "Starting phone detector bot");

    let grammar: Arc<dyn PhoneGrammar> = Arc::new(LibPhoneGrammar::new());
    let service = Arc::new(PhoneService::new(grammar, GuessConfig::default()));

    let health_port = config.health_port;
    tokio::spawn(async move {
        if let Err(e) = http::run_health_server(health_port).await {
            warn!("health endpoint unavailable: {}", e);
        }
    });

    bot::run_bot(&config, service).await?;

    info!("Shutdown complete");
    Ok(())
}

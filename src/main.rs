use anyhow::Result;
use judgment_relay::{config, server};
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level.parse::<LevelFilter>().map_err(|_| {
        anyhow::anyhow!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            level
        )
    })?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // RUST_LOG takes precedence over the configured level
    let filter = match std::env::var("RUST_LOG") {
        Ok(directives) => EnvFilter::try_new(&directives).map_err(|e| {
            anyhow::anyhow!("Invalid RUST_LOG value '{}': {}", directives, e)
        }),
        Err(_) => validate_log_level(&config.server.logs.level)
            .map(|_| EnvFilter::new(&config.server.logs.level)),
    };

    let filter = match filter {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    info!("Starting judgment relay on port {}", config.server.port);

    server::run(config).await?;

    Ok(())
}

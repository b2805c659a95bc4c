//! SIFT Daemon - multi-domain risk analysis service
//!
//! The daemon provides:
//! - REST API for text/image/video/comprehensive analysis
//! - A single orchestration path from request to bounded risk verdict
//! - Structured logging with optional JSON output

use anyhow::Context;
use clap::Parser;
use sift_daemon::{DaemonConfig, Server};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// SIFT Daemon CLI
#[derive(Parser)]
#[command(name = "siftd")]
#[command(about = "SIFT Daemon - multi-domain risk analysis service", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "SIFT_CONFIG")]
    config: Option<String>,

    /// Listen address override
    #[arg(short, long, env = "SIFT_LISTEN_ADDR")]
    listen: Option<String>,

    /// Log level
    #[arg(long, env = "SIFT_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Enable JSON logging
    #[arg(long, env = "SIFT_LOG_JSON")]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| cli.log_level.clone().into());

    if cli.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    let mut config =
        DaemonConfig::load(cli.config.as_deref()).context("failed to load configuration")?;

    if let Some(listen) = &cli.listen {
        config.server.listen_addr = listen
            .parse()
            .with_context(|| format!("invalid listen address: {listen}"))?;
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        listen = %config.server.listen_addr,
        "starting SIFT daemon"
    );

    Server::new(config).run().await?;
    Ok(())
}

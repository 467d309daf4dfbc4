use std::sync::Arc;

use anyhow::Context;
use tinyhttp::config::Config;
use tinyhttp::handler::Handler;
use tinyhttp::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()>{
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load().context("failed to load configuration")?;
    tracing::info!(files_dir = %cfg.files_dir.display(), "Serving files");

    let handler = Arc::new(Handler::with_root(cfg.files_dir.clone()));

    tokio::select! {
        res = server::listener::run(&cfg, handler) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::handler::Handler;
use crate::http::connection::{Connection, ConnectionLimits};

/// Binds the configured address and serves until the accept loop fails.
pub async fn run(cfg: &Config, handler: Arc<Handler>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.listen_addr))?;
    info!("Listening on {}", cfg.listen_addr);

    serve(listener, handler, cfg.limits(), cfg.max_connections).await
}

/// Accepts connections on an already-bound listener.
///
/// A permit is taken before each accept and held by the connection task,
/// so at most `max_connections` exchanges are in flight.
pub async fn serve(
    listener: TcpListener,
    handler: Arc<Handler>,
    limits: ConnectionLimits,
    max_connections: usize,
) -> anyhow::Result<()> {
    let permits = Arc::new(Semaphore::new(max_connections));

    loop {
        let permit = permits
            .clone()
            .acquire_owned()
            .await
            .context("connection limiter closed")?;

        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!(error = %e, "Failed to accept connection");
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let handler = handler.clone();
        tokio::spawn(async move {
            let _permit = permit;
            let mut conn = Connection::new(socket, handler, limits);
            if let Err(e) = conn.run().await {
                error!(%peer, "Connection error: {:#}", e);
            }
        });
    }
}

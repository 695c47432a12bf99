//! hifz-access decision server
//!
//! Run with: cargo run --features server --bin hifz-access-server

use hifz_access::config::ServerConfig;
use hifz_access::{policy_fingerprint, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hifz_access=info,tower_http=info".into()),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let addr = config.bind_address();

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, policy = policy_fingerprint(), "hifz-access server listening");
    axum::serve(listener, server::router()).await?;
    Ok(())
}

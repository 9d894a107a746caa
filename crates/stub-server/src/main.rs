//! Stub backend for RentDesk
//!
//! Serves the rental REST contract from memory on `RENTDESK_STUB_ADDR`.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rentdesk_stub_server::{router, StubConfig, StubState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rentdesk_stub_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = StubConfig::from_env().context("Invalid stub server configuration")?;
    let addr = config.addr;
    let app = router(StubState::new(config));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Stub backend listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

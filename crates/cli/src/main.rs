//! RentDesk command-line admin client

mod cli;
mod commands;
mod render;
mod session_store;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use rentdesk_client::{login, ClientConfig, HttpRentalApi};
use rentdesk_core::RentalApi;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command};
use crate::session_store::SessionStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    "rentdesk=warn,rentdesk_core=warn,rentdesk_client=warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::new(&cli.url);
    let store = SessionStore::new(&cli.session_file);

    let output = match cli.command {
        Command::Login { username, password } => {
            let session = login(&config, &username, &password)
                .await
                .context("Login failed")?;
            store.save(&session).await?;
            format!("Hey {}\n", session.display_name())
        }
        Command::Logout => {
            store.clear().await?;
            "Logged out\n".to_string()
        }
        Command::Whoami => {
            let session = store.require_session().await?;
            format!("Hey {}\n", session.display_name())
        }
        Command::Tenants(command) => {
            commands::tenants(connect(&store, config).await?, command).await?
        }
        Command::Rooms(command) => {
            commands::rooms(connect(&store, config).await?, command).await?
        }
        Command::Board(command) => {
            commands::board(connect(&store, config).await?, command).await?
        }
        Command::Stats => commands::stats(connect(&store, config).await?).await?,
    };

    print!("{}", output);
    Ok(())
}

/// Build an API client for the stored session, or ask for a login
async fn connect(
    store: &SessionStore,
    config: ClientConfig,
) -> anyhow::Result<Arc<dyn RentalApi>> {
    let session = store.require_session().await?;
    Ok(Arc::new(HttpRentalApi::new(config, session)))
}

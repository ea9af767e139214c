//! # reflexd — reflex daemon
//!
//! Composition root that wires the adapters together and serves the
//! delivery boundary.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Construct the core management API client
//! - Fetch the initial delivery configuration category from the core
//! - Construct the configured delivery coordinator, injecting collaborators
//!   via port traits
//! - Build the axum router and serve until interrupted
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use anyhow::Context;

use config::{Config, Variant};
use reflex_adapter_fledge_http::{FledgeClient, SetPointClient};
use reflex_adapter_http_axum::router;
use reflex_adapter_http_axum::state::AppState;
use reflex_app::ports::ConfigStore;
use reflex_app::services::{ConfigUpdateDelivery, SetPointDelivery};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    let core = FledgeClient::new(config.core.base_url.clone());
    let initial = core
        .get_category(&config.delivery.category)
        .await
        .context("fetching delivery configuration category")?;

    let app = match config.delivery.variant {
        Variant::ConfigUpdate => {
            let handler = ConfigUpdateDelivery::new(core, &initial);
            router::build(AppState::new(handler))
        }
        Variant::Setpoint => {
            let handler = SetPointDelivery::new(core, SetPointClient::new(), &initial);
            router::build(AppState::new(handler))
        }
    };

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, variant = ?config.delivery.variant, "reflexd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}

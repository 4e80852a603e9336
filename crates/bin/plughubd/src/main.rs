//! # plughubd — plughub daemon
//!
//! Composition root that wires the hub together and keeps it running.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Install the `tracing` subscriber
//! - Construct the state registry, service bus and component registry
//! - Register the core services and set up each enabled component
//! - Turn on the configured startup entities
//! - Wait for Ctrl-C
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use anyhow::Context;
use plughub_adapter_virtual::VirtualIntegration;
use plughub_app::component_registry::ComponentRegistry;
use plughub_app::hub::Hub;
use plughub_app::service_bus::InProcessServiceBus;
use plughub_app::state_registry::InMemoryStateRegistry;
use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Components
    let integration = VirtualIntegration::new(config.virtual_devices.clone());
    tracing::info!(
        integration = integration.name(),
        domains = ?integration.domains(),
        "registering integration"
    );
    let registry = integration.register(ComponentRegistry::new());

    // Hub
    let states = Arc::new(InMemoryStateRegistry::new());
    let bus = Arc::new(InProcessServiceBus::default());
    let mut feed = bus.subscribe();
    let hub = Hub::new(registry, states, bus);
    hub.setup();

    for domain in &config.components.enabled {
        hub.setup_component(domain)
            .with_context(|| format!("setting up component {domain}"))?;
    }

    for entity_id in &config.startup.turn_on {
        hub.turn_on(Some(entity_id.as_str()))
            .with_context(|| format!("turning on {entity_id}"))?;
    }

    tracing::info!(
        entities = hub.states().entity_ids().len(),
        any_on = hub.any_on().context("checking entity status")?,
        "plughubd ready"
    );

    tokio::spawn(async move {
        loop {
            match feed.recv().await {
                Ok(call) => tracing::debug!(%call, "service call dispatched"),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "service call feed lagged");
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    tokio::signal::ctrl_c()
        .await
        .context("waiting for shutdown signal")?;
    tracing::info!("shutting down");

    Ok(())
}

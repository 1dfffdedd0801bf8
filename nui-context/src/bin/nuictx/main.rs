//! Entry point for the nuictx demo binary.

mod args;
mod tracing_setup;

use anyhow::{Context, Result};
use nui_context::host::MenuRegistry;

fn main() -> Result<()> {
    // Load config (nuictx.toml)
    let config = nui_context::NuiConfig::load_default().unwrap_or_else(|err| {
        eprintln!("Warning: failed to load nuictx.toml: {err}");
        eprintln!("Using default configuration");
        nui_context::NuiConfig::default()
    });

    // Set up tracing subscriber BEFORE Dioxus to prevent dioxus-logger from setting its own.
    tracing_setup::init(&config.logging);

    tracing::info!("Starting nuictx");

    let startup = args::parse_args();
    let registry = MenuRegistry::load_from(&startup.menus)
        .with_context(|| format!("cannot load menus from {}", startup.menus.display()))?;
    tracing::info!(count = registry.len(), "menus loaded");

    // The host simulation and the hover timers run on Tokio
    let runtime = tokio::runtime::Runtime::new()?;
    let _guard = runtime.enter();

    nui_context::launch(config, registry, startup.menu_id)
}

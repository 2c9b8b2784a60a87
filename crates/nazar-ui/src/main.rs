//! Nazar Maxram portal - main entry point.
//!
//! Loads `nazar.toml`, builds the portal store and starts the GPUI
//! application.

use std::path::PathBuf;
use std::sync::Arc;

use nazar_core::{config_path, load_config, AppConfig, Catalog};
use nazar_portal::PortalStore;
use nazar_ui::keymap::{config_bindings, default_bindings};
use nazar_ui::theme::ThemeSettings;
use nazar_ui::window::run_portal;

// =============================================================================
// Configuration
// =============================================================================

/// Load configuration with graceful degradation.
///
/// An explicit path argument wins over the search in `config_path`. Missing
/// or broken files fall back to defaults.
fn load_app_config() -> AppConfig {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(config_path);

    let Some(path) = path else {
        tracing::info!("No nazar.toml found - using default configuration");
        tracing::info!("Create ~/.config/nazar/nazar.toml to customize");
        return AppConfig::default();
    };

    tracing::info!("Loading config from: {}", path.display());
    match load_config(&path) {
        Ok(config) => {
            tracing::info!("Config loaded successfully");
            config
        }
        Err(e) => {
            tracing::error!("{} - continuing with defaults", e);
            AppConfig::default()
        }
    }
}

// =============================================================================
// Main
// =============================================================================

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Nazar Maxram portal");

    let config = load_app_config();

    let catalog = Catalog::builtin().unwrap_or_else(|e| {
        tracing::error!("Built-in catalog is invalid: {} - catalogs will be empty", e);
        Catalog::default()
    });
    tracing::info!(
        "Catalog: {} courses, {} teachers",
        catalog.courses.len(),
        catalog.teachers.len()
    );

    // Defaults first: GPUI resolves same-depth conflicts last-wins.
    let mut bindings = default_bindings();
    match config_bindings(&config) {
        Ok(extra) => bindings.extend(extra),
        Err(e) => tracing::warn!("Ignoring [keymap]: {}", e),
    }

    let theme = ThemeSettings::from(&config.appearance);
    let store = Arc::new(PortalStore::new(config.onboarding));

    tracing::info!("Starting GPUI application");
    run_portal(store, Arc::new(catalog), theme, bindings);
}

//! Configuration types.
//!
//! Configuration lives in `nazar.toml`. Every section is optional; a missing
//! file means defaults.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::view::View;

/// Teacher assigned when a student skips teacher selection.
pub const DEFAULT_TEACHER: &str = "Umarov Haydarali";

/// Method label of the invoice created at enrollment.
pub const PENDING_PAYMENT_METHOD: &str = "Kutilmoqda";

/// Runtime configuration read from `nazar.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Onboarding behaviour
    #[serde(default)]
    pub onboarding: OnboardingConfig,

    /// Appearance settings
    #[serde(default)]
    pub appearance: AppearanceConfig,

    /// Extra key bindings: keystroke -> view name, e.g. `"cmd+1" = "home"`
    #[serde(default)]
    pub keymap: BTreeMap<String, String>,
}

impl AppConfig {
    /// Parse configuration from TOML text.
    ///
    /// `[keymap]` view names are not checked here; a bad binding is reported
    /// by `view_bindings` and must not cost the other sections.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Resolve key bindings to views.
    pub fn view_bindings(&self) -> Result<Vec<(String, View)>, ConfigError> {
        self.keymap
            .iter()
            .map(|(key, name)| {
                name.parse::<View>()
                    .map(|view| (key.clone(), view))
                    .map_err(|source| ConfigError::InvalidBinding {
                        key: key.clone(),
                        source,
                    })
            })
            .collect()
    }
}

/// What to do when a course price label has no leading amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidPricePolicy {
    /// Record the invoice with amount "0".
    #[default]
    Zero,
    /// Refuse the course selection.
    Reject,
}

/// Onboarding settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnboardingConfig {
    pub default_teacher: String,
    pub pending_payment_method: String,
    pub invalid_price: InvalidPricePolicy,
    /// `chrono` format string for invoice dates.
    pub date_format: String,
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        Self {
            default_teacher: DEFAULT_TEACHER.to_string(),
            pending_payment_method: PENDING_PAYMENT_METHOD.to_string(),
            invalid_price: InvalidPricePolicy::Zero,
            date_format: "%d.%m.%Y".to_string(),
        }
    }
}

/// Appearance configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Theme mode: "light", "dark", or "system"
    pub theme: ThemeMode,

    /// Accent hue in degrees
    pub accent_hue: f32,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Dark,
            accent_hue: 38.0,
        }
    }
}

/// Theme mode selection.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("nazar"))
}

/// Find the config file.
///
/// Tries paths in order:
/// 1. `NAZAR_CONFIG` environment variable
/// 2. XDG-style: ~/.config/nazar/nazar.toml
/// 3. Platform config dir
///
/// Only existing files are returned.
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("NAZAR_CONFIG").map(PathBuf::from) {
        if path.exists() {
            return Some(path);
        }
    }

    if let Some(home) = dirs::home_dir() {
        let xdg_path = home.join(".config").join("nazar").join("nazar.toml");
        if xdg_path.exists() {
            return Some(xdg_path);
        }
    }

    let path = config_dir()?.join("nazar.toml");
    path.exists().then_some(path)
}

/// Load configuration from a file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
    AppConfig::from_toml(&text)
}

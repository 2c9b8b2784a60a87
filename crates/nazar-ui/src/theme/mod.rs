//! Theme system for the portal.
//!
//! Two layers:
//! - `ThemeSettings`: user preferences from `nazar.toml`
//! - `Theme`: computed colors derived from settings + system appearance

use gpui::{hsla, px, App, Global, Hsla, Pixels, SharedString};
use nazar_core::{AppearanceConfig, ThemeMode};

// =============================================================================
// Theme Settings (User-Configurable)
// =============================================================================

/// User-configurable theme settings.
#[derive(Debug, Clone)]
pub struct ThemeSettings {
    /// Light, dark, or follow system.
    pub appearance: Appearance,
    /// Accent hue (0.0-1.0). Default is amber (38/360).
    pub accent_hue: f32,
    /// Main font family.
    pub font_family: SharedString,
    /// Base font size.
    pub font_size: Pixels,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            appearance: Appearance::Dark,
            accent_hue: 38.0 / 360.0,
            font_family: "Space Grotesk".into(),
            font_size: px(14.0),
        }
    }
}

impl From<&AppearanceConfig> for ThemeSettings {
    fn from(config: &AppearanceConfig) -> Self {
        Self {
            appearance: config.theme.into(),
            accent_hue: config.accent_hue.rem_euclid(360.0) / 360.0,
            ..Default::default()
        }
    }
}

impl Global for ThemeSettings {}

/// Appearance mode preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Appearance {
    Light,
    #[default]
    Dark,
    System,
}

impl From<ThemeMode> for Appearance {
    fn from(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Appearance::Light,
            ThemeMode::Dark => Appearance::Dark,
            ThemeMode::System => Appearance::System,
        }
    }
}

// =============================================================================
// Theme (Computed)
// =============================================================================

/// The active theme with computed colors.
///
/// Access via `cx.theme()` in render methods.
#[derive(Debug, Clone)]
pub struct Theme {
    pub is_dark: bool,

    // -------------------------------------------------------------------------
    // Background Colors
    // -------------------------------------------------------------------------
    /// Page background.
    pub background: Hsla,
    /// Cards and panels.
    pub surface: Hsla,
    pub surface_hover: Hsla,
    /// Nav bar and footer.
    pub chrome: Hsla,

    // -------------------------------------------------------------------------
    // Text Colors
    // -------------------------------------------------------------------------
    pub text: Hsla,
    pub text_muted: Hsla,

    // -------------------------------------------------------------------------
    // Interactive Colors
    // -------------------------------------------------------------------------
    /// Buttons, active nav item, highlights.
    pub accent: Hsla,
    /// Text on accent-filled buttons.
    pub on_accent: Hsla,

    // -------------------------------------------------------------------------
    // Semantic Colors
    // -------------------------------------------------------------------------
    pub success: Hsla,
    pub warning: Hsla,
    pub error: Hsla,

    pub border: Hsla,

    // -------------------------------------------------------------------------
    // Typography
    // -------------------------------------------------------------------------
    pub font_family: SharedString,
    pub font_size: Pixels,
    pub font_size_small: Pixels,
    pub font_size_large: Pixels,

    // -------------------------------------------------------------------------
    // Spacing
    // -------------------------------------------------------------------------
    pub spacing: Pixels,
    pub radius: Pixels,
    /// Height of catalog cards.
    pub card_height: Pixels,
    pub nav_height: Pixels,
}

impl Theme {
    /// Create a theme from settings and system appearance.
    pub fn from_settings(settings: &ThemeSettings, system_is_dark: bool) -> Self {
        let is_dark = match settings.appearance {
            Appearance::Dark => true,
            Appearance::Light => false,
            Appearance::System => system_is_dark,
        };

        let palette = if is_dark {
            Palette::dark(settings.accent_hue)
        } else {
            Palette::light(settings.accent_hue)
        };

        let base_size: f32 = settings.font_size.into();

        Self {
            is_dark,

            background: palette.bg_base,
            surface: palette.bg_elevated,
            surface_hover: palette.bg_hover,
            chrome: palette.bg_chrome,

            text: palette.fg_primary,
            text_muted: palette.fg_secondary,

            accent: palette.accent,
            on_accent: palette.bg_base.with_alpha(1.0),

            success: palette.success,
            warning: palette.warning,
            error: palette.error,

            border: palette.border,

            font_family: settings.font_family.clone(),
            font_size: settings.font_size,
            font_size_small: px(base_size - 2.0),
            font_size_large: px(base_size + 10.0),

            spacing: px(8.0),
            radius: px(12.0),
            card_height: px(132.0),
            nav_height: px(64.0),
        }
    }

    pub fn dark() -> Self {
        Self::from_settings(&ThemeSettings::default(), true)
    }

    pub fn light() -> Self {
        Self::from_settings(
            &ThemeSettings {
                appearance: Appearance::Light,
                ..Default::default()
            },
            false,
        )
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Global for Theme {}

// =============================================================================
// Palette (Internal)
// =============================================================================

struct Palette {
    bg_base: Hsla,
    bg_elevated: Hsla,
    bg_hover: Hsla,
    bg_chrome: Hsla,
    fg_primary: Hsla,
    fg_secondary: Hsla,
    accent: Hsla,
    border: Hsla,
    success: Hsla,
    warning: Hsla,
    error: Hsla,
}

impl Palette {
    fn dark(accent_hue: f32) -> Self {
        Self {
            bg_base: hsla(0.0, 0.0, 0.012, 1.0),
            bg_elevated: hsla(0.0, 0.0, 1.0, 0.04),
            bg_hover: hsla(0.0, 0.0, 1.0, 0.08),
            bg_chrome: hsla(0.0, 0.0, 0.0, 0.80),
            fg_primary: hsla(215.0 / 360.0, 0.20, 0.90, 1.0),
            fg_secondary: hsla(0.0, 0.0, 0.55, 1.0),
            accent: hsla(accent_hue, 0.92, 0.50, 1.0),
            border: hsla(0.0, 0.0, 1.0, 0.06),
            success: hsla(140.0 / 360.0, 0.70, 0.50, 1.0),
            warning: hsla(40.0 / 360.0, 0.90, 0.50, 1.0),
            error: hsla(0.0, 0.80, 0.55, 1.0),
        }
    }

    fn light(accent_hue: f32) -> Self {
        Self {
            bg_base: hsla(0.0, 0.0, 0.98, 1.0),
            bg_elevated: hsla(0.0, 0.0, 0.0, 0.04),
            bg_hover: hsla(0.0, 0.0, 0.0, 0.08),
            bg_chrome: hsla(0.0, 0.0, 1.0, 0.85),
            fg_primary: hsla(0.0, 0.0, 0.10, 1.0),
            fg_secondary: hsla(0.0, 0.0, 0.45, 1.0),
            accent: hsla(accent_hue, 0.85, 0.42, 1.0),
            border: hsla(0.0, 0.0, 0.0, 0.12),
            success: hsla(140.0 / 360.0, 0.70, 0.38, 1.0),
            warning: hsla(40.0 / 360.0, 0.90, 0.42, 1.0),
            error: hsla(0.0, 0.80, 0.45, 1.0),
        }
    }
}

// =============================================================================
// Hsla Extension
// =============================================================================

trait HslaExt {
    fn with_alpha(self, a: f32) -> Hsla;
}

impl HslaExt for Hsla {
    fn with_alpha(self, a: f32) -> Hsla {
        Hsla { a, ..self }
    }
}

// =============================================================================
// Theme Extensions
// =============================================================================

/// Extension trait for convenient theme access.
pub trait ThemeExt {
    fn theme(&self) -> &Theme;
}

impl ThemeExt for App {
    fn theme(&self) -> &Theme {
        self.global::<Theme>()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_dark_amber() {
        let settings = ThemeSettings::default();
        assert_eq!(settings.appearance, Appearance::Dark);
        assert!((settings.accent_hue - 38.0 / 360.0).abs() < 0.001);
        assert!(Theme::from_settings(&settings, false).is_dark);
    }

    #[test]
    fn test_settings_from_config() {
        let config = AppearanceConfig {
            theme: ThemeMode::Light,
            accent_hue: 210.0,
        };
        let settings = ThemeSettings::from(&config);
        assert_eq!(settings.appearance, Appearance::Light);
        assert!((settings.accent_hue - 210.0 / 360.0).abs() < 0.001);
    }

    #[test]
    fn test_accent_hue_wraps() {
        let config = AppearanceConfig {
            theme: ThemeMode::Dark,
            accent_hue: 400.0,
        };
        let settings = ThemeSettings::from(&config);
        assert!((settings.accent_hue - 40.0 / 360.0).abs() < 0.001);
    }

    #[test]
    fn test_system_appearance_follows_system() {
        let settings = ThemeSettings {
            appearance: Appearance::System,
            ..Default::default()
        };
        assert!(Theme::from_settings(&settings, true).is_dark);
        assert!(!Theme::from_settings(&settings, false).is_dark);
    }

    #[test]
    fn test_light_theme() {
        let theme = Theme::light();
        assert!(!theme.is_dark);
        assert!(theme.background.l > theme.text.l);
    }

    #[test]
    fn test_on_accent_is_opaque() {
        let theme = Theme::dark();
        assert!((theme.on_accent.a - 1.0).abs() < 0.001);
        let large: f32 = theme.font_size_large.into();
        assert!((large - 24.0).abs() < 0.001);
    }
}

//! GPUI keybinding registration.
//!
//! Default bindings are registered first, then the `[keymap]` section of
//! `nazar.toml`. GPUI uses last-wins semantics at the same context depth, so
//! configured bindings take precedence.

use std::rc::Rc;

#[cfg(test)]
use gpui::Keystroke;
use gpui::{App, DummyKeyboardMapper, KeyBinding, KeyBindingContextPredicate};
use nazar_core::{AppConfig, ConfigError, View};

use crate::actions::{action_from_name, NavigateTo};

/// Key context set by `PortalShell`.
pub const PORTAL_CONTEXT: &str = "Portal";

// =============================================================================
// Pending Bindings
// =============================================================================

/// What a key does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyHandler {
    /// Built-in action by name, see `actions::available_actions`.
    Action(String),
    /// Jump to a view.
    Navigate(View),
}

/// A binding waiting to be registered with GPUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingBinding {
    /// User-friendly keystroke, e.g. "cmd+1".
    pub key: String,
    pub handler: KeyHandler,
}

impl PendingBinding {
    fn action(key: &str, name: &str) -> Self {
        Self {
            key: key.to_string(),
            handler: KeyHandler::Action(name.to_string()),
        }
    }
}

/// Built-in bindings.
pub fn default_bindings() -> Vec<PendingBinding> {
    vec![
        PendingBinding::action("cmd+1", "go_home"),
        PendingBinding::action("cmd+2", "go_courses"),
        PendingBinding::action("cmd+3", "go_teachers"),
        PendingBinding::action("cmd+4", "go_contact"),
        PendingBinding::action("cmd+p", "open_account"),
        PendingBinding::action("cmd+shift+q", "logout"),
        PendingBinding::action("escape", "dismiss_error"),
    ]
}

/// Bindings from the `[keymap]` config section.
pub fn config_bindings(config: &AppConfig) -> Result<Vec<PendingBinding>, ConfigError> {
    Ok(config
        .view_bindings()?
        .into_iter()
        .map(|(key, view)| PendingBinding {
            key,
            handler: KeyHandler::Navigate(view),
        })
        .collect())
}

// =============================================================================
// Keystroke Parsing
// =============================================================================

/// Convert user-friendly keystroke to GPUI format.
///
/// Users write: "cmd+1" or "cmd+shift+q"
/// GPUI expects: "cmd-1" or "cmd-shift-q"
fn normalize_keystroke(s: &str) -> String {
    s.replace('+', "-")
}

#[cfg(test)]
fn parse_keystroke(s: &str) -> Result<Keystroke, String> {
    let normalized = normalize_keystroke(s);
    Keystroke::parse(&normalized).map_err(|e| format!("Invalid keystroke '{}': {:?}", s, e))
}

fn portal_context() -> Option<Rc<KeyBindingContextPredicate>> {
    KeyBindingContextPredicate::parse(PORTAL_CONTEXT)
        .ok()
        .map(Rc::new)
}

// =============================================================================
// Apply Keybindings
// =============================================================================

/// Register bindings with GPUI, in order.
pub fn apply_keybindings(bindings: impl IntoIterator<Item = PendingBinding>, cx: &mut App) {
    for pending in bindings {
        apply_binding(pending, cx);
    }
}

fn apply_binding(pending: PendingBinding, cx: &mut App) {
    let action: Box<dyn gpui::Action> = match &pending.handler {
        KeyHandler::Action(name) => match action_from_name(name) {
            Some(action) => action,
            None => {
                tracing::warn!("Unknown action: {}", name);
                return;
            }
        },
        KeyHandler::Navigate(view) => Box::new(NavigateTo { view: *view }),
    };

    let keystroke = normalize_keystroke(&pending.key);
    match KeyBinding::load(
        &keystroke,
        action,
        portal_context(),
        false, // use_key_equivalents
        None,  // action_input
        &DummyKeyboardMapper,
    ) {
        Ok(binding) => {
            cx.bind_keys([binding]);
            tracing::debug!("Registered binding: {} -> {:?}", pending.key, pending.handler);
        }
        Err(e) => {
            tracing::warn!("Failed to create binding for '{}': {:?}", pending.key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_keystroke() {
        assert_eq!(normalize_keystroke("cmd+1"), "cmd-1");
        assert_eq!(normalize_keystroke("cmd+shift+q"), "cmd-shift-q");
        assert_eq!(normalize_keystroke("cmd-1"), "cmd-1");
    }

    #[test]
    fn test_default_bindings_parse() {
        for binding in default_bindings() {
            assert!(parse_keystroke(&binding.key).is_ok(), "{}", binding.key);
            match binding.handler {
                KeyHandler::Action(name) => assert!(action_from_name(&name).is_some()),
                KeyHandler::Navigate(_) => panic!("defaults only use named actions"),
            }
        }
    }

    #[test]
    fn test_config_bindings() {
        let config = AppConfig::from_toml(
            r#"
            [keymap]
            "cmd+5" = "auth"
            "#,
        )
        .unwrap();

        let bindings = config_bindings(&config).unwrap();
        assert_eq!(
            bindings,
            vec![PendingBinding {
                key: "cmd+5".to_string(),
                handler: KeyHandler::Navigate(View::Auth),
            }]
        );
    }

    #[test]
    fn test_bad_config_binding_only_fails_keymap() {
        let config = AppConfig::from_toml(
            r#"
            [onboarding]
            default_teacher = "Rasulov Jasur"

            [keymap]
            "cmd+9" = "dashboard"
            "#,
        )
        .unwrap();

        assert!(matches!(
            config_bindings(&config),
            Err(ConfigError::InvalidBinding { ref key, .. }) if key == "cmd+9"
        ));
        assert_eq!(config.onboarding.default_teacher, "Rasulov Jasur");
    }

    #[test]
    fn test_portal_context_parses() {
        assert!(portal_context().is_some());
    }
}

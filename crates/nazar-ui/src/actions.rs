//! GPUI actions for the portal.
//!
//! Actions are dispatched by GPUI's key binding system and handled by
//! `PortalShell`.

use gpui::actions;
use nazar_core::View;

// =============================================================================
// Navigation Actions
// =============================================================================

actions!(
    nazar,
    [GoHome, GoCourses, GoTeachers, GoContact, OpenAccount,]
);

// =============================================================================
// Session Actions
// =============================================================================

actions!(nazar, [Logout, DismissError,]);

// =============================================================================
// Configured Navigation
// =============================================================================

/// Jump to a view; bound from the `[keymap]` config section.
#[derive(Clone, PartialEq, Debug, gpui::Action)]
#[action(no_json, namespace = nazar)]
pub struct NavigateTo {
    pub view: View,
}

// =============================================================================
// Action Lookup
// =============================================================================

/// Look up an action by name for GPUI registration.
pub fn action_from_name(name: &str) -> Option<Box<dyn gpui::Action>> {
    match name {
        "go_home" => Some(Box::new(GoHome)),
        "go_courses" => Some(Box::new(GoCourses)),
        "go_teachers" => Some(Box::new(GoTeachers)),
        "go_contact" => Some(Box::new(GoContact)),
        "open_account" => Some(Box::new(OpenAccount)),
        "logout" => Some(Box::new(Logout)),
        "dismiss_error" => Some(Box::new(DismissError)),
        _ => None,
    }
}

/// Get all available action names.
pub fn available_actions() -> &'static [&'static str] {
    &[
        "go_home",
        "go_courses",
        "go_teachers",
        "go_contact",
        "open_account",
        "logout",
        "dismiss_error",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_from_name() {
        assert!(action_from_name("go_home").is_some());
        assert!(action_from_name("logout").is_some());
        assert!(action_from_name("unknown_action").is_none());
    }

    #[test]
    fn test_available_actions_resolve() {
        for name in available_actions() {
            assert!(action_from_name(name).is_some(), "{name}");
        }
    }
}

//! View and navigation types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseViewError;

/// A top-level screen of the portal. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Home,
    Courses,
    Teachers,
    Auth,
    Contact,
    Profile,
    Admin,
}

impl View {
    /// Every view, in declaration order.
    pub const ALL: [View; 7] = [
        View::Home,
        View::Courses,
        View::Teachers,
        View::Auth,
        View::Contact,
        View::Profile,
        View::Admin,
    ];

    /// Lowercase identifier used in config files and key bindings.
    pub fn as_str(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Courses => "courses",
            View::Teachers => "teachers",
            View::Auth => "auth",
            View::Contact => "contact",
            View::Profile => "profile",
            View::Admin => "admin",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = ParseViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|view| view.as_str() == s)
            .ok_or_else(|| ParseViewError(s.to_string()))
    }
}

/// Who is logging in. The mock auth flow offers both on the login screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginKind {
    Student,
    Admin,
}

/// An entry in the public navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub view: View,
}

/// Public navigation items, in display order.
pub const PUBLIC_NAV: [NavItem; 4] = [
    NavItem {
        label: "Bosh Sahifa",
        view: View::Home,
    },
    NavItem {
        label: "Kurslar",
        view: View::Courses,
    },
    NavItem {
        label: "Ustozlar",
        view: View::Teachers,
    },
    NavItem {
        label: "Aloqa",
        view: View::Contact,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_round_trips_through_str() {
        for view in View::ALL {
            assert_eq!(view.as_str().parse::<View>(), Ok(view));
        }
    }

    #[test]
    fn test_unknown_view_name() {
        let err = "dashboard".parse::<View>().unwrap_err();
        assert_eq!(err, ParseViewError("dashboard".to_string()));
        // Names are lowercase only
        assert!("Home".parse::<View>().is_err());
    }

    #[test]
    fn test_view_serde_lowercase() {
        let json = serde_json::to_string(&View::Teachers).unwrap();
        assert_eq!(json, "\"teachers\"");
        let kind: LoginKind = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(kind, LoginKind::Admin);
    }

    #[test]
    fn test_public_nav_excludes_account_views() {
        assert_eq!(PUBLIC_NAV.len(), 4);
        assert!(PUBLIC_NAV
            .iter()
            .all(|item| !matches!(item.view, View::Auth | View::Profile | View::Admin)));
        assert_eq!(PUBLIC_NAV[0].view, View::Home);
    }
}

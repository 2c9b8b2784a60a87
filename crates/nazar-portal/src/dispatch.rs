//! View dispatch.
//!
//! Derives what to render from the portal state: exactly one view with only
//! the data it needs, plus the surrounding chrome (nav bar and footer).

use std::fmt;

use nazar_core::{NavItem, StudentProfile, View, PUBLIC_NAV};

use crate::session::Session;
use crate::state::PortalState;

// =============================================================================
// View Props
// =============================================================================

/// The view to render and its data.
///
/// Callbacks are implied by the variant: see the per-view event enums in
/// [`crate::events`].
#[derive(Debug, Clone, PartialEq)]
pub enum ViewProps {
    /// Landing page. Emits `HomeEvent`.
    Home,
    /// Course catalog. Emits `CoursesEvent`; `Select` only in selection mode.
    Courses { selection_mode: bool },
    /// Teacher catalog. Emits `TeachersEvent` in selection mode.
    Teachers { selection_mode: bool },
    /// Login screen. Emits `AuthEvent`.
    Auth,
    /// Contact page. Emits nothing.
    Contact,
    /// Student dashboard. Emits `ProfileEvent`.
    Profile { user: StudentProfile },
    /// Admin panel. Emits `AdminEvent`.
    Admin,
    /// Profile view without a profile; renders nothing.
    Empty,
}

/// Select the view to render.
pub fn resolve(state: &PortalState) -> ViewProps {
    let selecting = state.onboarding.is_active();

    match state.view {
        View::Home => ViewProps::Home,
        View::Courses => ViewProps::Courses {
            selection_mode: selecting,
        },
        View::Teachers => ViewProps::Teachers {
            selection_mode: selecting,
        },
        View::Auth => ViewProps::Auth,
        View::Contact => ViewProps::Contact,
        View::Profile => match &state.current_user {
            Some(user) => ViewProps::Profile { user: user.clone() },
            None => ViewProps::Empty,
        },
        View::Admin => ViewProps::Admin,
    }
}

// =============================================================================
// Chrome
// =============================================================================

/// Global elements around the active view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    pub nav_bar: bool,
    pub footer: bool,
}

impl Chrome {
    /// The admin panel is full-screen; everything else gets nav bar and footer.
    pub fn for_view(view: View) -> Self {
        let visible = view != View::Admin;
        Self {
            nav_bar: visible,
            footer: visible,
        }
    }
}

// =============================================================================
// Navigation Bar
// =============================================================================

/// A public nav item with its highlight state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub item: NavItem,
    pub active: bool,
}

/// The account button at the end of the nav bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountButton {
    /// Not logged in: "Kirish" opens the login screen.
    Login,
    /// Student: "Profil" opens the dashboard.
    Profile,
    /// Admin: "Admin" opens the admin panel.
    Admin,
}

impl AccountButton {
    /// The button a session gets.
    pub fn for_session(session: Session) -> Self {
        if !session.is_logged_in() {
            AccountButton::Login
        } else if session.is_admin() {
            AccountButton::Admin
        } else {
            AccountButton::Profile
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AccountButton::Login => "Kirish",
            AccountButton::Profile => "Profil",
            AccountButton::Admin => "Admin",
        }
    }

    pub fn target(self) -> View {
        match self {
            AccountButton::Login => View::Auth,
            AccountButton::Profile => View::Profile,
            AccountButton::Admin => View::Admin,
        }
    }
}

/// Nav bar contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBar {
    pub entries: Vec<NavEntry>,
    pub account: AccountButton,
}

/// Build the nav bar, or `None` when the active view hides it.
pub fn nav_bar(state: &PortalState) -> Option<NavBar> {
    if !Chrome::for_view(state.view).nav_bar {
        return None;
    }

    let entries = PUBLIC_NAV
        .iter()
        .map(|item| NavEntry {
            item: *item,
            active: item.view == state.view,
        })
        .collect();

    Some(NavBar {
        entries,
        account: AccountButton::for_session(state.session),
    })
}

/// One-line text layout; the active entry is bracketed.
impl fmt::Display for NavBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            if entry.active {
                write!(f, "[{}] ", entry.item.label)?;
            } else {
                write!(f, "{} ", entry.item.label)?;
            }
        }
        write!(
            f,
            "| {} -> {}",
            self.account.label(),
            self.account.target()
        )
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::Onboarding;

    fn state(view: View) -> PortalState {
        PortalState {
            view,
            ..PortalState::initial()
        }
    }

    #[test]
    fn test_every_view_resolves() {
        for view in View::ALL {
            let props = resolve(&state(view));
            let expected_empty = view == View::Profile;
            assert_eq!(props == ViewProps::Empty, expected_empty, "{view}");
        }
    }

    #[test]
    fn test_catalogs_select_only_during_onboarding() {
        let mut s = state(View::Teachers);
        assert_eq!(
            resolve(&s),
            ViewProps::Teachers {
                selection_mode: false
            }
        );

        s.onboarding = Onboarding::AwaitingTeacher;
        assert_eq!(
            resolve(&s),
            ViewProps::Teachers {
                selection_mode: true
            }
        );

        s.view = View::Courses;
        s.onboarding = Onboarding::AwaitingCourse {
            teacher: "Umarov Haydarali".to_string(),
        };
        assert_eq!(
            resolve(&s),
            ViewProps::Courses {
                selection_mode: true
            }
        );

        s.onboarding = Onboarding::Complete;
        assert_eq!(
            resolve(&s),
            ViewProps::Courses {
                selection_mode: false
            }
        );
    }

    #[test]
    fn test_profile_gets_user() {
        let mut s = state(View::Profile);
        s.session = Session::student();
        s.current_user = Some(StudentProfile::demo_template());

        match resolve(&s) {
            ViewProps::Profile { user } => assert_eq!(user.name, "Azizbek Rahimov"),
            other => panic!("expected profile, got {other:?}"),
        }
    }

    #[test]
    fn test_admin_hides_chrome() {
        let chrome = Chrome::for_view(View::Admin);
        assert!(!chrome.nav_bar);
        assert!(!chrome.footer);

        for view in View::ALL.into_iter().filter(|v| *v != View::Admin) {
            assert_eq!(
                Chrome::for_view(view),
                Chrome {
                    nav_bar: true,
                    footer: true
                }
            );
        }

        let mut s = state(View::Admin);
        s.session = Session::admin();
        assert!(nav_bar(&s).is_none());
    }

    #[test]
    fn test_account_button_follows_session() {
        let mut s = state(View::Home);
        assert_eq!(nav_bar(&s).unwrap().account, AccountButton::Login);

        s.session = Session::student();
        assert_eq!(nav_bar(&s).unwrap().account, AccountButton::Profile);

        s.session = Session::admin();
        let account = nav_bar(&s).unwrap().account;
        assert_eq!(account, AccountButton::Admin);
        assert_eq!(account.target(), View::Admin);
    }

    #[test]
    fn test_nav_bar_layout_for_guest() {
        let bar = nav_bar(&state(View::Courses)).unwrap();
        insta::assert_snapshot!(
            bar.to_string(),
            @"Bosh Sahifa [Kurslar] Ustozlar Aloqa | Kirish -> auth"
        );
    }

    #[test]
    fn test_nav_bar_layout_for_student_on_profile() {
        let mut s = state(View::Profile);
        s.session = Session::student();

        let bar = nav_bar(&s).unwrap();
        assert!(bar.entries.iter().all(|e| !e.active));
        insta::assert_snapshot!(
            bar.to_string(),
            @"Bosh Sahifa Kurslar Ustozlar Aloqa | Profil -> profile"
        );
    }
}

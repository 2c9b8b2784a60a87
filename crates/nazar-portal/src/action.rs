//! Portal actions.

use nazar_core::{LoginKind, View};

/// A user intent the portal state reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Log in. No credentials are checked by the state machine.
    Login(LoginKind),
    /// Onboarding step 1: pick a teacher by name.
    SelectTeacher(String),
    /// Onboarding step 2: pick a course. `price` is the display label.
    SelectCourse { title: String, price: String },
    /// Clear session, onboarding and profile.
    Logout,
    /// Plain view change (nav bar, footer, links).
    Navigate(View),
}

impl Action {
    /// Short action name for logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Login(_) => "login",
            Action::SelectTeacher(_) => "select_teacher",
            Action::SelectCourse { .. } => "select_course",
            Action::Logout => "logout",
            Action::Navigate(_) => "navigate",
        }
    }
}

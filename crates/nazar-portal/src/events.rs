//! Typed view events.
//!
//! Each view gets its own event enum, so a view can only ask for what its
//! contract allows: the teacher catalog can select a teacher, the profile can
//! log out, and so on. Every event converts into an [`Action`].

use nazar_core::{LoginKind, View};

use crate::action::Action;

/// Landing page links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeEvent {
    Navigate(View),
}

/// Course catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoursesEvent {
    /// "Register" button outside onboarding; opens the login screen.
    Register,
    /// Selection during onboarding.
    Select { title: String, price: String },
}

/// Teacher catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeachersEvent {
    /// Selection during onboarding.
    Select(String),
}

/// Login screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    Login(LoginKind),
}

/// Student dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileEvent {
    Logout,
}

/// Admin panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminEvent {
    Logout,
}

/// Navigation bar and footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    Navigate(View),
}

/// Any event emitted by a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Home(HomeEvent),
    Courses(CoursesEvent),
    Teachers(TeachersEvent),
    Auth(AuthEvent),
    Profile(ProfileEvent),
    Admin(AdminEvent),
    Nav(NavEvent),
}

macro_rules! impl_from_event {
    ($($event:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$event> for ViewEvent {
                fn from(event: $event) -> Self {
                    ViewEvent::$variant(event)
                }
            }
        )*
    };
}

impl_from_event!(
    HomeEvent => Home,
    CoursesEvent => Courses,
    TeachersEvent => Teachers,
    AuthEvent => Auth,
    ProfileEvent => Profile,
    AdminEvent => Admin,
    NavEvent => Nav,
);

impl From<ViewEvent> for Action {
    fn from(event: ViewEvent) -> Self {
        match event {
            ViewEvent::Home(HomeEvent::Navigate(view)) => Action::Navigate(view),
            ViewEvent::Courses(CoursesEvent::Register) => Action::Navigate(View::Auth),
            ViewEvent::Courses(CoursesEvent::Select { title, price }) => {
                Action::SelectCourse { title, price }
            }
            ViewEvent::Teachers(TeachersEvent::Select(name)) => Action::SelectTeacher(name),
            ViewEvent::Auth(AuthEvent::Login(kind)) => Action::Login(kind),
            ViewEvent::Profile(ProfileEvent::Logout) => Action::Logout,
            ViewEvent::Admin(AdminEvent::Logout) => Action::Logout,
            ViewEvent::Nav(NavEvent::Navigate(view)) => Action::Navigate(view),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(event: impl Into<ViewEvent>) -> Action {
        Action::from(event.into())
    }

    #[test]
    fn test_register_opens_login() {
        assert_eq!(action(CoursesEvent::Register), Action::Navigate(View::Auth));
    }

    #[test]
    fn test_selection_events() {
        assert_eq!(
            action(TeachersEvent::Select("Umarov Haydarali".to_string())),
            Action::SelectTeacher("Umarov Haydarali".to_string())
        );
        assert_eq!(
            action(CoursesEvent::Select {
                title: "Matematika Pro".to_string(),
                price: "500000 so'm".to_string(),
            }),
            Action::SelectCourse {
                title: "Matematika Pro".to_string(),
                price: "500000 so'm".to_string(),
            }
        );
    }

    #[test]
    fn test_logout_events() {
        assert_eq!(action(ProfileEvent::Logout), Action::Logout);
        assert_eq!(action(AdminEvent::Logout), Action::Logout);
    }

    #[test]
    fn test_navigation_events() {
        assert_eq!(
            action(HomeEvent::Navigate(View::Courses)),
            Action::Navigate(View::Courses)
        );
        assert_eq!(
            action(NavEvent::Navigate(View::Contact)),
            Action::Navigate(View::Contact)
        );
        assert_eq!(
            action(AuthEvent::Login(LoginKind::Admin)),
            Action::Login(LoginKind::Admin)
        );
    }
}

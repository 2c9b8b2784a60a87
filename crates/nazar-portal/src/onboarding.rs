//! Onboarding state machine.
//!
//! A student login starts a guided flow: choose a teacher, then a course.
//! Choosing the course creates the student's profile and ends the flow.
//!
//! ```text
//! Idle ──student login──> AwaitingTeacher ──select teacher──> AwaitingCourse
//!  ^                           │                                   │
//!  │                           └──────────select course────────────┴──> Complete
//!  └────────────────────────── logout (from any state) ───────────────────┘
//! ```
//!
//! Selecting a course straight from `AwaitingTeacher` is allowed; the profile
//! then gets the configured default teacher. There is no step back from
//! `AwaitingCourse` to `AwaitingTeacher`.

/// Where the student is in the onboarding flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Onboarding {
    /// No onboarding has started since the last logout.
    #[default]
    Idle,
    /// Student logged in, teacher catalog is in selection mode.
    AwaitingTeacher,
    /// Teacher chosen, course catalog is in selection mode.
    AwaitingCourse { teacher: String },
    /// Profile was created.
    Complete,
}

impl Onboarding {
    /// Whether catalogs should offer selection.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            Onboarding::AwaitingTeacher | Onboarding::AwaitingCourse { .. }
        )
    }

    /// Teacher picked in this flow, if any.
    pub fn selected_teacher(&self) -> Option<&str> {
        match self {
            Onboarding::AwaitingCourse { teacher } => Some(teacher),
            _ => None,
        }
    }

    /// Short state name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Onboarding::Idle => "idle",
            Onboarding::AwaitingTeacher => "awaiting_teacher",
            Onboarding::AwaitingCourse { .. } => "awaiting_course",
            Onboarding::Complete => "complete",
        }
    }
}

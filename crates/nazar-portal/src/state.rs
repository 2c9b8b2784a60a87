//! Portal state and the transition function.
//!
//! `reduce` is pure apart from logging: same state, action and context give
//! the same result. It never mutates its input; on error the caller keeps the
//! old state.

use std::fmt::Write;

use chrono::NaiveDate;
use nazar_core::{
    parse_price_amount, InvalidPricePolicy, LoginKind, OnboardingConfig, PaymentRecord,
    PaymentStatus, StudentProfile, StudentStatus, View,
};

use crate::action::Action;
use crate::error::PortalError;
use crate::onboarding::Onboarding;
use crate::session::Session;

// =============================================================================
// Portal State
// =============================================================================

/// Everything the root controller owns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortalState {
    /// Active view.
    pub view: View,
    pub session: Session,
    pub onboarding: Onboarding,
    /// Present only after onboarding completed, until logout.
    pub current_user: Option<StudentProfile>,
}

impl PortalState {
    /// Home view, nobody logged in.
    pub fn initial() -> Self {
        Self::default()
    }
}

/// Inputs to `reduce` besides state and action.
#[derive(Debug, Clone, Copy)]
pub struct ReduceContext<'a> {
    pub onboarding: &'a OnboardingConfig,
    /// Date stamped on the enrollment invoice.
    pub today: NaiveDate,
}

// =============================================================================
// Transition Function
// =============================================================================

/// Apply one action.
pub fn reduce(
    state: &PortalState,
    action: Action,
    ctx: &ReduceContext<'_>,
) -> Result<PortalState, PortalError> {
    match action {
        Action::Login(LoginKind::Admin) => Ok(PortalState {
            view: View::Admin,
            session: Session::admin(),
            onboarding: Onboarding::Idle,
            current_user: None,
        }),

        Action::Login(LoginKind::Student) => Ok(PortalState {
            view: View::Teachers,
            session: Session::student(),
            onboarding: Onboarding::AwaitingTeacher,
            current_user: state.current_user.clone(),
        }),

        Action::SelectTeacher(teacher) => {
            if !state.onboarding.is_active() {
                return Err(PortalError::NotOnboarding {
                    action: "select_teacher",
                });
            }
            Ok(PortalState {
                view: View::Courses,
                onboarding: Onboarding::AwaitingCourse { teacher },
                ..state.clone()
            })
        }

        Action::SelectCourse { title, price } => {
            if !state.onboarding.is_active() {
                return Err(PortalError::NotOnboarding {
                    action: "select_course",
                });
            }
            let profile = enroll(state.onboarding.selected_teacher(), title, &price, ctx)?;
            Ok(PortalState {
                view: View::Profile,
                session: state.session,
                onboarding: Onboarding::Complete,
                current_user: Some(profile),
            })
        }

        Action::Logout => Ok(PortalState {
            view: View::Home,
            ..PortalState::initial()
        }),

        Action::Navigate(view) => Ok(PortalState {
            view,
            ..state.clone()
        }),
    }
}

/// Build the student's profile from the demo template.
fn enroll(
    teacher: Option<&str>,
    course: String,
    price: &str,
    ctx: &ReduceContext<'_>,
) -> Result<StudentProfile, PortalError> {
    let config = ctx.onboarding;

    let amount = match parse_price_amount(price) {
        Ok(amount) => amount.to_string(),
        Err(e) => match config.invalid_price {
            InvalidPricePolicy::Reject => return Err(e.into()),
            InvalidPricePolicy::Zero => {
                tracing::warn!("{} - recording invoice amount as 0", e);
                "0".to_string()
            }
        },
    };

    let invoice = PaymentRecord {
        id: 1,
        date: format_date(ctx.today, &config.date_format),
        amount,
        status: PaymentStatus::Pending,
        method: config.pending_payment_method.clone(),
    };

    Ok(StudentProfile {
        teacher: teacher
            .unwrap_or(config.default_teacher.as_str())
            .to_string(),
        current_course: course,
        status: StudentStatus::Active,
        balance: "0".to_string(),
        payments: vec![invoice],
        ..StudentProfile::demo_template()
    })
}

/// Format with a user-supplied pattern, falling back to `dd.mm.yyyy`.
fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_ok() {
        return out;
    }
    tracing::warn!("Invalid date format '{}', using default", pattern);
    date.format("%d.%m.%Y").to_string()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use nazar_core::{PriceError, DEFAULT_TEACHER};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()
    }

    fn run(state: &PortalState, action: Action) -> Result<PortalState, PortalError> {
        let config = OnboardingConfig::default();
        let ctx = ReduceContext {
            onboarding: &config,
            today: today(),
        };
        reduce(state, action, &ctx)
    }

    fn run_all(actions: Vec<Action>) -> PortalState {
        actions
            .into_iter()
            .fold(PortalState::initial(), |state, action| {
                run(&state, action).unwrap()
            })
    }

    fn select_course(title: &str, price: &str) -> Action {
        Action::SelectCourse {
            title: title.to_string(),
            price: price.to_string(),
        }
    }

    #[test]
    fn test_initial_state() {
        let state = PortalState::initial();
        assert_eq!(state.view, View::Home);
        assert_eq!(state.session, Session::anonymous());
        assert_eq!(state.onboarding, Onboarding::Idle);
        assert!(state.current_user.is_none());
    }

    #[test]
    fn test_student_login_starts_onboarding() {
        let state = run_all(vec![Action::Login(LoginKind::Student)]);
        assert_eq!(state.view, View::Teachers);
        assert!(state.session.is_student());
        assert!(state.onboarding.is_active());
        assert_eq!(state.onboarding.selected_teacher(), None);
    }

    #[test]
    fn test_full_onboarding_flow() {
        let state = run_all(vec![Action::Login(LoginKind::Student)]);

        let state = run(
            &state,
            Action::SelectTeacher("Umarov Haydarali".to_string()),
        )
        .unwrap();
        assert_eq!(state.view, View::Courses);

        let state = run(&state, select_course("Matematika Pro", "500000 so'm")).unwrap();
        assert_eq!(state.view, View::Profile);
        assert!(!state.onboarding.is_active());
        assert_eq!(state.onboarding, Onboarding::Complete);

        let profile = state.current_user.unwrap();
        assert_eq!(profile.teacher, "Umarov Haydarali");
        assert_eq!(profile.current_course, "Matematika Pro");
        assert_eq!(profile.status, StudentStatus::Active);
        assert_eq!(profile.balance, "0");
        assert_eq!(profile.payments[0].amount, "500000");
        assert_eq!(profile.payments[0].date, "02.05.2024");
    }

    #[test]
    fn test_selected_teacher_lands_on_profile() {
        let state = run_all(vec![
            Action::Login(LoginKind::Student),
            Action::SelectTeacher("Karimova Dilnoza".to_string()),
            select_course("Ingliz tili IELTS", "450000 so'm"),
        ]);
        assert_eq!(state.current_user.unwrap().teacher, "Karimova Dilnoza");
    }

    #[test]
    fn test_second_teacher_selection_replaces_first() {
        let state = run_all(vec![
            Action::Login(LoginKind::Student),
            Action::SelectTeacher("Karimova Dilnoza".to_string()),
            Action::SelectTeacher("Rasulov Jasur".to_string()),
            select_course("Fizika Asoslari", "400000 so'm"),
        ]);
        assert_eq!(state.current_user.unwrap().teacher, "Rasulov Jasur");
    }

    #[test]
    fn test_skipped_teacher_uses_default() {
        let state = run_all(vec![
            Action::Login(LoginKind::Student),
            Action::Navigate(View::Courses),
            select_course("Matematika Pro", "500000 so'm"),
        ]);
        assert_eq!(state.current_user.unwrap().teacher, DEFAULT_TEACHER);
    }

    #[test]
    fn test_course_selection_creates_single_pending_invoice() {
        let state = run_all(vec![
            Action::Login(LoginKind::Student),
            select_course("Matematika Pro", "500000 so'm"),
        ]);

        let profile = state.current_user.unwrap();
        assert_eq!(profile.payments.len(), 1);
        let invoice = &profile.payments[0];
        assert_eq!(invoice.status, PaymentStatus::Pending);
        assert_eq!(invoice.method, "Kutilmoqda");
        assert_eq!(invoice.id, 1);
    }

    #[test]
    fn test_profile_keeps_template_fields() {
        let state = run_all(vec![
            Action::Login(LoginKind::Student),
            select_course("Matematika Pro", "500000 so'm"),
        ]);

        let profile = state.current_user.unwrap();
        let template = StudentProfile::demo_template();
        assert_eq!(profile.name, template.name);
        assert_eq!(profile.id, template.id);
        assert_eq!(profile.schedule, template.schedule);
        assert_eq!(profile.assignments, template.assignments);
    }

    #[test]
    fn test_admin_login_skips_onboarding() {
        let state = run_all(vec![Action::Login(LoginKind::Admin)]);
        assert_eq!(state.view, View::Admin);
        assert!(state.session.is_admin());
        assert!(!state.onboarding.is_active());
    }

    #[test]
    fn test_admin_login_during_onboarding_leaves_it() {
        let state = run_all(vec![
            Action::Login(LoginKind::Student),
            Action::Login(LoginKind::Admin),
        ]);
        assert_eq!(state.onboarding, Onboarding::Idle);
        assert!(state.current_user.is_none());
    }

    #[test]
    fn test_logout_resets_everything() {
        let finished = run_all(vec![
            Action::Login(LoginKind::Student),
            Action::SelectTeacher("Umarov Haydarali".to_string()),
            select_course("Matematika Pro", "500000 so'm"),
        ]);
        let mid_flow = run_all(vec![
            Action::Login(LoginKind::Student),
            Action::SelectTeacher("Umarov Haydarali".to_string()),
        ]);
        let admin = run_all(vec![Action::Login(LoginKind::Admin)]);

        for state in [PortalState::initial(), finished, mid_flow, admin] {
            let once = run(&state, Action::Logout).unwrap();
            assert_eq!(once, PortalState::initial());

            let twice = run(&once, Action::Logout).unwrap();
            assert_eq!(twice, once);
        }
    }

    #[test]
    fn test_navigate_changes_only_view() {
        let state = run_all(vec![Action::Login(LoginKind::Student)]);
        let moved = run(&state, Action::Navigate(View::Contact)).unwrap();

        assert_eq!(moved.view, View::Contact);
        assert_eq!(moved.session, state.session);
        assert_eq!(moved.onboarding, state.onboarding);
    }

    #[test]
    fn test_selection_outside_onboarding_rejected() {
        let state = PortalState::initial();

        let err = run(&state, Action::SelectTeacher("X".to_string())).unwrap_err();
        assert_eq!(
            err,
            PortalError::NotOnboarding {
                action: "select_teacher"
            }
        );

        let err = run(&state, select_course("Matematika Pro", "500000 so'm")).unwrap_err();
        assert_eq!(
            err,
            PortalError::NotOnboarding {
                action: "select_course"
            }
        );
    }

    #[test]
    fn test_course_cannot_be_selected_twice() {
        let state = run_all(vec![
            Action::Login(LoginKind::Student),
            select_course("Matematika Pro", "500000 so'm"),
        ]);
        assert!(run(&state, select_course("Fizika Asoslari", "400000 so'm")).is_err());
    }

    #[test]
    fn test_malformed_price_defaults_to_zero() {
        let state = run_all(vec![
            Action::Login(LoginKind::Student),
            select_course("Ochiq dars", "Bepul"),
        ]);
        assert_eq!(state.current_user.unwrap().payments[0].amount, "0");
    }

    #[test]
    fn test_malformed_price_rejected_by_policy() {
        let config = OnboardingConfig {
            invalid_price: InvalidPricePolicy::Reject,
            ..Default::default()
        };
        let ctx = ReduceContext {
            onboarding: &config,
            today: today(),
        };

        let state = reduce(
            &PortalState::initial(),
            Action::Login(LoginKind::Student),
            &ctx,
        )
        .unwrap();
        let err = reduce(&state, select_course("Ochiq dars", ""), &ctx).unwrap_err();
        assert_eq!(err, PortalError::Price(PriceError::Empty));
    }

    #[test]
    fn test_custom_onboarding_labels() {
        let config = OnboardingConfig {
            default_teacher: "Karimova Dilnoza".to_string(),
            pending_payment_method: "Click".to_string(),
            date_format: "%Y-%m-%d".to_string(),
            ..Default::default()
        };
        let ctx = ReduceContext {
            onboarding: &config,
            today: today(),
        };

        let state = reduce(
            &PortalState::initial(),
            Action::Login(LoginKind::Student),
            &ctx,
        )
        .unwrap();
        let state = reduce(&state, select_course("Matematika Pro", "500000 so'm"), &ctx).unwrap();

        let profile = state.current_user.unwrap();
        assert_eq!(profile.teacher, "Karimova Dilnoza");
        assert_eq!(profile.payments[0].method, "Click");
        assert_eq!(profile.payments[0].date, "2024-05-02");
    }

    #[test]
    fn test_format_date_fallback() {
        assert_eq!(format_date(today(), "%d.%m.%Y"), "02.05.2024");
        assert_eq!(format_date(today(), "%Q"), "02.05.2024");
    }
}

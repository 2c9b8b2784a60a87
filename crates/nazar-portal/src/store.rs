//! Root controller: owns the portal state and broadcasts every change.
//!
//! Mutation = notification. Every committed transition is sent on a
//! `tokio::sync::watch` channel; callers cannot change the state without
//! subscribers seeing it. Rejected actions leave the state untouched and
//! broadcast nothing.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use nazar_core::{LoginKind, OnboardingConfig, View};
use parking_lot::RwLock;
use tokio::sync::watch;

use crate::action::Action;
use crate::auth::{AuthProvider, StubAuthProvider};
use crate::error::PortalError;
use crate::state::{reduce, PortalState, ReduceContext};

type Clock = Box<dyn Fn() -> NaiveDate + Send + Sync>;

// =============================================================================
// PortalStore
// =============================================================================

/// The portal state container.
///
/// ## Thread Safety
///
/// Uses `parking_lot::RwLock` for the state (never poisons). The write lock
/// is held for exactly one reduction and its broadcast, so actions apply one
/// at a time and subscribers see them in the same order.
///
/// ## Usage
///
/// ```ignore
/// let store = PortalStore::new(OnboardingConfig::default());
/// let rx = store.subscribe();
///
/// store.login(LoginKind::Student)?;
/// assert_eq!(rx.borrow().view, View::Teachers);
/// ```
pub struct PortalStore {
    inner: RwLock<PortalState>,
    auth: Arc<dyn AuthProvider>,
    config: OnboardingConfig,
    clock: Clock,
    tx: watch::Sender<PortalState>,
    rx: watch::Receiver<PortalState>,
}

impl PortalStore {
    /// Create a store in the initial state with the stub auth provider.
    pub fn new(config: OnboardingConfig) -> Self {
        let (tx, rx) = watch::channel(PortalState::initial());
        Self {
            inner: RwLock::new(PortalState::initial()),
            auth: Arc::new(StubAuthProvider),
            config,
            clock: Box::new(|| Local::now().date_naive()),
            tx,
            rx,
        }
    }

    /// Replace the auth provider.
    pub fn with_auth(mut self, auth: Arc<dyn AuthProvider>) -> Self {
        self.auth = auth;
        self
    }

    /// Replace the clock used to date enrollment invoices.
    pub fn with_clock(mut self, clock: impl Fn() -> NaiveDate + Send + Sync + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Log in after asking the auth provider.
    pub fn login(&self, kind: LoginKind) -> Result<(), PortalError> {
        self.dispatch(Action::Login(kind))
    }

    /// Onboarding step 1.
    pub fn select_teacher(&self, name: impl Into<String>) -> Result<(), PortalError> {
        self.dispatch(Action::SelectTeacher(name.into()))
    }

    /// Onboarding step 2; creates the profile.
    pub fn select_course(
        &self,
        title: impl Into<String>,
        price: impl Into<String>,
    ) -> Result<(), PortalError> {
        self.dispatch(Action::SelectCourse {
            title: title.into(),
            price: price.into(),
        })
    }

    /// Logout is total: `reduce` accepts it in every state.
    pub fn logout(&self) {
        if let Err(e) = self.dispatch(Action::Logout) {
            tracing::error!("Logout failed: {}", e);
        }
    }

    /// Navigation is total: `reduce` accepts it in every state.
    pub fn navigate(&self, view: View) {
        if let Err(e) = self.dispatch(Action::Navigate(view)) {
            tracing::error!("Navigation to {} failed: {}", view, e);
        }
    }

    /// Apply an action and broadcast the new state.
    ///
    /// Logins are checked with the auth provider first.
    pub fn dispatch(&self, action: Action) -> Result<(), PortalError> {
        let action = match action {
            Action::Login(kind) => Action::Login(self.authorize(kind)?),
            other => other,
        };
        self.commit(action)
    }

    fn authorize(&self, kind: LoginKind) -> Result<LoginKind, PortalError> {
        match self.auth.authorize(kind) {
            Ok(granted) => {
                tracing::info!("Login as {:?} granted as {:?}", kind, granted);
                Ok(granted)
            }
            Err(e) => {
                tracing::warn!("Login as {:?} refused: {}", kind, e);
                Err(e.into())
            }
        }
    }

    fn commit(&self, action: Action) -> Result<(), PortalError> {
        let name = action.name();
        let completes_onboarding = matches!(action, Action::SelectCourse { .. });
        let logs_out = matches!(action, Action::Logout);
        let today = (self.clock)();

        let result = {
            let mut inner = self.inner.write();
            let ctx = ReduceContext {
                onboarding: &self.config,
                today,
            };
            reduce(&inner, action, &ctx).map(|next| {
                *inner = next.clone();
                // Still under the write lock, so broadcasts keep commit order.
                self.tx.send_replace(next.clone());
                next
            })
        };

        match result {
            Ok(state) => {
                tracing::debug!(
                    "Applied {}: view={}, onboarding={}",
                    name,
                    state.view,
                    state.onboarding.name()
                );
                if completes_onboarding {
                    let course = state
                        .current_user
                        .as_ref()
                        .map(|user| user.current_course.as_str())
                        .unwrap_or_default();
                    tracing::info!("Onboarding complete, enrolled in '{}'", course);
                }
                if logs_out {
                    tracing::info!("Logged out");
                }
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Rejected {}: {}", name, e);
                Err(e)
            }
        }
    }

    // =========================================================================
    // Query Methods
    // =========================================================================

    /// Copy of the current state.
    pub fn snapshot(&self) -> PortalState {
        self.inner.read().clone()
    }

    /// Subscribe to state changes. Clone the receiver for each subscriber.
    pub fn subscribe(&self) -> watch::Receiver<PortalState> {
        self.rx.clone()
    }
}

impl Default for PortalStore {
    fn default() -> Self {
        Self::new(OnboardingConfig::default())
    }
}

// =============================================================================
// Tests
// =============================================================================

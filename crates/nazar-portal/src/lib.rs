//! Session, onboarding and view routing for the Nazar Maxram student portal.
//!
//! This crate is GPUI-independent. It provides:
//! - `Session` and the onboarding state machine
//! - `Action` and the pure `reduce` transition function
//! - `PortalStore`, which owns the state and broadcasts every change
//! - The `AuthProvider` seam with a stub implementation
//! - View dispatch: which view renders, with which props and chrome
//! - Typed per-view events that convert into actions

pub mod action;
pub mod auth;
pub mod dispatch;
pub mod error;
pub mod events;
pub mod onboarding;
pub mod session;
pub mod state;
pub mod store;

pub use action::Action;
pub use auth::{AuthProvider, StubAuthProvider};
pub use dispatch::{nav_bar, resolve, AccountButton, Chrome, NavBar, NavEntry, ViewProps};
pub use error::{AuthError, PortalError};
pub use events::{
    AdminEvent, AuthEvent, CoursesEvent, HomeEvent, NavEvent, ProfileEvent, TeachersEvent,
    ViewEvent,
};
pub use onboarding::Onboarding;
pub use session::Session;
pub use state::{reduce, PortalState, ReduceContext};
pub use store::PortalStore;

// Re-export nazar_core types for convenience
pub use nazar_core::{LoginKind, StudentProfile, View};

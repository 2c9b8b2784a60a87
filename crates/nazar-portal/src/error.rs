//! Error types for portal transitions.

use nazar_core::PriceError;
use thiserror::Error;

/// Authentication provider errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Provider refused the login.
    #[error("Login rejected: {reason}")]
    Rejected { reason: String },
}

/// Errors from applying an action. The state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortalError {
    /// A selection arrived while no onboarding was running.
    #[error("'{action}' is only valid during onboarding")]
    NotOnboarding { action: &'static str },

    /// Course price could not be turned into an invoice amount.
    #[error("Invalid course price: {0}")]
    Price(#[from] PriceError),

    /// Login refused by the auth provider.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

//! Authentication seam.
//!
//! The portal has no real accounts. `StubAuthProvider` grants whatever the
//! login screen asks for; it is a stand-in, not a security boundary. A
//! credential-checking provider can replace it without touching the state
//! machine.

use nazar_core::LoginKind;

use crate::error::AuthError;

/// Decides whether a login request is granted.
#[cfg_attr(test, mockall::automock)]
pub trait AuthProvider: Send + Sync {
    /// Returns the kind of session actually granted.
    fn authorize(&self, kind: LoginKind) -> Result<LoginKind, AuthError>;
}

/// Accepts every login as requested.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubAuthProvider;

impl AuthProvider for StubAuthProvider {
    fn authorize(&self, kind: LoginKind) -> Result<LoginKind, AuthError> {
        tracing::debug!("Stub auth granting {:?} login", kind);
        Ok(kind)
    }
}

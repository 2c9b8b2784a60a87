//! Login state.

/// The login/admin flag pair.
///
/// Fields are private so that `is_admin` can only be set together with
/// `logged_in`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    logged_in: bool,
    is_admin: bool,
}

impl Session {
    /// Nobody is logged in.
    pub const fn anonymous() -> Self {
        Self {
            logged_in: false,
            is_admin: false,
        }
    }

    pub const fn student() -> Self {
        Self {
            logged_in: true,
            is_admin: false,
        }
    }

    pub const fn admin() -> Self {
        Self {
            logged_in: true,
            is_admin: true,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Logged in without admin rights.
    pub fn is_student(&self) -> bool {
        self.logged_in && !self.is_admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_anonymous() {
        assert_eq!(Session::default(), Session::anonymous());
        assert!(!Session::default().is_logged_in());
    }

    #[test]
    fn test_admin_implies_logged_in() {
        for session in [Session::anonymous(), Session::student(), Session::admin()] {
            assert!(!session.is_admin() || session.is_logged_in());
        }
    }

    #[test]
    fn test_student_flags() {
        let session = Session::student();
        assert!(session.is_student());
        assert!(!session.is_admin());
        assert!(!Session::admin().is_student());
    }
}

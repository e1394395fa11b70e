use std::fmt;

use log::info;

use crate::directory::IdentityDirectory;
use crate::model::Profile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// Email or secret did not match. Deliberately does not say which half.
    InvalidCredentials,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "invalid email or password"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Single-slot session. At most one profile is signed in at a time; the slot
/// is owned by `AppState` and threaded to whoever needs the scope.
pub struct Session {
    profile: Option<Profile>,
}

impl Session {
    pub fn new() -> Session {
        Session { profile: None }
    }

    pub fn sign_in(
        &mut self,
        directory: &IdentityDirectory,
        email: &str,
        secret: &str,
    ) -> Result<Profile, AuthError> {
        let account = directory.find(email).ok_or(AuthError::InvalidCredentials)?;
        if account.password != secret {
            return Err(AuthError::InvalidCredentials);
        }
        let profile = account.profile.clone();
        info!("sign-in: {} ({:?})", profile.email, profile.role);
        self.profile = Some(profile.clone());
        Ok(profile)
    }

    /// Idempotent; signing out twice is fine.
    pub fn sign_out(&mut self) {
        if let Some(profile) = self.profile.take() {
            info!("sign-out: {}", profile.email);
        }
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn school_id(&self) -> Option<&str> {
        self.profile.as_ref().and_then(|p| p.school_id.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_fills_the_slot_and_strips_the_secret_path() {
        let dir = IdentityDirectory::standard();
        let mut session = Session::new();

        let profile = session
            .sign_in(&dir, "admin@kingdomheritage.edu", "admin123")
            .unwrap();
        assert_eq!(profile.school_id.as_deref(), Some("school-1"));
        assert_eq!(session.school_id(), Some("school-1"));
        assert!(session.profile().is_some());
    }

    #[test]
    fn wrong_secret_and_unknown_email_fail_the_same_way() {
        let dir = IdentityDirectory::standard();
        let mut session = Session::new();

        let err = session
            .sign_in(&dir, "admin@kingdomheritage.edu", "wrong")
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        let err = session.sign_in(&dir, "nobody@x.com", "admin123").unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        assert!(session.profile().is_none());
    }

    #[test]
    fn sign_out_is_idempotent() {
        let dir = IdentityDirectory::standard();
        let mut session = Session::new();
        session
            .sign_in(&dir, "super@admin.com", "admin123")
            .unwrap();
        session.sign_out();
        assert!(session.profile().is_none());
        session.sign_out();
        assert!(session.profile().is_none());
    }
}

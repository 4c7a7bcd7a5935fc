use chrono::Utc;
use subtle::ConstantTimeEq;
use tracing::{info, instrument, warn};

use crate::config::ResolvedAdmin;
use crate::domain::error::AuthError;
use crate::domain::session::{AdminSession, SessionKeys};

/// Signed token plus the session it encodes.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub session: AdminSession,
}

/// Credential check against the single configured admin identity.
pub struct AuthService {
    email: String,
    password: String,
    keys: SessionKeys,
    secure_cookies: bool,
}

impl AuthService {
    pub fn new(admin: &ResolvedAdmin) -> Self {
        Self {
            email: admin.email.clone(),
            password: admin.password.clone(),
            keys: SessionKeys::new(admin.session_secret.as_bytes(), admin.session_ttl),
            secure_cookies: admin.secure_cookies,
        }
    }

    /// `Ok(None)` on a credential mismatch; `Err` only when signing fails.
    #[instrument(name = "admin.auth.sign_in", skip_all)]
    pub fn sign_in(&self, email: &str, password: &str) -> Result<Option<IssuedSession>, AuthError> {
        // Constant-time; both fields are always compared.
        let email_ok = email.as_bytes().ct_eq(self.email.as_bytes());
        let password_ok = password.as_bytes().ct_eq(self.password.as_bytes());
        if !bool::from(email_ok & password_ok) {
            warn!("admin sign-in rejected");
            return Ok(None);
        }
        let (token, session) = self.keys.issue(&self.email, Utc::now())?;
        info!(expires_at = %session.expires_at, "admin signed in");
        Ok(Some(IssuedSession { token, session }))
    }

    /// Valid, unexpired tokens for the configured identity only.
    pub fn authenticate(&self, token: &str) -> Option<AdminSession> {
        self.keys
            .verify(token)
            .filter(|session| session.email == self.email)
    }

    pub fn session_max_age_secs(&self) -> u64 {
        self.keys.ttl().as_secs()
    }

    pub fn secure_cookies(&self) -> bool {
        self.secure_cookies
    }
}

use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::error::AuthError;

#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// Authenticated admin, as carried in request extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

/// HS256 signer/verifier for session tokens.
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl SessionKeys {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn issue(&self, email: &str, now: DateTime<Utc>) -> Result<(String, AdminSession), AuthError> {
        let ttl = chrono::Duration::from_std(self.ttl).map_err(|_| AuthError::TtlOutOfRange)?;
        let exp = now
            .checked_add_signed(ttl)
            .ok_or(AuthError::TtlOutOfRange)?
            .timestamp();
        // The claim has whole-second precision; the returned session must match it.
        let expires_at = Utc
            .timestamp_opt(exp, 0)
            .single()
            .ok_or(AuthError::TtlOutOfRange)?;
        let claims = SessionClaims {
            sub: email.to_owned(),
            iat: now.timestamp(),
            exp,
        };
        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?;
        Ok((
            token,
            AdminSession {
                email: claims.sub,
                expires_at,
            },
        ))
    }

    /// Bad signature, wrong algorithm, malformed or expired tokens all yield `None`.
    pub fn verify(&self, token: &str) -> Option<AdminSession> {
        let data =
            match jsonwebtoken::decode::<SessionClaims>(token, &self.decoding, &self.validation) {
                Ok(data) => data,
                Err(e) => {
                    tracing::debug!(error = %e, "rejected session token");
                    return None;
                }
            };
        let expires_at = Utc.timestamp_opt(data.claims.exp, 0).single()?;
        Some(AdminSession {
            email: data.claims.sub,
            expires_at,
        })
    }
}

use std::time::Duration;

use runtime::RunProfile;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use tracing::warn;

/// Fallbacks used when the development profile runs without credentials.
pub const DEV_ADMIN_EMAIL: &str = "admin@marine-engines.local";
pub const DEV_ADMIN_PASSWORD: &str = "admin123";
const DEV_SESSION_SECRET: &str = "development-only-session-secret";

/// Upper bound for records per type on the overview page.
pub const MAX_OVERVIEW_LIMIT: u64 = 10;

/// `modules.admin` section. `ADMIN_EMAIL`, `ADMIN_PASSWORD` and
/// `ADMIN_SESSION_SECRET` land here as well.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AdminConfig {
    #[serde(default, deserialize_with = "scalar_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub session_secret: Option<String>,
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,
    /// Records per type on the `/admin` overview, `1..=10`.
    #[serde(default = "default_overview_limit")]
    pub overview_limit: u64,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            email: None,
            password: None,
            session_secret: None,
            session_ttl_secs: default_session_ttl_secs(),
            overview_limit: default_overview_limit(),
        }
    }
}

fn default_session_ttl_secs() -> u64 {
    30 * 24 * 60 * 60
}

fn default_overview_limit() -> u64 {
    MAX_OVERVIEW_LIMIT
}

// Environment values arrive typed (`ADMIN_PASSWORD=1234` is a number).
fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other @ (serde_json::Value::Number(_) | serde_json::Value::Bool(_))) => {
            Some(other.to_string())
        }
        Some(other) => {
            return Err(serde::de::Error::custom(format!(
                "expected a string, got {other}"
            )))
        }
    })
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdminConfigError {
    #[error("admin setting '{0}' must be configured in the production profile")]
    MissingInProduction(&'static str),

    #[error("admin session_ttl_secs must be greater than zero")]
    ZeroSessionTtl,

    #[error("admin overview_limit must be between 1 and {MAX_OVERVIEW_LIMIT}, got {0}")]
    OverviewLimitOutOfRange(u64),
}

/// Admin settings after profile fallbacks are applied.
#[derive(Clone)]
pub struct ResolvedAdmin {
    pub email: String,
    pub password: String,
    pub session_secret: String,
    pub session_ttl: Duration,
    pub overview_limit: u64,
    pub secure_cookies: bool,
}

impl std::fmt::Debug for ResolvedAdmin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedAdmin")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("session_secret", &"<redacted>")
            .field("session_ttl", &self.session_ttl)
            .field("overview_limit", &self.overview_limit)
            .field("secure_cookies", &self.secure_cookies)
            .finish()
    }
}

impl AdminConfig {
    /// Apply the profile policy: development falls back to fixed values with a
    /// warning, production refuses to start without them.
    pub fn resolve(&self, profile: RunProfile) -> Result<ResolvedAdmin, AdminConfigError> {
        if self.session_ttl_secs == 0 {
            return Err(AdminConfigError::ZeroSessionTtl);
        }
        if !(1..=MAX_OVERVIEW_LIMIT).contains(&self.overview_limit) {
            return Err(AdminConfigError::OverviewLimitOutOfRange(self.overview_limit));
        }

        let pick = |value: &Option<String>, setting: &'static str, fallback: &str| {
            match value.as_deref().filter(|v| !v.is_empty()) {
                Some(v) => Ok(v.to_owned()),
                None if profile.is_production() => {
                    Err(AdminConfigError::MissingInProduction(setting))
                }
                None => {
                    warn!(setting, "admin setting not configured, using development default");
                    Ok(fallback.to_owned())
                }
            }
        };

        Ok(ResolvedAdmin {
            email: pick(&self.email, "email", DEV_ADMIN_EMAIL)?,
            password: pick(&self.password, "password", DEV_ADMIN_PASSWORD)?,
            session_secret: pick(&self.session_secret, "session_secret", DEV_SESSION_SECRET)?,
            session_ttl: Duration::from_secs(self.session_ttl_secs),
            overview_limit: self.overview_limit,
            secure_cookies: profile.is_production(),
        })
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct SessionUser {
    pub email: String,
}

/// Body of `GET /api/auth/session`; `null` when signed out.
#[derive(Debug, Serialize)]
pub struct SessionDto {
    pub user: SessionUser,
    /// RFC 3339
    pub expires: String,
}

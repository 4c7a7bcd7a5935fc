use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use tracing::debug;

use crate::api::web::cookie;
use crate::domain::service::AuthService;

pub const LOGIN_PATH: &str = "/admin/login";

/// Session guard for every protected admin route. Without a valid session the
/// request never reaches the page handler; with one, the `AdminSession` is put
/// into request extensions.
pub async fn require_admin_session(
    State(auth): State<Arc<AuthService>>,
    mut req: Request,
    next: Next,
) -> Response {
    let session = cookie::session_token(req.headers()).and_then(|t| auth.authenticate(t));
    match session {
        Some(session) => {
            req.extensions_mut().insert(session);
            next.run(req).await
        }
        None => {
            debug!(path = %req.uri().path(), "no admin session, redirecting to login");
            Redirect::temporary(LOGIN_PATH).into_response()
        }
    }
}

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::SecondsFormat;
use tracing::error;

use crate::api::rest::dto::{ErrorResponse, LoginRequest, OkResponse, SessionDto, SessionUser};
use crate::api::state::AdminState;
use crate::api::web::cookie;
use crate::api::web::handlers::INVALID_CREDENTIALS;

fn error_json(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_owned(),
        }),
    )
        .into_response()
}

pub async fn login(
    State(state): State<AdminState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(req)) = payload else {
        return error_json(StatusCode::BAD_REQUEST, "Invalid request body");
    };

    match state.auth.sign_in(&req.email, &req.password) {
        Ok(Some(issued)) => {
            let set_cookie = cookie::session_cookie(
                &issued.token,
                state.auth.session_max_age_secs(),
                state.auth.secure_cookies(),
            );
            (
                [(header::SET_COOKIE, set_cookie)],
                Json(OkResponse { ok: true }),
            )
                .into_response()
        }
        Ok(None) => error_json(StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS),
        Err(e) => {
            error!(error = %e, "failed to issue admin session");
            error_json(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        }
    }
}

pub async fn logout(State(state): State<AdminState>) -> Response {
    (
        [(
            header::SET_COOKIE,
            cookie::cleared_session_cookie(state.auth.secure_cookies()),
        )],
        Json(OkResponse { ok: true }),
    )
        .into_response()
}

pub async fn session(
    State(state): State<AdminState>,
    headers: HeaderMap,
) -> Json<Option<SessionDto>> {
    let session = cookie::session_token(&headers).and_then(|t| state.auth.authenticate(t));
    Json(session.map(|s| SessionDto {
        user: SessionUser { email: s.email },
        expires: s.expires_at.to_rfc3339_opts(SecondsFormat::Secs, true),
    }))
}

use axum::routing::{get, post};
use axum::Router;

use crate::api::rest::handlers;
use crate::api::state::AdminState;

pub fn register_routes(router: Router, state: AdminState) -> Router {
    let routes = Router::new()
        .route("/api/auth/login", post(handlers::login))
        .route("/api/auth/logout", post(handlers::logout))
        .route("/api/auth/session", get(handlers::session))
        .with_state(state);
    router.merge(routes)
}

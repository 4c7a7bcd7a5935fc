use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;

use crate::api::state::AdminState;
use crate::api::web::{guard, handlers};

/// Admin pages. Everything except the login page sits behind the session guard.
pub fn register_routes(router: Router, state: AdminState) -> Router {
    let protected = Router::new()
        .route("/admin", get(handlers::overview))
        .route("/admin/contacts", get(handlers::contacts_list))
        .route("/admin/contacts/{id}", get(handlers::contact_detail))
        .route("/admin/leads", get(handlers::quote_leads_list))
        .route("/admin/leads/{id}", get(handlers::quote_lead_detail))
        .route("/admin/logout", post(handlers::logout))
        .route_layer(from_fn_with_state(
            state.auth.clone(),
            guard::require_admin_session,
        ))
        .with_state(state.clone());

    let public = Router::new()
        .route(
            guard::LOGIN_PATH,
            get(handlers::login_page).post(handlers::login_submit),
        )
        .with_state(state);

    router.merge(protected).merge(public)
}

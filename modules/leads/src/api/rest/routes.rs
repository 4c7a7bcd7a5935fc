use std::sync::Arc;

use axum::{routing::post, Extension, Router};
use utoipa::OpenApi;

use crate::api::rest::{dto, handlers};
use crate::domain::service::Service;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::submit_contact, handlers::submit_quote),
    components(schemas(
        dto::ContactSubmission,
        dto::QuoteSubmission,
        dto::ContactCreated,
        dto::QuoteCreated,
        dto::ErrorBody
    )),
    tags((name = "leads", description = "Website lead intake"))
)]
pub struct LeadsApiDoc;

pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    let routes = Router::new()
        .route("/api/contact", post(handlers::submit_contact))
        .route("/api/quote", post(handlers::submit_quote))
        .layer(Extension(service));
    router.merge(routes)
}

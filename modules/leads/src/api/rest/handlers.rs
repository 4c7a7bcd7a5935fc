use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};
use tracing::{error, info};

use crate::api::rest::dto::{
    ContactCreated, ContactSubmission, ErrorBody, QuoteCreated, QuoteSubmission,
};
use crate::api::rest::error::{map_domain_error, ApiError};
use crate::domain::service::Service;

/// Submit a contact inquiry
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "leads",
    operation_id = "leads.submit_contact",
    request_body = ContactSubmission,
    responses(
        (status = 200, description = "Contact stored", body = ContactCreated),
        (status = 400, description = "Missing required fields", body = ErrorBody),
        (status = 500, description = "Internal Server Error", body = ErrorBody)
    )
)]
pub async fn submit_contact(
    Extension(svc): Extension<Arc<Service>>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> Result<Json<ContactCreated>, ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        error!(error = %rejection.body_text(), "Unreadable contact submission");
        ApiError::internal()
    })?;

    match svc.submit_contact(req.into()).await {
        Ok(contact) => {
            info!(contact_id = %contact.id, "Contact submission accepted");
            Ok(Json(ContactCreated {
                success: true,
                contact_id: contact.id,
            }))
        }
        Err(e) => Err(map_domain_error(&e)),
    }
}

/// Submit a quote request
#[utoipa::path(
    post,
    path = "/api/quote",
    tag = "leads",
    operation_id = "leads.submit_quote",
    request_body = QuoteSubmission,
    responses(
        (status = 200, description = "Quote lead stored", body = QuoteCreated),
        (status = 400, description = "Missing required field", body = ErrorBody),
        (status = 500, description = "Internal Server Error", body = ErrorBody)
    )
)]
pub async fn submit_quote(
    Extension(svc): Extension<Arc<Service>>,
    payload: Result<Json<QuoteSubmission>, JsonRejection>,
) -> Result<Json<QuoteCreated>, ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        error!(error = %rejection.body_text(), "Unreadable quote submission");
        ApiError::internal()
    })?;

    match svc.submit_quote(req.into()).await {
        Ok(lead) => {
            info!(lead_id = %lead.id, "Quote submission accepted");
            Ok(Json(QuoteCreated {
                success: true,
                lead_id: lead.id,
            }))
        }
        Err(e) => Err(map_domain_error(&e)),
    }
}

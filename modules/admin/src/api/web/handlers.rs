use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Extension, Form};
use leads::error::LeadsError;
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::api::state::AdminState;
use crate::api::web::{cookie, guard::LOGIN_PATH, views};
use crate::domain::session::AdminSession;

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Data failure on an admin page: logged, answered with a generic 500 page.
#[derive(Debug)]
pub struct PageError(LeadsError);

impl From<LeadsError> for PageError {
    fn from(e: LeadsError) -> Self {
        Self(e)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "admin page failed to load data");
        (StatusCode::INTERNAL_SERVER_ERROR, Html(views::error_page())).into_response()
    }
}

pub async fn login_page(State(state): State<AdminState>, headers: HeaderMap) -> Response {
    let signed_in = cookie::session_token(&headers)
        .and_then(|t| state.auth.authenticate(t))
        .is_some();
    if signed_in {
        return Redirect::to("/admin").into_response();
    }
    Html(views::login_page(None, None)).into_response()
}

pub async fn login_submit(State(state): State<AdminState>, Form(form): Form<LoginForm>) -> Response {
    match state.auth.sign_in(&form.email, &form.password) {
        Ok(Some(issued)) => {
            let set_cookie = cookie::session_cookie(
                &issued.token,
                state.auth.session_max_age_secs(),
                state.auth.secure_cookies(),
            );
            ([(header::SET_COOKIE, set_cookie)], Redirect::to("/admin")).into_response()
        }
        Ok(None) => (
            StatusCode::UNAUTHORIZED,
            Html(views::login_page(Some(INVALID_CREDENTIALS), Some(form.email.as_str()))),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "failed to issue admin session");
            (StatusCode::INTERNAL_SERVER_ERROR, Html(views::error_page())).into_response()
        }
    }
}

pub async fn logout(State(state): State<AdminState>) -> Response {
    (
        [(
            header::SET_COOKIE,
            cookie::cleared_session_cookie(state.auth.secure_cookies()),
        )],
        Redirect::to(LOGIN_PATH),
    )
        .into_response()
}

pub async fn overview(
    State(state): State<AdminState>,
    Extension(session): Extension<AdminSession>,
) -> Result<Html<String>, PageError> {
    let limit = Some(state.overview_limit);
    let contacts_total = state.leads.count_contacts().await?;
    let leads_total = state.leads.count_quote_leads().await?;
    let contacts = state.leads.list_contacts(limit).await?;
    let leads = state.leads.list_quote_leads(limit).await?;
    Ok(Html(views::overview(
        &session.email,
        contacts_total,
        leads_total,
        &contacts,
        &leads,
    )))
}

pub async fn contacts_list(
    State(state): State<AdminState>,
    Extension(session): Extension<AdminSession>,
) -> Result<Html<String>, PageError> {
    let contacts = state.leads.list_contacts(None).await?;
    Ok(Html(views::contacts_page(&session.email, &contacts)))
}

pub async fn quote_leads_list(
    State(state): State<AdminState>,
    Extension(session): Extension<AdminSession>,
) -> Result<Html<String>, PageError> {
    let leads = state.leads.list_quote_leads(None).await?;
    Ok(Html(views::quote_leads_page(&session.email, &leads)))
}

/// Unknown or unparsable ids go back to the list.
pub async fn contact_detail(
    State(state): State<AdminState>,
    Extension(session): Extension<AdminSession>,
    Path(id): Path<String>,
) -> Result<Response, PageError> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Ok(Redirect::to("/admin/contacts").into_response());
    };
    Ok(match state.leads.get_contact(id).await? {
        Some(contact) => Html(views::contact_detail(&session.email, &contact)).into_response(),
        None => Redirect::to("/admin/contacts").into_response(),
    })
}

pub async fn quote_lead_detail(
    State(state): State<AdminState>,
    Extension(session): Extension<AdminSession>,
    Path(id): Path<String>,
) -> Result<Response, PageError> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Ok(Redirect::to("/admin/leads").into_response());
    };
    Ok(match state.leads.get_quote_lead(id).await? {
        Some(lead) => Html(views::quote_lead_detail(&session.email, &lead)).into_response(),
        None => Redirect::to("/admin/leads").into_response(),
    })
}

#![allow(dead_code)]

use std::sync::Arc;

use admin::{Admin, AdminConfig};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use chrono::{Duration, TimeZone, Utc};
use leads::contract::{Contact, LeadsApi, LeadsError, QuoteLead};
use runtime::RunProfile;
use tower::ServiceExt;
use uuid::Uuid;

pub const EMAIL: &str = "boss@marine.test";
pub const PASSWORD: &str = "correct horse";

/// In-memory `LeadsApi`; lists are kept newest-first.
#[derive(Default)]
pub struct FakeLeads {
    pub contacts: Vec<Contact>,
    pub leads: Vec<QuoteLead>,
    pub broken: bool,
}

impl FakeLeads {
    fn check(&self) -> Result<(), LeadsError> {
        if self.broken {
            Err(LeadsError::Internal)
        } else {
            Ok(())
        }
    }
}

fn take<T: Clone>(items: &[T], limit: Option<u64>) -> Vec<T> {
    let n = limit.map_or(items.len(), |l| items.len().min(l as usize));
    items[..n].to_vec()
}

#[async_trait]
impl LeadsApi for FakeLeads {
    async fn list_contacts(&self, limit: Option<u64>) -> Result<Vec<Contact>, LeadsError> {
        self.check()?;
        Ok(take(&self.contacts, limit))
    }

    async fn list_quote_leads(&self, limit: Option<u64>) -> Result<Vec<QuoteLead>, LeadsError> {
        self.check()?;
        Ok(take(&self.leads, limit))
    }

    async fn get_contact(&self, id: Uuid) -> Result<Option<Contact>, LeadsError> {
        self.check()?;
        Ok(self.contacts.iter().find(|c| c.id == id).cloned())
    }

    async fn get_quote_lead(&self, id: Uuid) -> Result<Option<QuoteLead>, LeadsError> {
        self.check()?;
        Ok(self.leads.iter().find(|q| q.id == id).cloned())
    }

    async fn count_contacts(&self) -> Result<u64, LeadsError> {
        self.check()?;
        Ok(self.contacts.len() as u64)
    }

    async fn count_quote_leads(&self) -> Result<u64, LeadsError> {
        self.check()?;
        Ok(self.leads.len() as u64)
    }
}

pub fn contact(n: i64) -> Contact {
    Contact {
        id: Uuid::new_v4(),
        name: format!("Customer {n}"),
        email: format!("c{n}@example.com"),
        phone: None,
        engine_type: None,
        message: "Looking for a 300hp outboard".into(),
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() - Duration::hours(n),
    }
}

pub fn quote_lead(n: i64) -> QuoteLead {
    QuoteLead {
        id: Uuid::new_v4(),
        full_name: format!("Captain {n}"),
        phone: "+97150000000".into(),
        email: format!("q{n}@example.com"),
        city: "Muscat".into(),
        engine_type: "inboard".into(),
        power_range: "300+".into(),
        usage: "charter".into(),
        engine_count: "2".into(),
        vessel_type: "catamaran".into(),
        vessel_length: Some("12m".into()),
        vessel_year: None,
        current_engine: None,
        timeline: "6 months".into(),
        budget: None,
        priority: "service".into(),
        additional_requirements: None,
        preferred_contact: "email".into(),
        previous_experience: None,
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() - Duration::hours(n),
    }
}

pub fn config() -> AdminConfig {
    AdminConfig {
        email: Some(EMAIL.into()),
        password: Some(PASSWORD.into()),
        session_secret: Some("test-signing-key".into()),
        ..Default::default()
    }
}

pub fn app(leads: FakeLeads) -> Router {
    app_with(Arc::new(leads))
}

pub fn app_with(leads: Arc<dyn LeadsApi>) -> Router {
    Admin::new(&config(), RunProfile::Development, leads)
        .expect("admin module")
        .register_rest(Router::new())
}

pub async fn send(app: &Router, req: Request<Body>) -> Response<Body> {
    app.clone().oneshot(req).await.unwrap()
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(c) = cookie {
        builder = builder.header(header::COOKIE, c);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

pub fn location(res: &Response<Body>) -> Option<&str> {
    res.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

/// `name=value` part of the response's Set-Cookie header.
pub fn cookie_pair(res: &Response<Body>) -> Option<String> {
    res.headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_owned)
}

pub async fn body_text(res: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Sign in through the login form and return the session cookie pair.
pub async fn sign_in(app: &Router) -> String {
    let res = send(
        app,
        form_post(
            "/admin/login",
            "email=boss%40marine.test&password=correct+horse",
        ),
    )
    .await;
    cookie_pair(&res).expect("session cookie")
}

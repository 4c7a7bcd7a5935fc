#![allow(dead_code)]

use std::sync::Arc;

use api_ingress::{ApiIngress, ApiIngressConfig};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use db::{ConnectOpts, DbHandle};
use leads::Leads;
use tower::ServiceExt;

/// Fresh in-memory database with the leads schema applied.
pub async fn migrated_db() -> Arc<DbHandle> {
    let db = DbHandle::connect("sqlite::memory:", ConnectOpts::default())
        .await
        .expect("connect in-memory sqlite");
    Leads::migrate(&db).await.expect("run migrations");
    Arc::new(db)
}

pub fn app(leads: &Leads) -> Router {
    let ingress = ApiIngress::new(ApiIngressConfig::default());
    let routes = leads.register_rest(Router::new(), &ingress);
    ingress.build_router(routes)
}

pub async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_owned()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

pub fn full_quote() -> serde_json::Value {
    serde_json::json!({
        "fullName": "Khalid Al Mansoori",
        "phone": "+971501234567",
        "email": "khalid@example.com",
        "city": "Abu Dhabi",
        "engineType": "outboard",
        "powerRange": "200-300",
        "usage": "leisure",
        "engineCount": 2,
        "vesselType": "yacht tender",
        "timeline": "immediately",
        "priority": "reliability",
        "preferredContact": "phone"
    })
}

pub const QUOTE_REQUIRED: [&str; 12] = [
    "fullName",
    "phone",
    "email",
    "city",
    "engineType",
    "powerRange",
    "usage",
    "engineCount",
    "vesselType",
    "timeline",
    "priority",
    "preferredContact",
];

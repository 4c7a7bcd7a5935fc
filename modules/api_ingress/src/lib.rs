//! HTTP host for the leads server.
//!
//! Owns the middleware stack (request ids, tracing, timeout, CORS, body limit),
//! collects the OpenAPI fragments contributed by modules and runs the axum
//! server until the shutdown token fires.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::{middleware::from_fn, routing::get, Json, Router};
use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use utoipa::openapi::{InfoBuilder, OpenApi, OpenApiBuilder};

mod config;
pub mod request_id;
mod web;

pub use config::ApiIngressConfig;

pub struct ApiIngress {
    config: ApiIngressConfig,
    openapi: Mutex<OpenApi>,
}

impl Default for ApiIngress {
    fn default() -> Self {
        Self::new(ApiIngressConfig::default())
    }
}

impl ApiIngress {
    pub fn new(config: ApiIngressConfig) -> Self {
        let doc = OpenApiBuilder::new()
            .info(
                InfoBuilder::new()
                    .title("Marine Leads API")
                    .version(env!("CARGO_PKG_VERSION"))
                    .description(Some("Lead intake and admin endpoints"))
                    .build(),
            )
            .build();
        Self {
            config,
            openapi: Mutex::new(doc),
        }
    }

    pub fn config(&self) -> &ApiIngressConfig {
        &self.config
    }

    /// Merge a module's OpenAPI fragment into the served document.
    pub fn register_openapi(&self, doc: OpenApi) {
        let paths = doc.paths.paths.len();
        self.openapi.lock().merge(doc);
        tracing::debug!(paths, "registered OpenAPI fragment");
    }

    pub fn openapi(&self) -> OpenApi {
        self.openapi.lock().clone()
    }

    /// Wrap module routes with the built-in endpoints and the middleware stack.
    pub fn build_router(&self, routes: Router) -> Router {
        let config = &self.config;
        let mut router = routes.route("/health", get(web::health_check));

        if config.enable_docs {
            let doc = Arc::new(serde_json::to_value(self.openapi()).unwrap_or_default());
            router = router
                .route(
                    "/openapi.json",
                    get(move || {
                        let doc = doc.clone();
                        async move {
                            ([(header::CACHE_CONTROL, "no-store")], Json((*doc).clone()))
                                .into_response()
                        }
                    }),
                )
                .route("/docs", get(web::serve_docs));
            tracing::info!("API docs served at /docs");
        }

        // Innermost first: these two sit closest to the handlers.
        router = router.layer(RequestBodyLimitLayer::new(config.body_limit_bytes));
        if config.cors_enabled {
            router = router.layer(CorsLayer::permissive());
        }

        let x_request_id = request_id::header();
        router.layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(
                    x_request_id.clone(),
                    request_id::MakeReqId,
                ))
                .layer(PropagateRequestIdLayer::new(x_request_id))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(request_id::make_request_span)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(tracing::Level::INFO)
                                .latency_unit(LatencyUnit::Millis),
                        ),
                )
                .layer(from_fn(request_id::push_req_id_to_extensions))
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    Duration::from_secs(config.request_timeout_sec),
                )),
        )
    }

    /// Bind and serve until `cancel` fires, then drain in-flight requests.
    pub async fn serve(
        &self,
        router: Router,
        addr: SocketAddr,
        cancel: CancellationToken,
    ) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("HTTP server bound on {}", addr);

        let shutdown = async move {
            cancel.cancelled().await;
            tracing::info!("HTTP server shutting down gracefully");
        };

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| anyhow::anyhow!(e))
    }
}

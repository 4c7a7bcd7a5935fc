use std::sync::Arc;

use leads::contract::LeadsApi;
use runtime::RunProfile;
use tracing::info;

use crate::api::{rest, web, AdminState};
use crate::config::AdminConfig;
use crate::domain::service::AuthService;

/// Admin panel wiring: resolves the admin identity for the active profile and
/// mounts the guarded pages plus the JSON auth endpoints.
#[derive(Clone)]
pub struct Admin {
    state: AdminState,
}

impl Admin {
    pub fn new(
        config: &AdminConfig,
        profile: RunProfile,
        leads: Arc<dyn LeadsApi>,
    ) -> anyhow::Result<Self> {
        info!("Initializing admin module");
        let resolved = config.resolve(profile)?;
        info!(
            admin = %resolved.email,
            session_ttl_secs = resolved.session_ttl.as_secs(),
            "Admin identity configured"
        );
        Ok(Self {
            state: AdminState {
                auth: Arc::new(AuthService::new(&resolved)),
                leads,
                overview_limit: resolved.overview_limit,
            },
        })
    }

    pub fn register_rest(&self, router: axum::Router) -> axum::Router {
        let router = web::routes::register_routes(router, self.state.clone());
        let router = rest::routes::register_routes(router, self.state.clone());
        info!("Admin routes registered");
        router
    }
}

use std::sync::Arc;

use api_ingress::ApiIngress;
use sea_orm_migration::MigratorTrait;
use tracing::info;
use utoipa::OpenApi;

use crate::api::rest::routes::{self, LeadsApiDoc};
use crate::contract::client::LeadsApi;
use crate::domain::service::Service;
use crate::gateways::local::LeadsLocalClient;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::SeaOrmLeadsRepository;

/// Lead intake module: storage, domain service, REST routes and the
/// in-process `LeadsApi` client.
#[derive(Clone)]
pub struct Leads {
    service: Arc<Service>,
}

impl Leads {
    pub fn new(db: &db::DbHandle) -> Self {
        info!("Initializing leads module");
        let repo = SeaOrmLeadsRepository::new(db.sea());
        Self {
            service: Arc::new(Service::new(Arc::new(repo))),
        }
    }

    pub async fn migrate(db: &db::DbHandle) -> anyhow::Result<()> {
        info!("Running leads database migrations");
        Migrator::up(&db.sea(), None).await?;
        info!("Leads database migrations completed");
        Ok(())
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    pub fn client(&self) -> Arc<dyn LeadsApi> {
        Arc::new(LeadsLocalClient::new(self.service.clone()))
    }

    /// Mount the intake endpoints and publish their OpenAPI fragment.
    pub fn register_rest(&self, router: axum::Router, ingress: &ApiIngress) -> axum::Router {
        ingress.register_openapi(LeadsApiDoc::openapi());
        let router = routes::register_routes(router, self.service.clone());
        info!("Leads REST routes registered");
        router
    }
}

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::contract::{
    client::LeadsApi,
    error::LeadsError,
    model::{Contact, QuoteLead},
};
use crate::domain::service::Service;

/// In-process `LeadsApi` that delegates to the domain service.
pub struct LeadsLocalClient {
    service: Arc<Service>,
}

impl LeadsLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl LeadsApi for LeadsLocalClient {
    async fn list_contacts(&self, limit: Option<u64>) -> Result<Vec<Contact>, LeadsError> {
        self.service.list_contacts(limit).await.map_err(Into::into)
    }

    async fn list_quote_leads(&self, limit: Option<u64>) -> Result<Vec<QuoteLead>, LeadsError> {
        self.service
            .list_quote_leads(limit)
            .await
            .map_err(Into::into)
    }

    async fn get_contact(&self, id: Uuid) -> Result<Option<Contact>, LeadsError> {
        self.service.get_contact(id).await.map_err(Into::into)
    }

    async fn get_quote_lead(&self, id: Uuid) -> Result<Option<QuoteLead>, LeadsError> {
        self.service.get_quote_lead(id).await.map_err(Into::into)
    }

    async fn count_contacts(&self) -> Result<u64, LeadsError> {
        self.service.count_contacts().await.map_err(Into::into)
    }

    async fn count_quote_leads(&self) -> Result<u64, LeadsError> {
        self.service.count_quote_leads().await.map_err(Into::into)
    }
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::contract::{
    error::LeadsError,
    model::{Contact, QuoteLead},
};

/// Read-side API of the leads module for other modules.
///
/// Lists are newest-first by `created_at`; `limit: None` returns every record.
/// Lookups return `Ok(None)` for unknown ids.
#[async_trait]
pub trait LeadsApi: Send + Sync {
    async fn list_contacts(&self, limit: Option<u64>) -> Result<Vec<Contact>, LeadsError>;

    async fn list_quote_leads(&self, limit: Option<u64>) -> Result<Vec<QuoteLead>, LeadsError>;

    async fn get_contact(&self, id: Uuid) -> Result<Option<Contact>, LeadsError>;

    async fn get_quote_lead(&self, id: Uuid) -> Result<Option<QuoteLead>, LeadsError>;

    async fn count_contacts(&self) -> Result<u64, LeadsError>;

    async fn count_quote_leads(&self) -> Result<u64, LeadsError>;
}

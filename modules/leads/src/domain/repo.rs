use async_trait::async_trait;
use uuid::Uuid;

use crate::contract::model::{Contact, QuoteLead};

/// Persistence port for the leads domain.
#[async_trait]
pub trait LeadsRepository: Send + Sync {
    /// Insert a fully-formed contact. Service assigns id and timestamp.
    async fn insert_contact(&self, c: Contact) -> anyhow::Result<()>;
    async fn insert_quote_lead(&self, q: QuoteLead) -> anyhow::Result<()>;

    /// Newest-first by `created_at`; `None` means no limit.
    async fn list_contacts(&self, limit: Option<u64>) -> anyhow::Result<Vec<Contact>>;
    async fn list_quote_leads(&self, limit: Option<u64>) -> anyhow::Result<Vec<QuoteLead>>;

    async fn find_contact(&self, id: Uuid) -> anyhow::Result<Option<Contact>>;
    async fn find_quote_lead(&self, id: Uuid) -> anyhow::Result<Option<QuoteLead>>;

    async fn count_contacts(&self) -> anyhow::Result<u64>;
    async fn count_quote_leads(&self) -> anyhow::Result<u64>;
}

//! SeaORM-backed repository for contacts and quote leads.
//!
//! Generic over `C: ConnectionTrait`, so a `DatabaseConnection` or a
//! transaction can back it.

use anyhow::Context;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect};
use uuid::Uuid;

use crate::contract::model::{Contact, QuoteLead};
use crate::domain::repo::LeadsRepository;
use crate::infra::storage::entity::{contact, quote_lead};

pub struct SeaOrmLeadsRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmLeadsRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl<C> LeadsRepository for SeaOrmLeadsRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn insert_contact(&self, c: Contact) -> anyhow::Result<()> {
        let m: contact::ActiveModel = c.into();
        m.insert(&self.conn)
            .await
            .context("insert contact failed")?;
        Ok(())
    }

    async fn insert_quote_lead(&self, q: QuoteLead) -> anyhow::Result<()> {
        let m: quote_lead::ActiveModel = q.into();
        m.insert(&self.conn)
            .await
            .context("insert quote lead failed")?;
        Ok(())
    }

    async fn list_contacts(&self, limit: Option<u64>) -> anyhow::Result<Vec<Contact>> {
        let rows = contact::Entity::find()
            .order_by_desc(contact::Column::CreatedAt)
            .limit(limit)
            .all(&self.conn)
            .await
            .context("list contacts failed")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_quote_leads(&self, limit: Option<u64>) -> anyhow::Result<Vec<QuoteLead>> {
        let rows = quote_lead::Entity::find()
            .order_by_desc(quote_lead::Column::CreatedAt)
            .limit(limit)
            .all(&self.conn)
            .await
            .context("list quote leads failed")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_contact(&self, id: Uuid) -> anyhow::Result<Option<Contact>> {
        let found = contact::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find contact failed")?;
        Ok(found.map(Into::into))
    }

    async fn find_quote_lead(&self, id: Uuid) -> anyhow::Result<Option<QuoteLead>> {
        let found = quote_lead::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find quote lead failed")?;
        Ok(found.map(Into::into))
    }

    async fn count_contacts(&self) -> anyhow::Result<u64> {
        contact::Entity::find()
            .count(&self.conn)
            .await
            .context("count contacts failed")
    }

    async fn count_quote_leads(&self) -> anyhow::Result<u64> {
        quote_lead::Entity::find()
            .count(&self.conn)
            .await
            .context("count quote leads failed")
    }
}

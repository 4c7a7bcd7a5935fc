use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::contract::model::{Contact, NewContact, NewQuoteLead, QuoteLead};
use crate::domain::error::DomainError;
use crate::domain::repo::LeadsRepository;

/// Intake and read rules for contacts and quote leads.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn LeadsRepository>,
}

impl Service {
    pub fn new(repo: Arc<dyn LeadsRepository>) -> Self {
        Self { repo }
    }

    #[instrument(name = "leads.service.submit_contact", skip_all)]
    pub async fn submit_contact(&self, new_contact: NewContact) -> Result<Contact, DomainError> {
        if new_contact.name.is_empty()
            || new_contact.email.is_empty()
            || new_contact.message.is_empty()
        {
            debug!("Rejecting contact with missing fields");
            return Err(DomainError::MissingContactFields);
        }

        let contact = Contact {
            id: Uuid::new_v4(),
            name: new_contact.name,
            email: new_contact.email,
            phone: new_contact.phone,
            engine_type: new_contact.engine_type,
            message: new_contact.message,
            created_at: Utc::now(),
        };

        self.repo
            .insert_contact(contact.clone())
            .await
            .map_err(|e| DomainError::database(format!("{e:#}")))?;

        info!(contact_id = %contact.id, "Contact stored");
        Ok(contact)
    }

    #[instrument(name = "leads.service.submit_quote", skip_all)]
    pub async fn submit_quote(&self, new_lead: NewQuoteLead) -> Result<QuoteLead, DomainError> {
        if let Some(field) = first_missing_quote_field(&new_lead) {
            debug!(field, "Rejecting quote with missing field");
            return Err(DomainError::missing_field(field));
        }

        let lead = QuoteLead {
            id: Uuid::new_v4(),
            full_name: new_lead.full_name,
            phone: new_lead.phone,
            email: new_lead.email,
            city: new_lead.city,
            engine_type: new_lead.engine_type,
            power_range: new_lead.power_range,
            usage: new_lead.usage,
            engine_count: new_lead.engine_count,
            vessel_type: new_lead.vessel_type,
            vessel_length: new_lead.vessel_length,
            vessel_year: new_lead.vessel_year,
            current_engine: new_lead.current_engine,
            timeline: new_lead.timeline,
            budget: new_lead.budget,
            priority: new_lead.priority,
            additional_requirements: new_lead.additional_requirements,
            preferred_contact: new_lead.preferred_contact,
            previous_experience: new_lead.previous_experience,
            created_at: Utc::now(),
        };

        self.repo
            .insert_quote_lead(lead.clone())
            .await
            .map_err(|e| DomainError::database(format!("{e:#}")))?;

        info!(lead_id = %lead.id, "Quote lead stored");
        Ok(lead)
    }

    #[instrument(name = "leads.service.list_contacts", skip(self))]
    pub async fn list_contacts(&self, limit: Option<u64>) -> Result<Vec<Contact>, DomainError> {
        let rows = self
            .repo
            .list_contacts(limit)
            .await
            .map_err(|e| DomainError::database(format!("{e:#}")))?;
        debug!("Listed {} contacts", rows.len());
        Ok(rows)
    }

    #[instrument(name = "leads.service.list_quote_leads", skip(self))]
    pub async fn list_quote_leads(
        &self,
        limit: Option<u64>,
    ) -> Result<Vec<QuoteLead>, DomainError> {
        let rows = self
            .repo
            .list_quote_leads(limit)
            .await
            .map_err(|e| DomainError::database(format!("{e:#}")))?;
        debug!("Listed {} quote leads", rows.len());
        Ok(rows)
    }

    #[instrument(name = "leads.service.get_contact", skip(self), fields(contact_id = %id))]
    pub async fn get_contact(&self, id: Uuid) -> Result<Option<Contact>, DomainError> {
        self.repo
            .find_contact(id)
            .await
            .map_err(|e| DomainError::database(format!("{e:#}")))
    }

    #[instrument(name = "leads.service.get_quote_lead", skip(self), fields(lead_id = %id))]
    pub async fn get_quote_lead(&self, id: Uuid) -> Result<Option<QuoteLead>, DomainError> {
        self.repo
            .find_quote_lead(id)
            .await
            .map_err(|e| DomainError::database(format!("{e:#}")))
    }

    pub async fn count_contacts(&self) -> Result<u64, DomainError> {
        self.repo
            .count_contacts()
            .await
            .map_err(|e| DomainError::database(format!("{e:#}")))
    }

    pub async fn count_quote_leads(&self) -> Result<u64, DomainError> {
        self.repo
            .count_quote_leads()
            .await
            .map_err(|e| DomainError::database(format!("{e:#}")))
    }
}

/// Required quote fields are checked in this order; the first gap is reported
/// by its wire name.
fn first_missing_quote_field(q: &NewQuoteLead) -> Option<&'static str> {
    let required: [(&'static str, &str); 12] = [
        ("fullName", &q.full_name),
        ("phone", &q.phone),
        ("email", &q.email),
        ("city", &q.city),
        ("engineType", &q.engine_type),
        ("powerRange", &q.power_range),
        ("usage", &q.usage),
        ("engineCount", &q.engine_count),
        ("vesselType", &q.vessel_type),
        ("timeline", &q.timeline),
        ("priority", &q.priority),
        ("preferredContact", &q.preferred_contact),
    ];
    required
        .iter()
        .find(|(_, value)| value.is_empty())
        .map(|(field, _)| *field)
}

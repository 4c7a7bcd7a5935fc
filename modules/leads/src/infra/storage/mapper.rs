use sea_orm::Set;

use crate::contract::model::{Contact, QuoteLead};
use crate::infra::storage::entity::{contact, quote_lead};

impl From<contact::Model> for Contact {
    fn from(m: contact::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            phone: m.phone,
            engine_type: m.engine_type,
            message: m.message,
            created_at: m.created_at,
        }
    }
}

impl From<Contact> for contact::ActiveModel {
    fn from(c: Contact) -> Self {
        Self {
            id: Set(c.id),
            name: Set(c.name),
            email: Set(c.email),
            phone: Set(c.phone),
            engine_type: Set(c.engine_type),
            message: Set(c.message),
            created_at: Set(c.created_at),
        }
    }
}

impl From<quote_lead::Model> for QuoteLead {
    fn from(m: quote_lead::Model) -> Self {
        Self {
            id: m.id,
            full_name: m.full_name,
            phone: m.phone,
            email: m.email,
            city: m.city,
            engine_type: m.engine_type,
            power_range: m.power_range,
            usage: m.usage,
            engine_count: m.engine_count,
            vessel_type: m.vessel_type,
            vessel_length: m.vessel_length,
            vessel_year: m.vessel_year,
            current_engine: m.current_engine,
            timeline: m.timeline,
            budget: m.budget,
            priority: m.priority,
            additional_requirements: m.additional_requirements,
            preferred_contact: m.preferred_contact,
            previous_experience: m.previous_experience,
            created_at: m.created_at,
        }
    }
}

impl From<QuoteLead> for quote_lead::ActiveModel {
    fn from(q: QuoteLead) -> Self {
        Self {
            id: Set(q.id),
            full_name: Set(q.full_name),
            phone: Set(q.phone),
            email: Set(q.email),
            city: Set(q.city),
            engine_type: Set(q.engine_type),
            power_range: Set(q.power_range),
            usage: Set(q.usage),
            engine_count: Set(q.engine_count),
            vessel_type: Set(q.vessel_type),
            vessel_length: Set(q.vessel_length),
            vessel_year: Set(q.vessel_year),
            current_engine: Set(q.current_engine),
            timeline: Set(q.timeline),
            budget: Set(q.budget),
            priority: Set(q.priority),
            additional_requirements: Set(q.additional_requirements),
            preferred_contact: Set(q.preferred_contact),
            previous_experience: Set(q.previous_experience),
            created_at: Set(q.created_at),
        }
    }
}

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Free-text customer inquiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub engine_type: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Structured quote request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteLead {
    pub id: Uuid,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub city: String,
    pub engine_type: String,
    pub power_range: String,
    pub usage: String,
    pub engine_count: String,
    pub vessel_type: String,
    pub vessel_length: Option<String>,
    pub vessel_year: Option<String>,
    pub current_engine: Option<String>,
    pub timeline: String,
    pub budget: Option<String>,
    pub priority: String,
    pub additional_requirements: Option<String>,
    pub preferred_contact: String,
    pub previous_experience: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Contact submission before validation. An empty required field means "not supplied".
#[derive(Debug, Clone, Default)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub engine_type: Option<String>,
    pub message: String,
}

/// Quote submission before validation. An empty required field means "not supplied".
#[derive(Debug, Clone, Default)]
pub struct NewQuoteLead {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub city: String,
    pub engine_type: String,
    pub power_range: String,
    pub usage: String,
    pub engine_count: String,
    pub vessel_type: String,
    pub vessel_length: Option<String>,
    pub vessel_year: Option<String>,
    pub current_engine: Option<String>,
    pub timeline: String,
    pub budget: Option<String>,
    pub priority: String,
    pub additional_requirements: Option<String>,
    pub preferred_contact: String,
    pub previous_experience: Option<String>,
}

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "quote_leads")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
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
    #[sea_orm(column_type = "Text", nullable)]
    pub additional_requirements: Option<String>,
    pub preferred_contact: String,
    pub previous_experience: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

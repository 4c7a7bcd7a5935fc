pub mod contact;
pub mod quote_lead;

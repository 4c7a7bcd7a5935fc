pub mod client;
pub mod error;
pub mod model;

pub use client::LeadsApi;
pub use error::LeadsError;
pub use model::{Contact, NewContact, NewQuoteLead, QuoteLead};

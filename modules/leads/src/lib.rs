// === PUBLIC CONTRACT ===
// Other modules (admin) consume leads through `contract` only.
pub mod contract;

pub use contract::{client, error, model};

pub mod module;
pub use module::Leads;

// === INTERNAL MODULES ===
// Exposed for integration tests; not a stable API.
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod gateways;
#[doc(hidden)]
pub mod infra;

use std::sync::Arc;

use leads::contract::LeadsApi;

use crate::domain::service::AuthService;

/// Shared state for admin pages and auth endpoints.
#[derive(Clone)]
pub struct AdminState {
    pub auth: Arc<AuthService>,
    pub leads: Arc<dyn LeadsApi>,
    pub overview_limit: u64,
}

//! Admin panel: one configured identity, signed session cookies, a session
//! guard on every `/admin/*` page and read-only HTML views over the leads
//! contract.

pub mod config;
pub mod module;

pub use config::{AdminConfig, AdminConfigError, ResolvedAdmin};
pub use module::Admin;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;

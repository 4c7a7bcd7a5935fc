pub mod rest;
pub mod state;
pub mod web;

pub use state::AdminState;

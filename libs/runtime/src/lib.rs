//! Process-level runtime support: layered configuration and logging.

pub mod config;
pub mod logging;
pub mod paths;

pub use config::{
    AppConfig, AppConfigProvider, CliArgs, ConfigProvider, DatabaseConfig, LoggingConfig,
    RunProfile, Section, ServerConfig,
};

mod file_config;

pub use file_config::FileConfig;

use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Result};
use clap::ValueEnum;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let port = file.port.unwrap_or(cli.port);
        let metrics_port = file.metrics_port.unwrap_or(cli.metrics_port);

        let logging_level = match file.logging_level {
            Some(value) => match parse_logging_level(&value) {
                Some(level) => level,
                None => bail!("Invalid logging_level in config file: {}", value),
            },
            None => cli.logging_level.clone(),
        };

        Ok(Self {
            port,
            metrics_port,
            logging_level,
        })
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}

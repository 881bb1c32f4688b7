//! Environment configuration
//!
//! Reads server and audit settings from environment variables, falling back
//! to development defaults.

use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::Level;

/// Actor recorded on update logs until requests carry an authenticated user
pub const DEFAULT_AUDIT_ACTOR: &str = "Admin";

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub audit_actor: String,
    pub log_level: Level,
    pub run_migrations: bool,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            cors_origins: Vec::new(),
            audit_actor: DEFAULT_AUDIT_ACTOR.to_string(),
            log_level: Level::INFO,
            run_migrations: true,
        }
    }
}

fn parsed<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: {}", name, raw)),
        Err(_) => Ok(default),
    }
}

impl EnvironmentConfig {
    /// Build the configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parsed("PORT", defaults.port)?,
            cors_origins: env::var("CORS_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or(defaults.cors_origins),
            audit_actor: env::var("AUDIT_ACTOR")
                .ok()
                .filter(|actor| !actor.trim().is_empty())
                .unwrap_or(defaults.audit_actor),
            log_level: parsed("LOG_LEVEL", defaults.log_level)?,
            run_migrations: parsed("RUN_MIGRATIONS", defaults.run_migrations)?,
        })
    }

    /// Address the server binds to
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

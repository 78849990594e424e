//! Environment-driven configuration

use std::env;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATABASE_URL: &str = "host=localhost user=postgres dbname=fitness_tracker";

/// Deployment environment (`APP_ENV`), defaults to `sandbox`
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

pub fn get_database_url() -> String {
    env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

pub fn get_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Whether the default goal set is inserted into an empty goal table on startup
pub fn seed_default_goals() -> bool {
    env::var("SEED_DEFAULT_GOALS")
        .map(|v| parse_flag(&v))
        .unwrap_or(true)
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

/// Server configuration snapshot
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub port: u16,
    pub database_url: String,
    pub seed_default_goals: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            environment: get_environment(),
            port: get_port(),
            database_url: get_database_url(),
            seed_default_goals: seed_default_goals(),
        }
    }

    pub fn is_production(&self) -> bool {
        is_production(&self.environment)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "sandbox".to_string(),
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            seed_default_goals: true,
        }
    }
}

pub fn is_production(environment: &str) -> bool {
    matches!(environment, "production" | "prod")
}

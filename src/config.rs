use serde::{Deserialize, Serialize};

use crate::utils::constants::{DEFAULT_BOOKS_API_URL, DEFAULT_GRAPHQL_URL};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub graphql_url: String,
    pub books_api_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub description_preview_chars: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            graphql_url: DEFAULT_GRAPHQL_URL.to_string(),
            books_api_url: DEFAULT_BOOKS_API_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            description_preview_chars: 90,
        }
    }
}

impl AppConfig {
    /// Builds the configuration from variables baked in at compile time (see build.rs)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            graphql_url: option_env!("GRAPHQL_URL")
                .map(str::to_string)
                .unwrap_or(defaults.graphql_url),
            books_api_url: option_env!("BOOKS_API_URL")
                .map(str::to_string)
                .unwrap_or(defaults.books_api_url),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            description_preview_chars: option_env!("DESCRIPTION_PREVIEW_CHARS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.description_preview_chars),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Debug while developing, Info in production, Warn when logging is off
    pub fn log_level(&self) -> log::Level {
        match (self.enable_logging, self.is_production()) {
            (false, _) => log::Level::Warn,
            (true, true) => log::Level::Info,
            (true, false) => log::Level::Debug,
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

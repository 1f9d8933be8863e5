// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use std::env;

const DEFAULT_SITE_TITLE: &str = "José Josenildo da Silva - Mestre de Cabotagem";
const DEFAULT_SITE_DESCRIPTION: &str = "Portfolio of Senior Bosun José Josenildo da Silva";

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Supabase project URL (e.g., "https://<project>.supabase.co")
    pub supabase_url: String,

    /// Supabase anon key, sent as both `apikey` and bearer token
    pub supabase_key: String,

    /// Server bind address (e.g., "127.0.0.1")
    pub server_address: String,

    /// Server listen port (default 3001)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Public URL of the portfolio front end
    pub site_url: String,

    pub site_title: String,
    pub site_description: String,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        // Load .env file if it exists
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup, applying defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Config {
            supabase_url: or("SUPABASE_URL", "").trim_end_matches('/').to_string(),

            supabase_key: lookup("SUPABASE_KEY")
                .or_else(|| lookup("SUPABASE_ANON_KEY"))
                .unwrap_or_default(),

            server_address: or("SERVER_ADDRESS", "127.0.0.1"),

            server_port: or("SERVER_PORT", "3001").parse().unwrap_or(3001),

            environment: or("ENVIRONMENT", "development"),

            log_level: or("LOG_LEVEL", "info"),

            site_url: or("NUXT_PUBLIC_SITE_URL", "http://localhost:3000"),

            site_title: or("SITE_TITLE", DEFAULT_SITE_TITLE),

            site_description: or("SITE_DESCRIPTION", DEFAULT_SITE_DESCRIPTION),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures application can start safely
    pub fn validate(&self) -> Result<(), String> {
        if self.supabase_url.is_empty() {
            return Err("SUPABASE_URL is required".to_string());
        }

        if !self.supabase_url.starts_with("http://") && !self.supabase_url.starts_with("https://")
        {
            return Err(format!(
                "SUPABASE_URL must be an http(s) URL, got {}",
                self.supabase_url
            ));
        }

        if self.supabase_key.is_empty() {
            log::warn!("SUPABASE_KEY not configured - row level security will reject reads");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);

        assert_eq!(config.server_address, "127.0.0.1");
        assert_eq!(config.server_port, 3001);
        assert_eq!(config.environment, "development");
        assert_eq!(config.site_url, "http://localhost:3000");
        assert_eq!(config.site_title, DEFAULT_SITE_TITLE);
        assert!(config.supabase_url.is_empty());
    }

    #[test]
    fn test_anon_key_fallback_and_trailing_slash() {
        let config = config_from(&[
            ("SUPABASE_URL", "https://example.supabase.co/"),
            ("SUPABASE_ANON_KEY", "anon"),
            ("SERVER_PORT", "not-a-port"),
        ]);

        assert_eq!(config.supabase_url, "https://example.supabase.co");
        assert_eq!(config.supabase_key, "anon");
        assert_eq!(config.server_port, 3001);
    }

    #[test]
    fn test_validate() {
        assert!(config_from(&[]).validate().is_err());
        assert!(config_from(&[("SUPABASE_URL", "example.supabase.co")])
            .validate()
            .is_err());
        assert!(config_from(&[("SUPABASE_URL", "https://example.supabase.co")])
            .validate()
            .is_ok());
    }
}

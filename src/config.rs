// src/config.rs

use std::env;
use dotenvy::dotenv;

const DEFAULT_DATABASE_URL: &str = "sqlite://quiz_engine.db";
const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8889";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_addr: String,
    pub rust_log: String,
    pub db_max_connections: u32,
    /// Browser origins allowed by CORS. Empty means no cross-origin access.
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let server_addr = env::var("SERVER_ADDR")
            .unwrap_or_else(|_| DEFAULT_SERVER_ADDR.to_string());

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let db_max_connections = match env::var("DB_MAX_CONNECTIONS") {
            Ok(raw) => raw.parse::<u32>().unwrap_or_else(|_| {
                // Subscriber is not installed yet, so this goes to stderr.
                eprintln!(
                    "DB_MAX_CONNECTIONS={raw} is not a valid number, using {DEFAULT_MAX_CONNECTIONS}"
                );
                DEFAULT_MAX_CONNECTIONS
            }),
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_default();

        Self {
            database_url,
            server_addr,
            rust_log,
            db_max_connections,
            cors_allowed_origins,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            server_addr: DEFAULT_SERVER_ADDR.to_string(),
            rust_log: "info".to_string(),
            db_max_connections: DEFAULT_MAX_CONNECTIONS,
            cors_allowed_origins: Vec::new(),
        }
    }
}

/// Splits a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_split_and_trimmed() {
        assert_eq!(
            parse_origins(" http://a.test , ,http://b.test:8080"),
            vec!["http://a.test", "http://b.test:8080"]
        );
        assert!(parse_origins("").is_empty());
    }
}

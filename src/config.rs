use std::env;

/// Service configuration, read from environment variables.
///
/// The variable names and defaults match the original deployment surface:
/// DATABASE_URL, DEBUG, ALLOWED_HOST and CORS_ORIGIN. The two list-valued
/// variables are comma-separated.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Connection string for the record store
    pub database_url: String,
    /// Raises default log verbosity; has no other effect
    pub debug: bool,
    /// Inbound Host header allowlist ("*" allows any host)
    pub allowed_hosts: Vec<String>,
    /// Allowed cross-origin request origins ("*" allows any origin)
    pub cors_origins: Vec<String>,
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://audio_lookup.sqlite".to_string());

        let debug = env::var("DEBUG")
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(false);

        let allowed_hosts = split_list(
            &env::var("ALLOWED_HOST").unwrap_or_else(|_| "127.0.0.1,localhost".to_string()),
        );

        let cors_origins = split_list(&env::var("CORS_ORIGIN").unwrap_or_else(|_| {
            "http://localhost:3000,http://127.0.0.1:3000".to_string()
        }));

        Self {
            database_url,
            debug,
            allowed_hosts,
            cors_origins,
        }
    }
}

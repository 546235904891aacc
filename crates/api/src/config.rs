use anyhow::{ensure, Context};
use axum::http::HeaderValue;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL and JWT secret have defaults suitable
/// for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `4000`).
    pub port: u16,
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Upper bound on pooled database connections (default: `20`).
    pub database_max_connections: u32,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                    |
    /// |----------------------------|----------------------------|
    /// | `HOST`                     | `0.0.0.0`                  |
    /// | `PORT`                     | `4000`                     |
    /// | `DATABASE_URL`             | required                   |
    /// | `DATABASE_MAX_CONNECTIONS` | `20`                       |
    /// | `CORS_ORIGINS`             | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                       |
    ///
    /// JWT variables are documented on [`JwtConfig::from_env`].
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env_or("HOST", "0.0.0.0");

        let port: u16 = env_or("PORT", "4000")
            .parse()
            .context("PORT must be a valid u16")?;

        let database_url =
            std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        ensure!(!database_url.trim().is_empty(), "DATABASE_URL must not be empty");

        let database_max_connections: u32 = env_or(
            "DATABASE_MAX_CONNECTIONS",
            &voluntech_db::DEFAULT_MAX_CONNECTIONS.to_string(),
        )
        .parse()
        .context("DATABASE_MAX_CONNECTIONS must be a valid u32")?;

        let cors_origins = parse_origins(&env_or("CORS_ORIGINS", "http://localhost:5173"));
        for origin in &cors_origins {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin '{origin}'"))?;
        }

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .context("REQUEST_TIMEOUT_SECS must be a valid u64")?;

        let jwt = JwtConfig::from_env()?;

        Ok(Self {
            host,
            port,
            database_url,
            database_max_connections,
            cors_origins,
            request_timeout_secs,
            jwt,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

use anyhow::Context;
use bfhl_core::{AllowedOrigins, IdentityConfig};
use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// Default request body limit, matching common JSON body-parser defaults.
pub const DEFAULT_MAX_BODY_BYTES: usize = 100 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub http: HttpConfig,
    pub cors: CorsConfig,
    pub identity: IdentityConfig,
}

#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: AllowedOrigins,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = IdentityConfig::default();

        Ok(Config {
            http: HttpConfig {
                host: env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env("HTTP_PORT", 8080)?,
                max_body_bytes: parse_env("MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?,
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .as_deref()
                    .unwrap_or("*")
                    .parse()
                    .context("CORS_ALLOWED_ORIGINS is invalid")?,
            },
            identity: IdentityConfig {
                user_id: env::var("BFHL_USER_ID").unwrap_or(defaults.user_id),
                email: env::var("BFHL_EMAIL").unwrap_or(defaults.email),
                roll_number: env::var("BFHL_ROLL_NUMBER").unwrap_or(defaults.roll_number),
            },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.http.host, self.http.port)
    }
}

fn parse_env<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("{key} must be a valid number, got {raw:?}")),
        Err(_) => Ok(default),
    }
}

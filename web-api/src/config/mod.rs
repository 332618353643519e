use bfhl_core::identity::{DEFAULT_EMAIL, DEFAULT_ROLL_NUMBER, DEFAULT_USER_ID};
use bfhl_core::{AllowedOrigins, IdentityConfig};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub identity: IdentityConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
    /// `*` or a comma-separated list of `scheme://host[:port]` origins.
    #[serde(default)]
    pub cors_allowed_origins: AllowedOrigins,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
            cors_allowed_origins: AllowedOrigins::Any,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_max_body_bytes() -> usize {
    100 * 1024
}

impl Config {
    /// Load from `.env` and the process environment (`SERVER__PORT`,
    /// `IDENTITY__USER_ID`, ...).
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_environment(config::Environment::default().separator("__"))
    }

    pub fn from_environment(env: config::Environment) -> anyhow::Result<Self> {
        let config = config::Config::builder()
            .add_source(env)
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(default_port()))?
            .set_default("server.max_body_bytes", default_max_body_bytes() as i64)?
            .set_default("server.cors_allowed_origins", "*")?
            .set_default("identity.user_id", DEFAULT_USER_ID)?
            .set_default("identity.email", DEFAULT_EMAIL)?
            .set_default("identity.roll_number", DEFAULT_ROLL_NUMBER)?
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

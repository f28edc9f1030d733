/// Application configuration module
use std::env;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_BODY_BYTES: u64 = 2 * 1024 * 1024;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Postgres store when set, in-memory store otherwise
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub max_body_bytes: usize,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let database_url = env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let db_max_connections = u32::try_from(env_u64("DB_MAX_CONNECTIONS", 5))?;
        let max_body_bytes = usize::try_from(env_u64("MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES))?;

        Ok(Self {
            bind_addr,
            database_url,
            db_max_connections,
            max_body_bytes,
        })
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

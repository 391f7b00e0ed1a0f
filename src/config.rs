use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .context("DATABASE_URL must be set")?;

        let jwt_secret = std::env::var("JWT_SECRET_KEY")
            .unwrap_or_else(|_| "dev-secret-change-me".to_string());

        let token_ttl_hours: u64 = std::env::var("TOKEN_TTL_HOURS")
            .unwrap_or_else(|_| "12".to_string())
            .parse()
            .context("TOKEN_TTL_HOURS must be a whole number of hours")?;

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .context("PORT must be a valid port number")?;

        Ok(Self {
            database_url,
            jwt_secret,
            token_ttl: Duration::from_secs(token_ttl_hours * 3600),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], port)),
        })
    }
}

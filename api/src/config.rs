use std::env;
use std::path::PathBuf;

use anyhow::Context;

/// Secret used when TOKEN_SECRET is not set. Development only.
const DEV_TOKEN_SECRET: &str = "dev-secret-not-for-production";

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// HMAC key for session tokens
    pub token_secret: String,
    pub token_ttl_secs: i64,
    /// Where uploads land before a business claims them
    pub tmp_dir: PathBuf,
    /// Permanent avatar storage
    pub uploads_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let token_secret = env::var("TOKEN_SECRET").unwrap_or_else(|_| {
            tracing::warn!("TOKEN_SECRET not set, using development secret");
            DEV_TOKEN_SECRET.to_string()
        });

        let tmp_dir = env::var("TMP_DIR").unwrap_or_else(|_| "./tmp".to_string());

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: parse_var("PORT", 8080)?,
            token_secret,
            token_ttl_secs: parse_var("TOKEN_TTL_SECS", 86_400)?,
            uploads_dir: env::var("UPLOADS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(&tmp_dir).join("uploads")),
            tmp_dir: PathBuf::from(tmp_dir),
        })
    }
}

fn parse_var<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("{} has an invalid value: {}", name, raw)),
        Err(_) => Ok(default),
    }
}

/*
 * Responsibility
 * - 環境変数や設定の読み込み (PORT, CORS 許可、JWT_SECRET など)
 * - 設定値のバリデーション (不正なら起動失敗)
 * - JWT_SECRET の欠落は起動失敗にしない (保護ルートが 500 を返す)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use axum::http::HeaderValue;

use crate::services::auth::{MAX_LEEWAY_SECONDS, Secret};

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_CORS_ALLOWED_ORIGINS: &str = "http://localhost:3000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,

    // None when JWT_SECRET is unset or empty.
    pub jwt_secret: Option<Secret>,
    pub token_leeway_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (process env in production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = match lookup("PORT") {
            Some(s) => s.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => DEFAULT_PORT,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = lookup("APP_ENV")
            .map(|v| AppEnv::parse(&v))
            .unwrap_or(AppEnv::Development);

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ALLOWED_ORIGINS.to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        if cors_allowed_origins
            .iter()
            .any(|o| HeaderValue::from_str(o).is_err())
        {
            return Err(ConfigError::Invalid("CORS_ALLOWED_ORIGINS"));
        }

        let jwt_secret = lookup("JWT_SECRET").and_then(Secret::new);

        let token_leeway_seconds = match lookup("TOKEN_LEEWAY_SECONDS") {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs <= MAX_LEEWAY_SECONDS)
                .ok_or(ConfigError::Invalid("TOKEN_LEEWAY_SECONDS"))?,
            None => 0,
        };

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            jwt_secret,
            token_leeway_seconds,
        })
    }
}

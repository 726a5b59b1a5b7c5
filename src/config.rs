use std::str::FromStr;

use crate::errors::AppError;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub database_max_connections: u32,
    pub rate_limit_per_minute: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| AppError::EnvError("DATABASE_URL must be set".into()))?;

        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            database_url,
            port: parse_var("PORT", 8082)?,
            allowed_origins,
            database_max_connections: parse_var("DATABASE_MAX_CONNECTIONS", 5)?,
            rate_limit_per_minute: parse_var("RATE_LIMIT_PER_MINUTE", 1000)?,
        })
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| AppError::EnvError(format!("{} has an invalid value: {}", name, raw))),
        Err(_) => Ok(default),
    }
}

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use rentdesk_core::AppError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_host: String,
    pub api_port: u16,
    pub frontend_url: String,
    pub access_cache_enabled: bool,
    pub access_cache_ttl_seconds: u32,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let api_host = lookup("API_HOST").unwrap_or_else(|| "127.0.0.1".to_owned());
        let api_port = match lookup("API_PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|error| AppError::Validation(format!("invalid API_PORT: {error}")))?,
            None => 3001,
        };

        let frontend_url = lookup("FRONTEND_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| "http://localhost:3000".to_owned());

        let access_cache_enabled = match lookup("ACCESS_CACHE_ENABLED") {
            None => true,
            Some(value) if value.eq_ignore_ascii_case("true") => true,
            Some(value) if value.eq_ignore_ascii_case("false") => false,
            Some(other) => {
                return Err(AppError::Validation(format!(
                    "ACCESS_CACHE_ENABLED must be either 'true' or 'false', got '{other}'"
                )));
            }
        };

        let access_cache_ttl_seconds = match lookup("ACCESS_CACHE_TTL_SECONDS") {
            Some(value) => value.trim().parse::<u32>().map_err(|error| {
                AppError::Validation(format!("invalid ACCESS_CACHE_TTL_SECONDS: {error}"))
            })?,
            None => 60,
        };

        Ok(Self {
            api_host,
            api_port,
            frontend_url,
            access_cache_enabled,
            access_cache_ttl_seconds,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Validation(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

//! Runtime configuration read from the environment.

use std::net::SocketAddr;

use crate::bdl::BDL_BASE_URL;
use crate::error::{DashError, Result};
use crate::{API_KEY_ENV_VAR, BASE_URL_ENV_VAR, BIND_ENV_VAR, CACHE_CAPACITY_ENV_VAR, MOCK_SEED_ENV_VAR};

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Sent verbatim as the `Authorization` header; empty means anonymous
    pub api_key: String,
    pub base_url: String,
    pub bind: SocketAddr,
    /// Fixes the synthetic data sequence when set
    pub mock_seed: Option<u64>,
    pub cache_capacity: usize,
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind = read(BIND_ENV_VAR).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind.parse::<SocketAddr>().map_err(|_| DashError::Config {
            key: BIND_ENV_VAR.to_string(),
            message: format!("expected a socket address, got {bind:?}"),
        })?;

        let mock_seed = read(MOCK_SEED_ENV_VAR)
            .map(|raw| {
                raw.parse::<u64>().map_err(|_| DashError::Config {
                    key: MOCK_SEED_ENV_VAR.to_string(),
                    message: format!("expected an unsigned integer, got {raw:?}"),
                })
            })
            .transpose()?;

        let cache_capacity = match read(CACHE_CAPACITY_ENV_VAR) {
            Some(raw) => raw.parse::<usize>().map_err(|_| DashError::Config {
                key: CACHE_CAPACITY_ENV_VAR.to_string(),
                message: format!("expected an unsigned integer, got {raw:?}"),
            })?,
            None => DEFAULT_CACHE_CAPACITY,
        };

        Ok(Self {
            api_key: read(API_KEY_ENV_VAR).unwrap_or_default(),
            base_url: read(BASE_URL_ENV_VAR).unwrap_or_else(|| BDL_BASE_URL.to_string()),
            bind,
            mock_seed,
            cache_capacity,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: BDL_BASE_URL.to_string(),
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            mock_seed: None,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

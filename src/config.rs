use std::env;
use std::num::NonZeroU32;

use crate::error::AppError;

#[derive(Clone)]
pub struct Config {
    pub riot_api_key: String,
    pub bind_addr: String,
    pub riot_rate_limit_per_second: NonZeroU32,
    /// Send every Riot request to `{base}/{host}{path}` instead of the public hosts.
    pub riot_api_base_url: Option<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("riot_api_key", &"<redacted>")
            .field("bind_addr", &self.bind_addr)
            .field("riot_rate_limit_per_second", &self.riot_rate_limit_per_second)
            .field("riot_api_base_url", &self.riot_api_base_url)
            .finish()
    }
}

impl Config {
    pub const DEFAULT_BIND_ADDR: &'static str = "0.0.0.0:3000";
    pub const DEFAULT_RIOT_RATE_LIMIT_PER_SECOND: u32 = 20;

    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let riot_api_key = lookup("RIOT_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AppError::Config("RIOT_API_KEY must be set".into()))?;

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| Self::DEFAULT_BIND_ADDR.into());

        let riot_rate_limit_per_second = lookup("RIOT_RATE_LIMIT_PER_SECOND")
            .and_then(|v| v.parse().ok())
            .and_then(NonZeroU32::new)
            .unwrap_or_else(|| {
                NonZeroU32::new(Self::DEFAULT_RIOT_RATE_LIMIT_PER_SECOND)
                    .unwrap_or(NonZeroU32::MIN)
            });

        let riot_api_base_url = lookup("RIOT_API_BASE_URL").filter(|url| !url.is_empty());

        Ok(Self {
            riot_api_key,
            bind_addr,
            riot_rate_limit_per_second,
            riot_api_base_url,
        })
    }
}

use std::num::NonZeroU32;

use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::error::AppError;

use super::types::ErrorEnvelope;

/// Header carrying the Riot API key on every request.
pub const RIOT_TOKEN_HEADER: &str = "X-Riot-Token";

pub struct RiotClient {
    client: reqwest::Client,
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    /// Riot API Key
    key: String,
    base_url: Option<String>,
}

impl std::fmt::Debug for RiotClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RiotClient")
            .field("key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl RiotClient {
    pub fn new(key: String, rate_limit_per_second: NonZeroU32) -> Self {
        let q = Quota::per_second(rate_limit_per_second);

        Self {
            client: reqwest::Client::new(),
            limiter: RateLimiter::direct(q),
            key,
            base_url: None,
        }
    }

    /// Route every request to `{base_url}/{host}{path}` instead of the public Riot hosts.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into().trim_end_matches('/').to_string());
        self
    }

    /// Full URL of `path` on the given Riot host (`americas`, `na1`, ...).
    pub(crate) fn url(&self, host: &str, path: &str) -> String {
        match &self.base_url {
            Some(base) => format!("{base}/{host}{path}"),
            None => format!("https://{host}.api.riotgames.com{path}"),
        }
    }

    /// Perform an authenticated GET and decode the JSON body.
    ///
    /// Riot sometimes reports failures inside a 200 response through a
    /// `status.status_code` field; those are turned into [`AppError::RiotApi`].
    #[instrument(level = "debug", skip(self))]
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        // Ensure we do not exceed the Riot API rate limits before doing any request
        self.limiter.until_ready().await;

        let res = self
            .client
            .get(url)
            .header(RIOT_TOKEN_HEADER, &self.key)
            .send()
            .await?;

        let status = res.status();
        let body = res.bytes().await?;

        let value: serde_json::Value = match serde_json::from_slice(&body) {
            Ok(value) => value,
            Err(e) if status.is_success() => return Err(AppError::Decode(e)),
            Err(_) => return Err(status_error(status)),
        };

        if let Some(failure) = ErrorEnvelope::failure_in(&value) {
            debug!(
                status = failure.status_code,
                message = %failure.message,
                "🛰️ Riot API reported a failure"
            );
            return Err(AppError::RiotApi {
                status: failure.status_code,
                message: failure.message,
            });
        }

        if !status.is_success() {
            return Err(status_error(status));
        }

        Ok(serde_json::from_value(value)?)
    }
}

fn status_error(status: reqwest::StatusCode) -> AppError {
    AppError::RiotApi {
        status: status.as_u16(),
        message: status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
    }
}

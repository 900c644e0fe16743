use serde::Deserialize;

use crate::error::AppError;
use crate::riot::Region;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountParams {
    pub game_name: Option<String>,
    pub tag_line: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PuuidParams {
    pub puuid: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MatchesParams {
    pub puuid: Option<String>,
    pub region: Option<String>,
    pub queue: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileParams {
    pub riot_id: Option<String>,
    pub region: Option<String>,
}

/// Collect required query parameters, failing with every missing name at once.
pub fn require<const N: usize>(
    params: [(&'static str, Option<String>); N],
) -> Result<[String; N], AppError> {
    let missing: Vec<&str> = params
        .iter()
        .filter(|(_, value)| value.as_deref().is_none_or(|v| v.trim().is_empty()))
        .map(|(name, _)| *name)
        .collect();

    if !missing.is_empty() {
        return Err(AppError::MissingParameters(missing.join(", ")));
    }

    Ok(params.map(|(_, value)| value.unwrap_or_default()))
}

pub fn parse_region(raw: &str) -> Result<Region, AppError> {
    raw.parse()
}

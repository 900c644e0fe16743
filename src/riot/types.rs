use serde::{Deserialize, Serialize};

// ============================================================================
// Error envelope
// ============================================================================

/// Body returned by Riot API on failure, sometimes with a 200 transport status.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub status: ServiceStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceStatus {
    #[serde(default)]
    pub message: String,
    pub status_code: u16,
}

impl ErrorEnvelope {
    /// Extract a failing service status from a raw JSON body, if any.
    pub fn failure_in(body: &serde_json::Value) -> Option<ServiceStatus> {
        let status = body.get("status")?;
        let status: ServiceStatus = serde_json::from_value(status.clone()).ok()?;

        (status.status_code != 200).then_some(status)
    }
}

// ============================================================================
// Account-v1
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub puuid: String,
    pub game_name: Option<String>,
    pub tag_line: Option<String>,
}

// ============================================================================
// Summoner-v4
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    pub puuid: String,
    #[serde(default)]
    pub summoner_level: Option<i64>,
    #[serde(default)]
    pub profile_icon_id: Option<i32>,
    #[serde(default)]
    pub revision_date: Option<i64>,
}

// ============================================================================
// League-v4
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntryDto {
    #[serde(default)]
    pub league_id: Option<String>,
    pub queue_type: String,
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub rank: Option<String>,
    #[serde(default)]
    pub league_points: i32,
    pub wins: i32,
    pub losses: i32,
    #[serde(default)]
    pub fresh_blood: bool,
    #[serde(default)]
    pub hot_streak: bool,
    #[serde(default)]
    pub inactive: bool,
    #[serde(default)]
    pub veteran: bool,
}

// ============================================================================
// Match-v5
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDto {
    #[serde(default)]
    pub metadata: Option<MetadataDto>,
    pub info: InfoDto,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataDto {
    pub match_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoDto {
    pub game_duration: i64,
    #[serde(default)]
    pub queue_id: Option<i32>,
    pub participants: Vec<ParticipantDto>,
}

impl InfoDto {
    /// Participant entry of the given player, compared by puuid.
    pub fn participant(&self, puuid: &str) -> Option<&ParticipantDto> {
        self.participants.iter().find(|p| p.puuid == puuid)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub puuid: String,
    pub champion_name: String,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub win: bool,
}

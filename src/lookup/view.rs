use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::riot::{LeagueEntryDto, MatchDto, Region};

use super::identity::AccountIdentity;

/// Warning attached to a view when the summoner or league lookup failed.
pub const PARTIAL_FAILURE_WARNING: &str =
    "Some information may be missing due to failed API requests";

/// Ranked queue a league entry is tracked under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueueType {
    /// Ranked Solo/Duo
    SoloDuo,
    /// Ranked Flex
    Flex,
    /// Any other queue, kept verbatim
    Other(String),
}

impl QueueType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::SoloDuo => "RANKED_SOLO_5x5",
            Self::Flex => "RANKED_FLEX_SR",
            Self::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::SoloDuo => "Ranked Solo/Duo",
            Self::Flex => "Ranked Flex",
            Self::Other(raw) => raw,
        }
    }

    /// Match-v5 queue id used to filter match history.
    pub fn queue_id(&self) -> Option<u16> {
        match self {
            Self::SoloDuo => Some(420),
            Self::Flex => Some(440),
            Self::Other(_) => None,
        }
    }
}

impl From<&str> for QueueType {
    fn from(value: &str) -> Self {
        match value {
            "RANKED_SOLO_5x5" | "Ranked Solo/Duo" => Self::SoloDuo,
            "RANKED_FLEX_SR" | "Ranked Flex" => Self::Flex,
            other => Self::Other(other.to_string()),
        }
    }
}

impl FromStr for QueueType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.trim()))
    }
}

impl fmt::Display for QueueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for QueueType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntry {
    pub queue_type: QueueType,
    pub queue_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub league_id: Option<String>,
    pub tier: Option<String>,
    pub rank: Option<String>,
    pub league_points: i32,
    pub wins: i32,
    pub losses: i32,
    pub games_played: i32,
    /// Rounded up to the next whole percent, `None` before any game.
    pub win_rate_percent: Option<u32>,
    pub fresh_blood: bool,
    pub hot_streak: bool,
    pub inactive: bool,
    pub veteran: bool,
}

fn win_rate_percent(wins: i32, games: i32) -> Option<u32> {
    if games <= 0 {
        return None;
    }

    Some((wins.max(0) as f64 / games as f64 * 100.0).ceil() as u32)
}

impl From<LeagueEntryDto> for LeagueEntry {
    fn from(value: LeagueEntryDto) -> Self {
        let queue_type = QueueType::from(value.queue_type.as_str());
        let games_played = value.wins + value.losses;

        Self {
            queue_label: queue_type.label().to_string(),
            queue_type,
            league_id: value.league_id,
            tier: value.tier,
            rank: value.rank,
            league_points: value.league_points,
            wins: value.wins,
            losses: value.losses,
            games_played,
            win_rate_percent: win_rate_percent(value.wins, games_played),
            fresh_blood: value.fresh_blood,
            hot_streak: value.hot_streak,
            inactive: value.inactive,
            veteran: value.veteran,
        }
    }
}

/// Stats of the looked-up player in one match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub match_id: String,
    pub game_duration: i64,
    /// `"{m}m {s}s"`
    pub duration_formatted: String,
    pub champion_name: String,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub win: bool,
}

impl MatchSummary {
    /// Summary of the participant whose puuid equals `puuid`, if they played the match.
    pub fn from_match(match_id: &str, match_data: &MatchDto, puuid: &str) -> Option<Self> {
        let participant = match_data.info.participant(puuid)?;

        Some(Self {
            match_id: match_data
                .metadata
                .as_ref()
                .map(|m| m.match_id.clone())
                .unwrap_or_else(|| match_id.to_string()),
            game_duration: match_data.info.game_duration,
            duration_formatted: format_duration(match_data.info.game_duration),
            champion_name: participant.champion_name.clone(),
            kills: participant.kills,
            deaths: participant.deaths,
            assists: participant.assists,
            win: participant.win,
        })
    }
}

fn format_duration(seconds: i64) -> String {
    format!("{}m {}s", seconds / 60, seconds % 60)
}

/// Everything known about an account after a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeAccountView {
    pub riot_id: String,
    pub game_name: String,
    pub tag_line: String,
    pub region: Region,
    pub puuid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summoner_level: Option<i64>,
    pub leagues: Vec<LeagueEntry>,
    pub partial_failure: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl CompositeAccountView {
    pub fn new(identity: &AccountIdentity, puuid: String) -> Self {
        Self {
            riot_id: identity.to_string(),
            game_name: identity.game_name().to_string(),
            tag_line: identity.tag_line().to_string(),
            region: identity.region(),
            puuid,
            summoner_level: None,
            leagues: Vec::new(),
            partial_failure: false,
            warning: None,
        }
    }

    /// Level is only kept when the summoner lookup actually reported one.
    pub fn set_summoner_level(&mut self, level: Option<i64>) {
        if let Some(level) = level.filter(|l| *l > 0) {
            self.summoner_level = Some(level);
        }
    }

    /// Add league entries, keeping the first entry seen for each queue.
    pub fn set_leagues(&mut self, entries: impl IntoIterator<Item = LeagueEntry>) {
        for entry in entries {
            if !self.leagues.iter().any(|l| l.queue_type == entry.queue_type) {
                self.leagues.push(entry);
            }
        }
    }

    pub fn mark_partial_failure(&mut self) {
        self.partial_failure = true;
        self.warning = Some(PARTIAL_FAILURE_WARNING.to_string());
    }
}

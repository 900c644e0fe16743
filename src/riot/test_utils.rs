//! In-memory Riot API used by unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use crate::error::AppError;

use super::{AccountDto, LeagueEntryDto, MatchDto, Region, RiotApi, SummonerDto};

/// How a failing endpoint of [`FakeRiotApi`] misbehaves.
#[derive(Debug, Clone)]
enum Failure {
    Status(u16, String),
    Decode,
    Panic,
}

/// Fake API answering from preset data and recording every call it receives.
#[derive(Debug, Default)]
pub struct FakeRiotApi {
    account: Option<AccountDto>,
    summoner_level: Option<i64>,
    leagues: Vec<LeagueEntryDto>,
    /// Match ids in listing order, newest first.
    match_ids: Vec<String>,
    matches: HashMap<String, MatchDto>,
    failures: HashMap<&'static str, Failure>,
    calls: Mutex<Vec<String>>,
}

impl FakeRiotApi {
    pub fn with_account(mut self, puuid: &str, game_name: &str, tag_line: &str) -> Self {
        self.account = Some(AccountDto {
            puuid: puuid.into(),
            game_name: Some(game_name.into()),
            tag_line: Some(tag_line.into()),
        });
        self
    }

    pub fn with_summoner_level(mut self, level: i64) -> Self {
        self.summoner_level = Some(level);
        self
    }

    pub fn with_leagues(mut self, leagues: Vec<LeagueEntryDto>) -> Self {
        self.leagues = leagues;
        self
    }

    /// Append a match to the listing; call in newest-first order.
    pub fn with_match(mut self, match_id: &str, match_data: MatchDto) -> Self {
        self.match_ids.push(match_id.into());
        self.matches.insert(match_id.into(), match_data);
        self
    }

    /// Make `endpoint` (`account`, `summoner`, `league`, `match_ids`, `match`) fail.
    pub fn failing(mut self, endpoint: &'static str, status: u16, message: &str) -> Self {
        self.failures
            .insert(endpoint, Failure::Status(status, message.into()));
        self
    }

    /// Make `endpoint` answer with a body that is not valid JSON.
    pub fn failing_to_decode(mut self, endpoint: &'static str) -> Self {
        self.failures.insert(endpoint, Failure::Decode);
        self
    }

    /// Make `endpoint` panic when called.
    pub fn panicking(mut self, endpoint: &'static str) -> Self {
        self.failures.insert(endpoint, Failure::Panic);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, endpoint: &'static str, call: String) -> Result<(), AppError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }

        match self.failures.get(endpoint) {
            Some(Failure::Status(status, message)) => Err(AppError::RiotApi {
                status: *status,
                message: message.clone(),
            }),
            Some(Failure::Decode) => Err(AppError::Decode(
                serde_json::from_str::<serde_json::Value>("<html>oops</html>").unwrap_err(),
            )),
            Some(Failure::Panic) => panic!("{endpoint} blew up"),
            None => Ok(()),
        }
    }

    fn not_found() -> AppError {
        AppError::RiotApi {
            status: 404,
            message: "Data not found".into(),
        }
    }
}

#[async_trait]
impl RiotApi for FakeRiotApi {
    async fn get_account_by_riot_id(
        &self,
        region: Region,
        game_name: &str,
        tag_line: &str,
    ) -> Result<AccountDto, AppError> {
        self.record("account", format!("account:{game_name}#{tag_line}@{region}"))?;
        self.account.clone().ok_or_else(Self::not_found)
    }

    async fn get_summoner_by_puuid(
        &self,
        region: Region,
        puuid: &str,
    ) -> Result<SummonerDto, AppError> {
        self.record("summoner", format!("summoner:{puuid}@{region}"))?;
        Ok(SummonerDto {
            puuid: puuid.into(),
            summoner_level: self.summoner_level,
            profile_icon_id: Some(29),
            revision_date: None,
        })
    }

    async fn get_league_entries_by_puuid(
        &self,
        region: Region,
        puuid: &str,
    ) -> Result<Vec<LeagueEntryDto>, AppError> {
        self.record("league", format!("league:{puuid}@{region}"))?;
        Ok(self.leagues.clone())
    }

    async fn get_match_ids(
        &self,
        _region: Region,
        puuid: &str,
        queue_id: Option<u16>,
        count: u32,
    ) -> Result<Vec<String>, AppError> {
        self.record("match_ids", format!("match_ids:{puuid}:{queue_id:?}:{count}"))?;
        // Ignores `count` on purpose so callers must cap the listing themselves
        Ok(self.match_ids.clone())
    }

    async fn get_match(&self, _region: Region, match_id: &str) -> Result<MatchDto, AppError> {
        self.record("match", format!("match:{match_id}"))?;
        self.matches.get(match_id).cloned().ok_or_else(Self::not_found)
    }
}

pub fn dummy_league(queue_type: &str, wins: i32, losses: i32) -> LeagueEntryDto {
    LeagueEntryDto {
        league_id: Some("league-id".into()),
        queue_type: queue_type.into(),
        tier: Some("CHALLENGER".into()),
        rank: Some("I".into()),
        league_points: 1024,
        wins,
        losses,
        fresh_blood: false,
        hot_streak: true,
        inactive: false,
        veteran: true,
    }
}

/// Match where `puuid` plays `champion`, preceded by another participant.
pub fn dummy_match(puuid: &str, champion: &str, win: bool) -> MatchDto {
    let value = json!({
        "info": {
            "gameDuration": 1712,
            "queueId": 420,
            "participants": [
                {
                    "puuid": "first-participant",
                    "championName": "Yuumi",
                    "kills": 0,
                    "deaths": 12,
                    "assists": 2,
                    "win": !win
                },
                {
                    "puuid": puuid,
                    "championName": champion,
                    "kills": 3,
                    "deaths": 4,
                    "assists": 5,
                    "win": win
                }
            ]
        }
    });
    serde_json::from_value(value).unwrap()
}

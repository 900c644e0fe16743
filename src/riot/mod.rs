//! Riot API client and the types it exchanges.

use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::AppError;

pub mod client;
pub mod region;
pub mod types;

mod endpoints;

#[cfg(test)]
pub mod test_utils;

pub use client::RiotClient;
pub use region::{Platform, Region};
pub use types::{AccountDto, LeagueEntryDto, MatchDto, ParticipantDto, SummonerDto};

/// Riot API operations required by the lookups.
#[async_trait]
pub trait RiotApi: Send + Sync + Debug {
    async fn get_account_by_riot_id(
        &self,
        region: Region,
        game_name: &str,
        tag_line: &str,
    ) -> Result<AccountDto, AppError>;

    async fn get_summoner_by_puuid(
        &self,
        region: Region,
        puuid: &str,
    ) -> Result<SummonerDto, AppError>;

    async fn get_league_entries_by_puuid(
        &self,
        region: Region,
        puuid: &str,
    ) -> Result<Vec<LeagueEntryDto>, AppError>;

    async fn get_match_ids(
        &self,
        region: Region,
        puuid: &str,
        queue_id: Option<u16>,
        count: u32,
    ) -> Result<Vec<String>, AppError>;

    async fn get_match(&self, region: Region, match_id: &str) -> Result<MatchDto, AppError>;
}

#[async_trait]
impl RiotApi for RiotClient {
    async fn get_account_by_riot_id(
        &self,
        region: Region,
        game_name: &str,
        tag_line: &str,
    ) -> Result<AccountDto, AppError> {
        RiotClient::get_account_by_riot_id(self, region, game_name, tag_line).await
    }

    async fn get_summoner_by_puuid(
        &self,
        region: Region,
        puuid: &str,
    ) -> Result<SummonerDto, AppError> {
        RiotClient::get_summoner_by_puuid(self, region, puuid).await
    }

    async fn get_league_entries_by_puuid(
        &self,
        region: Region,
        puuid: &str,
    ) -> Result<Vec<LeagueEntryDto>, AppError> {
        RiotClient::get_league_entries_by_puuid(self, region, puuid).await
    }

    async fn get_match_ids(
        &self,
        region: Region,
        puuid: &str,
        queue_id: Option<u16>,
        count: u32,
    ) -> Result<Vec<String>, AppError> {
        RiotClient::get_match_ids(self, region, puuid, queue_id, count).await
    }

    async fn get_match(&self, region: Region, match_id: &str) -> Result<MatchDto, AppError> {
        RiotClient::get_match(self, region, match_id).await
    }
}

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Serialize;
use tracing::{info, instrument};

use crate::error::AppError;
use crate::lookup::{
    AccountIdentity, CompositeAccountView, LeagueEntry, MatchSummary, QueueType, StatsLookup,
    fetch_match_history,
};
use crate::riot::{AccountDto, SummonerDto};

use super::AppState;
use super::params::{
    AccountParams, MatchesParams, ProfileParams, PuuidParams, parse_region, require,
};

/// Successful payload, flattened next to a `success: true` marker.
#[derive(Debug, Serialize)]
pub struct Success<T> {
    #[serde(flatten)]
    pub data: T,
    pub success: bool,
}

impl<T> Success<T> {
    fn json(data: T) -> Json<Self> {
        Json(Self {
            data,
            success: true,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct LeaguesPayload {
    pub leagues: Vec<LeagueEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchesPayload {
    pub all_matches: Vec<MatchSummary>,
}

/// GET /api/account?gameName&tagLine&region
#[instrument(name = "account", skip(state))]
pub async fn account(
    State(state): State<AppState>,
    Query(params): Query<AccountParams>,
) -> Result<Json<Success<AccountDto>>, AppError> {
    let [game_name, tag_line, region] = require([
        ("gameName", params.game_name),
        ("tagLine", params.tag_line),
        ("region", params.region),
    ])?;
    let identity = AccountIdentity::new(&game_name, &tag_line, parse_region(&region)?)?;

    let account = state
        .riot
        .get_account_by_riot_id(identity.region(), identity.game_name(), identity.tag_line())
        .await?;

    info!(riot_id = %identity, "🌐 Account resolved");
    Ok(Success::json(account))
}

/// GET /api/summoner?puuid&region
#[instrument(name = "summoner", skip(state))]
pub async fn summoner(
    State(state): State<AppState>,
    Query(params): Query<PuuidParams>,
) -> Result<Json<Success<SummonerDto>>, AppError> {
    let [puuid, region] = require([("puuid", params.puuid), ("region", params.region)])?;
    let region = parse_region(&region)?;

    let summoner = state.riot.get_summoner_by_puuid(region, &puuid).await?;

    Ok(Success::json(summoner))
}

/// GET /api/league?puuid&region
#[instrument(name = "league", skip(state))]
pub async fn league(
    State(state): State<AppState>,
    Query(params): Query<PuuidParams>,
) -> Result<Json<Success<LeaguesPayload>>, AppError> {
    let [puuid, region] = require([("puuid", params.puuid), ("region", params.region)])?;
    let region = parse_region(&region)?;

    let entries = state
        .riot
        .get_league_entries_by_puuid(region, &puuid)
        .await?;

    Ok(Success::json(LeaguesPayload {
        leagues: entries.into_iter().map(LeagueEntry::from).collect(),
    }))
}

/// GET /api/matches/by-puuid?puuid&region[&queue]
#[instrument(name = "matches", skip(state))]
pub async fn matches(
    State(state): State<AppState>,
    Query(params): Query<MatchesParams>,
) -> Result<Json<Success<MatchesPayload>>, AppError> {
    let [puuid, region] = require([("puuid", params.puuid), ("region", params.region)])?;
    let region = parse_region(&region)?;
    let queue = params
        .queue
        .filter(|q| !q.trim().is_empty())
        .map(|q| QueueType::from(q.trim()));

    let all_matches =
        fetch_match_history(state.riot.as_ref(), region, &puuid, queue.as_ref()).await?;

    Ok(Success::json(MatchesPayload { all_matches }))
}

/// GET /api/profile?riotId&region
///
/// Runs the whole account lookup and returns the composite view.
#[instrument(name = "profile", skip(state))]
pub async fn profile(
    State(state): State<AppState>,
    Query(params): Query<ProfileParams>,
) -> Result<Json<Success<CompositeAccountView>>, AppError> {
    let [riot_id, region] = require([("riotId", params.riot_id), ("region", params.region)])?;
    let region = parse_region(&region)?;

    let mut lookup = StatsLookup::new(state.riot.clone());
    lookup.query(&riot_id, region).await?;

    let view = lookup.into_view().ok_or(AppError::AccountNotResolved)?;
    Ok(Success::json(view))
}

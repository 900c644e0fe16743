use tracing::{debug, instrument, warn};

use crate::error::AppError;
use crate::riot::{Region, RiotApi};

use super::view::{MatchSummary, QueueType};

/// Number of recent matches listed for a player.
pub const MATCH_HISTORY_SIZE: usize = 6;

/// Fetch the most recent matches of a player, newest first.
///
/// Matches are fetched one after the other. A failing request aborts the whole
/// history; a match the player is somehow absent from is skipped.
#[instrument(skip(api))]
pub async fn fetch_match_history(
    api: &dyn RiotApi,
    region: Region,
    puuid: &str,
    queue: Option<&QueueType>,
) -> Result<Vec<MatchSummary>, AppError> {
    let queue_id = queue.and_then(QueueType::queue_id);
    let match_ids = api
        .get_match_ids(region, puuid, queue_id, MATCH_HISTORY_SIZE as u32)
        .await?;

    debug!(count = match_ids.len(), "🔎 Match ids listed");

    let mut history = Vec::with_capacity(match_ids.len().min(MATCH_HISTORY_SIZE));
    for match_id in match_ids.iter().take(MATCH_HISTORY_SIZE) {
        let match_data = api.get_match(region, match_id).await?;

        match MatchSummary::from_match(match_id, &match_data, puuid) {
            Some(summary) => history.push(summary),
            None => warn!(match_id, "🔎 ⚠️ Player not found in match, skipping"),
        }
    }

    Ok(history)
}

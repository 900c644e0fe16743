use crate::error::AppError;
use crate::riot::client::RiotClient;
use crate::riot::region::Region;
use crate::riot::types::MatchDto;

impl RiotClient {
    /// Get the newest match IDs of a player, optionally restricted to one queue
    /// Uses regional routing (americas, europe, asia)
    pub async fn get_match_ids(
        &self,
        region: Region,
        puuid: &str,
        queue_id: Option<u16>,
        count: u32,
    ) -> Result<Vec<String>, AppError> {
        tracing::trace!(
            "[RIOT::CLIENT] get_match_ids {} in {} (queue {:?})",
            puuid,
            region,
            queue_id
        );

        let mut path = format!(
            "/lol/match/v5/matches/by-puuid/{}/ids?start=0&count={}",
            urlencoding::encode(puuid),
            count
        );
        if let Some(queue) = queue_id {
            path.push_str(&format!("&queue={}", queue));
        }

        self.get(&self.url(region.as_str(), &path)).await
    }

    /// Get match details by match ID
    /// Uses regional routing (americas, europe, asia)
    pub async fn get_match(&self, region: Region, match_id: &str) -> Result<MatchDto, AppError> {
        tracing::trace!("[RIOT::CLIENT] get_match {} in {}", match_id, region);

        let path = format!("/lol/match/v5/matches/{}", urlencoding::encode(match_id));
        let url = self.url(region.as_str(), &path);

        self.get(&url).await
    }
}

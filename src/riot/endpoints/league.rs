use crate::error::AppError;
use crate::riot::client::RiotClient;
use crate::riot::region::Region;
use crate::riot::types::LeagueEntryDto;

impl RiotClient {
    /// Get league entries (ranked info) for a player by PUUID
    /// Uses platform routing (na1, kr, euw1)
    pub async fn get_league_entries_by_puuid(
        &self,
        region: Region,
        puuid: &str,
    ) -> Result<Vec<LeagueEntryDto>, AppError> {
        let platform = region.platform();
        tracing::trace!("[RIOT::CLIENT] get_league_entries {} in {}", puuid, platform);

        let url = self.url(
            platform.as_str(),
            &format!(
                "/lol/league/v4/entries/by-puuid/{}",
                urlencoding::encode(puuid)
            ),
        );

        self.get(&url).await
    }
}

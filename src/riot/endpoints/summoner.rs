use crate::error::AppError;
use crate::riot::{Region, RiotClient, SummonerDto};

impl RiotClient {
    /// Get summoner by PUUID
    /// Uses platform routing (na1, kr, euw1)
    pub async fn get_summoner_by_puuid(
        &self,
        region: Region,
        puuid: &str,
    ) -> Result<SummonerDto, AppError> {
        let platform = region.platform();
        tracing::trace!("[RIOT::CLIENT] get_summoner_by_puuid {} in {}", puuid, platform);

        let url = self.url(
            platform.as_str(),
            &format!(
                "/lol/summoner/v4/summoners/by-puuid/{}",
                urlencoding::encode(puuid)
            ),
        );

        self.get(&url).await
    }
}

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::error::AppError;
use crate::riot::{Region, RiotApi};

use super::history::fetch_match_history;
use super::identity::AccountIdentity;
use super::view::{CompositeAccountView, LeagueEntry, MatchSummary, QueueType};

/// Progress of the current account lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupState {
    Idle,
    Validating,
    ResolvingAccount,
    ResolvingDetails,
    Done,
    Failed,
}

/// Chains the Riot API lookups of one account into a [`CompositeAccountView`].
///
/// Only the account resolution is fatal. Summoner and league failures leave
/// the view incomplete and flagged.
#[derive(Debug)]
pub struct StatsLookup {
    api: Arc<dyn RiotApi>,
    state: LookupState,
    view: Option<CompositeAccountView>,
}

impl StatsLookup {
    pub fn new(api: Arc<dyn RiotApi>) -> Self {
        Self {
            api,
            state: LookupState::Idle,
            view: None,
        }
    }

    pub fn state(&self) -> LookupState {
        self.state
    }

    pub fn view(&self) -> Option<&CompositeAccountView> {
        self.view.as_ref()
    }

    pub fn into_view(self) -> Option<CompositeAccountView> {
        self.view
    }

    /// Look up a `gameName#tagLine` Riot ID, replacing any previous view.
    #[instrument(skip(self))]
    pub async fn query(
        &mut self,
        riot_id: &str,
        region: Region,
    ) -> Result<&CompositeAccountView, AppError> {
        self.view = None;
        let api = Arc::clone(&self.api);

        self.transition(LookupState::Validating);
        let identity = AccountIdentity::parse(riot_id, region).map_err(|e| self.fail(e.into()))?;

        self.transition(LookupState::ResolvingAccount);
        let account = api
            .get_account_by_riot_id(region, identity.game_name(), identity.tag_line())
            .await
            .map_err(|e| self.fail(e))?;

        self.transition(LookupState::ResolvingDetails);
        let mut view = CompositeAccountView::new(&identity, account.puuid);
        let mut partial = false;

        match api.get_summoner_by_puuid(region, &view.puuid).await {
            Ok(summoner) => view.set_summoner_level(summoner.summoner_level),
            Err(e) => {
                warn!(error = %e, "🔎 ⚠️ Summoner lookup failed");
                partial = true;
            }
        }

        match api.get_league_entries_by_puuid(region, &view.puuid).await {
            Ok(entries) if !entries.is_empty() => {
                view.set_leagues(entries.into_iter().map(LeagueEntry::from));
            }
            Ok(_) => debug!("🔎 No ranked league for this account"),
            Err(e) => {
                warn!(error = %e, "🔎 ⚠️ League lookup failed");
                partial = true;
            }
        }

        if partial {
            view.mark_partial_failure();
        }

        info!(
            riot_id = %view.riot_id,
            leagues = view.leagues.len(),
            partial,
            "🔎 Account resolved"
        );

        self.transition(LookupState::Done);
        Ok(&*self.view.insert(view))
    }

    /// Recent matches of the resolved account, optionally for one queue.
    pub async fn match_history(
        &self,
        queue: Option<&QueueType>,
    ) -> Result<Vec<MatchSummary>, AppError> {
        let view = self.view.as_ref().ok_or(AppError::AccountNotResolved)?;

        fetch_match_history(self.api.as_ref(), view.region, &view.puuid, queue).await
    }

    fn transition(&mut self, next: LookupState) {
        debug!(from = ?self.state, to = ?next, "🔎 Lookup state changed");
        self.state = next;
    }

    fn fail(&mut self, error: AppError) -> AppError {
        self.transition(LookupState::Failed);
        error
    }
}

#[cfg(test)]
mod tests {
    use crate::lookup::view::PARTIAL_FAILURE_WARNING;
    use crate::riot::test_utils::{FakeRiotApi, dummy_league, dummy_match};

    use super::*;

    fn new_lookup(api: FakeRiotApi) -> (StatsLookup, Arc<FakeRiotApi>) {
        let api = Arc::new(api);
        (StatsLookup::new(api.clone()), api)
    }

    fn resolvable() -> FakeRiotApi {
        FakeRiotApi::default()
            .with_account("puuid-faker", "Faker", "KR1")
            .with_summoner_level(612)
            .with_leagues(vec![
                dummy_league("RANKED_SOLO_5x5", 120, 80),
                dummy_league("RANKED_FLEX_SR", 3, 1),
            ])
    }

    #[tokio::test]
    async fn invalid_identity_issues_no_call() {
        for riot_id in ["ab#cd", "FakerKR1", "Faker#", "Faker#TOOLONG", "a#b#c"] {
            let (mut lookup, api) = new_lookup(resolvable());

            let res = lookup.query(riot_id, Region::Americas).await;

            assert!(matches!(res, Err(AppError::InvalidIdentity(_))), "{riot_id}");
            assert!(api.calls().is_empty(), "{riot_id}");
            assert_eq!(lookup.state(), LookupState::Failed);
            assert!(lookup.view().is_none());
        }
    }

    #[tokio::test]
    async fn account_is_resolved_before_anything_else() {
        let (mut lookup, api) = new_lookup(resolvable());

        lookup.query("Faker#KR1", Region::Americas).await.unwrap();

        assert_eq!(
            api.calls(),
            [
                "account:Faker#KR1@Americas",
                "summoner:puuid-faker@Americas",
                "league:puuid-faker@Americas",
            ]
        );
    }

    #[tokio::test]
    async fn full_lookup_builds_the_view() {
        let (mut lookup, _api) = new_lookup(resolvable());

        let view = lookup.query("Faker#KR1", Region::Asia).await.unwrap();

        assert_eq!(view.riot_id, "Faker#KR1");
        assert_eq!(view.region, Region::Asia);
        assert_eq!(view.puuid, "puuid-faker");
        assert_eq!(view.summoner_level, Some(612));
        assert_eq!(view.leagues.len(), 2);
        assert!(!view.partial_failure);
        assert_eq!(view.warning, None);
        assert_eq!(lookup.state(), LookupState::Done);
    }

    #[tokio::test]
    async fn account_failure_is_fatal() {
        let (mut lookup, api) = new_lookup(resolvable().failing("account", 403, "Forbidden"));

        let res = lookup.query("Faker#KR1", Region::Europe).await;

        let err = res.unwrap_err();
        assert_eq!(
            err.user_message(),
            "You do not have permission to perform this request, invalid API key or URL"
        );
        assert!(lookup.view().is_none());
        assert_eq!(lookup.state(), LookupState::Failed);
        assert_eq!(api.calls().len(), 1);
    }

    #[tokio::test]
    async fn summoner_failure_keeps_leagues() {
        let (mut lookup, _api) = new_lookup(resolvable().failing("summoner", 500, "boom"));

        let view = lookup.query("Faker#KR1", Region::Asia).await.unwrap();

        assert_eq!(view.summoner_level, None);
        assert_eq!(view.leagues.len(), 2);
        assert!(view.partial_failure);
        assert_eq!(view.warning.as_deref(), Some(PARTIAL_FAILURE_WARNING));
    }

    #[tokio::test]
    async fn league_failure_keeps_summoner_level() {
        let (mut lookup, _api) = new_lookup(resolvable().failing("league", 429, "Rate limit exceeded"));

        let view = lookup.query("Faker#KR1", Region::Asia).await.unwrap();

        assert_eq!(view.summoner_level, Some(612));
        assert!(view.leagues.is_empty());
        assert!(view.partial_failure);
    }

    #[tokio::test]
    async fn unranked_player_is_not_a_failure() {
        let (mut lookup, _api) = new_lookup(
            FakeRiotApi::default()
                .with_account("puuid-new", "Newbie", "EUW")
                .with_summoner_level(3),
        );

        let view = lookup.query("Newbie#EUW", Region::Europe).await.unwrap();

        assert!(view.leagues.is_empty());
        assert!(!view.partial_failure);
    }

    #[tokio::test]
    async fn new_query_discards_previous_view() {
        let (mut lookup, _api) = new_lookup(resolvable());

        lookup.query("Faker#KR1", Region::Asia).await.unwrap();
        assert!(lookup.view().is_some());

        let res = lookup.query("ab#cd", Region::Asia).await;

        assert!(res.is_err());
        assert!(lookup.view().is_none());
    }

    #[tokio::test]
    async fn match_history_requires_a_resolved_account() {
        let (lookup, api) = new_lookup(resolvable());

        let res = lookup.match_history(None).await;

        assert!(matches!(res, Err(AppError::AccountNotResolved)));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn match_history_uses_resolved_puuid_and_queue() {
        let (mut lookup, api) = new_lookup(
            resolvable()
                .with_match("KR_2", dummy_match("puuid-faker", "Azir", true))
                .with_match("KR_1", dummy_match("puuid-faker", "Ryze", false)),
        );
        lookup.query("Faker#KR1", Region::Asia).await.unwrap();

        let history = lookup
            .match_history(Some(&QueueType::SoloDuo))
            .await
            .unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].champion_name, "Azir");
        assert!(api
            .calls()
            .contains(&"match_ids:puuid-faker:Some(420):6".to_string()));
    }
}

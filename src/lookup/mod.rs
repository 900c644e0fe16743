//! Account lookups chaining the Riot API calls into one view.

mod history;
mod identity;
mod stats;
mod view;

pub use history::{MATCH_HISTORY_SIZE, fetch_match_history};
pub use identity::{AccountIdentity, IdentityError, RIOT_ID_SEPARATOR};
pub use stats::{LookupState, StatsLookup};
pub use view::{
    CompositeAccountView, LeagueEntry, MatchSummary, PARTIAL_FAILURE_WARNING, QueueType,
};

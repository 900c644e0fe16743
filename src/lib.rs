//! Player statistics lookups over the Riot Games API.
//!
//! The crate resolves a Riot ID into an account, then gathers the summoner
//! level, ranked leagues and recent matches of that account. Results are
//! served as JSON by a small axum server.

pub mod config;
pub mod error;
pub mod logging;
pub mod lookup;
pub mod riot;
pub mod server;

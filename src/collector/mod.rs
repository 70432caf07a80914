//! Acquisition of the league statistics table: fetch, parse, cache.

pub mod allhockey;
pub mod cache;
pub mod extract;

pub use allhockey::AllhockeyClient;
pub use cache::{PlayerCache, PlayerSource};
pub use extract::{extract_players, Extraction};

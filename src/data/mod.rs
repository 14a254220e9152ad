//! Dataset models, the fetch-with-fallback loader, and the season table.

pub mod http;
pub mod seasons;
pub mod types;

pub use http::{load_dataset, load_game_shots, FALLBACK_DATA_PATH, PRIMARY_DATA_PATH};
pub use seasons::{default_season, season_label, SEASON_CODES};
pub use types::{Dataset, GameShots, PlayerRecord};

//! Basketball League Stats CLI Library
//!
//! A Rust library for exploring a basketball league dataset: season player
//! stats, per-game shot charts, and the hash-route navigation model of the
//! league dashboard.
//!
//! ## Features
//!
//! - **Player Tables**: Filter the season player list by season/team/position
//!   and a name search, then sort by any stat column
//! - **Shot Charts**: Normalize raw shot events, filter them by
//!   player/team/result/quarter, and aggregate summary, zone, and quarter
//!   series ready for charting
//! - **Routing**: Resolve dashboard hash fragments (`#/players/095912`) to
//!   their view/action pair
//! - **Data Loading**: Fetch the JSON dataset from a primary source with a
//!   fallback source, over HTTP or from local files
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hoopstat::data::load_dataset;
//! use hoopstat::roster::{DashboardState, PlayerFilter};
//!
//! # async fn example() -> hoopstat::Result<()> {
//! let dataset = load_dataset("data/players.json", "players.json", false).await?;
//! let mut state = DashboardState::new(dataset.players);
//! state.apply_filter(&PlayerFilter::default());
//! for player in &state.filtered {
//!     println!("{} {:.1} pts", player.name, player.pts);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod data;
pub mod error;
pub mod format;
pub mod roster;
pub mod routes;
pub mod shots;

// Re-export commonly used types
pub use data::{Dataset, GameShots, PlayerRecord};
pub use error::{HoopError, Result};
pub use roster::{DashboardState, PlayerFilter, SortDir, SortKey, SortSpec};
pub use routes::{Route, RouteTarget};
pub use shots::{Shot, ShotFilter, ShotResult, ShotZone};

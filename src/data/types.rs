//! Serde models for the league dataset and per-game shot files.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::shots::RawShot;

/// One player's season line, loaded verbatim from the dataset.
///
/// Counting stats are per-game averages. Derived metrics and shooting
/// percentages may be absent for players with too small a sample; those
/// render as the placeholder dash and sort as zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub season: String,
    pub team: String,
    pub pos: String,
    pub gp: u32,
    pub min: f64,
    pub pts: f64,
    pub reb: f64,
    pub ast: f64,
    pub stl: f64,
    pub blk: f64,
    pub tov: f64,
    #[serde(default)]
    pub fg_pct: Option<f64>,
    #[serde(default)]
    pub tp_pct: Option<f64>,
    #[serde(default)]
    pub ft_pct: Option<f64>,
    #[serde(default)]
    pub ts_pct: Option<f64>,
    #[serde(default)]
    pub efg_pct: Option<f64>,
    #[serde(default)]
    pub ast_to: Option<f64>,
    #[serde(default)]
    pub pir: Option<f64>,
    #[serde(default)]
    pub pts_per36: Option<f64>,
    #[serde(default)]
    pub reb_per36: Option<f64>,
    #[serde(default)]
    pub ast_per36: Option<f64>,
    /// Categories (pts/reb/ast) averaging double digits; always 0..=3.
    #[serde(default)]
    pub dd_cats: u8,
}

/// The league dataset file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub players: Vec<PlayerRecord>,
    #[serde(rename = "defaultSeason")]
    pub default_season: String,
}

/// A per-game shot file: raw shot events plus the id→name map used to
/// normalize them.
#[derive(Debug, Clone, Deserialize)]
pub struct GameShots {
    pub game_id: String,
    #[serde(default)]
    pub names: HashMap<String, String>,
    pub shots: Vec<RawShot>,
}

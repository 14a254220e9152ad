//! Shot-event normalization, filtering, and chart aggregation.
//!
//! Raw shot records come straight out of the per-game JSON feed. They are
//! normalized once (id→name resolution, 0/1 → bool) into [`Shot`] values,
//! and every aggregation below operates on the normalized form. All
//! functions here are pure and synchronous.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HoopError;


/// Court zone a shot was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShotZone {
    #[serde(rename = "paint")]
    Paint,
    #[serde(rename = "mid_range")]
    MidRange,
    #[serde(rename = "three_pt")]
    ThreePt,
}

/// Fixed chart order: zones always render PAINT, MID, 3PT regardless of
/// which zones appear in the data.
pub const ZONE_ORDER: [ShotZone; 3] = [ShotZone::Paint, ShotZone::MidRange, ShotZone::ThreePt];

impl ShotZone {
    /// Chart axis label for this zone.
    pub fn chart_label(self) -> &'static str {
        match self {
            ShotZone::Paint => "PAINT",
            ShotZone::MidRange => "MID",
            ShotZone::ThreePt => "3PT",
        }
    }
}

impl fmt::Display for ShotZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ShotZone::Paint => "paint",
            ShotZone::MidRange => "mid_range",
            ShotZone::ThreePt => "three_pt",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ShotZone {
    type Err = HoopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paint" => Ok(ShotZone::Paint),
            "mid_range" => Ok(ShotZone::MidRange),
            "three_pt" => Ok(ShotZone::ThreePt),
            _ => Err(HoopError::InvalidShotZone {
                value: s.to_string(),
            }),
        }
    }
}

/// Shot outcome used as a filter criterion.
///
/// The dashboard uses `make`/`miss` as criterion tokens and `made` in export
/// file names, so parsing accepts both spellings of each outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShotResult {
    Made,
    Miss,
}

impl fmt::Display for ShotResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ShotResult::Made => "made",
            ShotResult::Miss => "miss",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ShotResult {
    type Err = HoopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "make" | "made" => Ok(ShotResult::Made),
            "miss" | "missed" => Ok(ShotResult::Miss),
            _ => Err(HoopError::InvalidShotResult {
                value: s.to_string(),
            }),
        }
    }
}

/// One shot event as it appears in the per-game JSON feed.
#[derive(Debug, Clone, Deserialize)]
pub struct RawShot {
    pub player_id: String,
    #[serde(default)]
    pub team_id: Option<String>,
    /// Period number; 1..=4 are regulation, 5 = OT1, 6 = OT2, ...
    pub quarter: u32,
    /// 1 = made, 0 = missed.
    pub made: u8,
    pub shot_zone: ShotZone,
    pub x: f64,
    pub y: f64,
}

/// A normalized shot event.
#[derive(Debug, Clone, Serialize)]
pub struct Shot {
    pub player_id: String,
    pub player_name: String,
    pub team_id: Option<String>,
    pub quarter: u32,
    pub made: bool,
    pub zone: ShotZone,
    pub x: f64,
    pub y: f64,
}

/// Normalize raw shot events, resolving player names through `names`.
///
/// Lazy and order-preserving: one normalized shot per raw shot, in input
/// order. A player id with no name mapping keeps the id as its display name.
pub fn normalize_game_shots<'a>(
    raw_shots: &'a [RawShot],
    names: &'a HashMap<String, String>,
) -> impl Iterator<Item = Shot> + 'a {
    raw_shots.iter().map(move |raw| Shot {
        player_id: raw.player_id.clone(),
        player_name: names
            .get(&raw.player_id)
            .cloned()
            .unwrap_or_else(|| raw.player_id.clone()),
        team_id: raw.team_id.clone(),
        quarter: raw.quarter,
        made: raw.made == 1,
        zone: raw.shot_zone,
        x: raw.x,
        y: raw.y,
    })
}

/// Criteria for selecting a subsequence of shots.
///
/// A `None` field (or `"all"` for quarter) places no constraint on that
/// field; set fields must all match.
#[derive(Debug, Clone, Default)]
pub struct ShotFilter {
    pub player_id: Option<String>,
    pub team_id: Option<String>,
    pub result: Option<ShotResult>,
    /// String form of the quarter number, or `"all"`.
    pub quarter: Option<String>,
}

impl ShotFilter {
    pub fn matches(&self, shot: &Shot) -> bool {
        if let Some(player_id) = &self.player_id {
            if shot.player_id != *player_id {
                return false;
            }
        }
        if let Some(team_id) = &self.team_id {
            if shot.team_id.as_deref() != Some(team_id.as_str()) {
                return false;
            }
        }
        if let Some(result) = self.result {
            let wants_made = result == ShotResult::Made;
            if shot.made != wants_made {
                return false;
            }
        }
        if let Some(quarter) = &self.quarter {
            if quarter != "all" && *quarter != shot.quarter.to_string() {
                return false;
            }
        }
        true
    }
}

/// Return the subsequence of `shots` matching all set criteria fields.
pub fn filter_game_shots(shots: &[Shot], filter: &ShotFilter) -> Vec<Shot> {
    shots
        .iter()
        .filter(|shot| filter.matches(shot))
        .cloned()
        .collect()
}

/// Headline numbers for a set of shots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShotSummary {
    pub attempts: usize,
    pub made: usize,
    pub missed: usize,
    /// Field-goal percentage, rounded to one decimal; 0.0 for zero attempts.
    pub fg_pct: f64,
}

pub fn summarize_game_shots(shots: &[Shot]) -> ShotSummary {
    let attempts = shots.len();
    let made = shots.iter().filter(|s| s.made).count();
    let missed = attempts - made;
    let fg_pct = if attempts == 0 {
        0.0
    } else {
        round1(made as f64 / attempts as f64 * 100.0)
    };
    ShotSummary {
        attempts,
        made,
        missed,
        fg_pct,
    }
}

/// One bar of the per-zone chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneBucket {
    pub label: &'static str,
    pub attempts: usize,
    /// Percentage made, rounded to a whole number; 0 with no attempts.
    pub fg_pct: u32,
}

/// Group shots into the fixed PAINT / MID / 3PT buckets.
///
/// The label set is always complete and order-stable; zones with no shots
/// still appear with zero values.
pub fn build_zone_series(shots: &[Shot]) -> Vec<ZoneBucket> {
    ZONE_ORDER
        .iter()
        .map(|&zone| {
            let attempts = shots.iter().filter(|s| s.zone == zone).count();
            let made = shots.iter().filter(|s| s.zone == zone && s.made).count();
            let fg_pct = if attempts == 0 {
                0
            } else {
                (made as f64 / attempts as f64 * 100.0).round() as u32
            };
            ZoneBucket {
                label: zone.chart_label(),
                attempts,
                fg_pct,
            }
        })
        .collect()
}

/// Made/missed counts per period, aligned by index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuarterSeries {
    pub labels: Vec<String>,
    pub made: Vec<usize>,
    pub missed: Vec<usize>,
}

/// Chart label for a period: `Q1`..`Q4`, then `OT1`, `OT2`, ...
pub fn quarter_label(quarter: u32) -> String {
    if quarter <= 4 {
        format!("Q{}", quarter)
    } else {
        format!("OT{}", quarter - 4)
    }
}

/// Group shots by the distinct periods present, in ascending order.
pub fn build_quarter_series(shots: &[Shot]) -> QuarterSeries {
    let quarters: BTreeSet<u32> = shots.iter().map(|s| s.quarter).collect();
    let mut series = QuarterSeries {
        labels: Vec::with_capacity(quarters.len()),
        made: Vec::with_capacity(quarters.len()),
        missed: Vec::with_capacity(quarters.len()),
    };
    for quarter in quarters {
        let made = shots
            .iter()
            .filter(|s| s.quarter == quarter && s.made)
            .count();
        let missed = shots
            .iter()
            .filter(|s| s.quarter == quarter && !s.made)
            .count();
        series.labels.push(quarter_label(quarter));
        series.made.push(made);
        series.missed.push(missed);
    }
    series
}

/// One entry of the quarter filter dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Build the quarter filter options: "all" first, then one option per
/// distinct period present, labeled `1Q`..`4Q` / `OT1`, `OT2`, ...
pub fn build_quarter_select_options(shots: &[Shot]) -> Vec<SelectOption> {
    let mut options = vec![SelectOption {
        value: "all".to_string(),
        label: "전체".to_string(),
    }];
    let quarters: BTreeSet<u32> = shots.iter().map(|s| s.quarter).collect();
    for quarter in quarters {
        let label = if quarter <= 4 {
            format!("{}Q", quarter)
        } else {
            format!("OT{}", quarter - 4)
        };
        options.push(SelectOption {
            value: quarter.to_string(),
            label,
        });
    }
    options
}

/// Deterministic file name for a shot chart snapshot export.
///
/// Every unset filter field renders as the literal token `all`, so the same
/// game and filter combination always maps to the same name:
/// `shotchart_<game>_<team>_<player>_<result>_q<quarter>.png`.
pub fn shot_chart_export_name(game_id: &str, filter: &ShotFilter) -> String {
    let team = filter.team_id.as_deref().unwrap_or("all");
    let player = filter.player_id.as_deref().unwrap_or("all");
    let result = filter
        .result
        .map(|r| r.to_string())
        .unwrap_or_else(|| "all".to_string());
    let quarter = match filter.quarter.as_deref() {
        Some(q) if q != "all" => q,
        _ => "all",
    };
    format!(
        "shotchart_{}_{}_{}_{}_q{}.png",
        game_id, team, player, result, quarter
    )
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

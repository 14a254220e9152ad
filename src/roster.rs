//! Player-list filtering, sorting, and the dashboard state.
//!
//! The source player list is loaded once and never mutated; filtering and
//! sorting always produce a fresh `filtered` sequence inside
//! [`DashboardState`], which is the only state the output layer reads.

use std::cmp::Ordering;
use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

use crate::data::PlayerRecord;


/// Criteria for the player table.
///
/// `None` (or the `"all"` sentinel) places no constraint on a field. The
/// search text is a case-insensitive substring match on the player name;
/// empty search matches everyone.
#[derive(Debug, Clone, Default)]
pub struct PlayerFilter {
    pub season: Option<String>,
    pub team: Option<String>,
    pub pos: Option<String>,
    pub search: String,
}

fn field_matches(criterion: Option<&str>, value: &str) -> bool {
    match criterion {
        None => true,
        Some("all") => true,
        Some(wanted) => wanted == value,
    }
}

impl PlayerFilter {
    pub fn matches(&self, player: &PlayerRecord) -> bool {
        field_matches(self.season.as_deref(), &player.season)
            && field_matches(self.team.as_deref(), &player.team)
            && field_matches(self.pos.as_deref(), &player.pos)
            && (self.search.is_empty()
                || player
                    .name
                    .to_lowercase()
                    .contains(&self.search.to_lowercase()))
    }
}

/// Return the players matching all criteria, in source order.
pub fn filter_players(players: &[PlayerRecord], filter: &PlayerFilter) -> Vec<PlayerRecord> {
    players
        .iter()
        .filter(|player| filter.matches(player))
        .cloned()
        .collect()
}

/// Sortable stat columns of the player table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Gp,
    Min,
    Pts,
    Reb,
    Ast,
    Stl,
    Blk,
    Tov,
    FgPct,
    TpPct,
    FtPct,
    TsPct,
    EfgPct,
    AstTo,
    Pir,
    DdCats,
}

impl SortKey {
    /// The comparable value of this column for a player; missing stats
    /// compare as zero.
    pub fn value(self, player: &PlayerRecord) -> f64 {
        match self {
            SortKey::Gp => player.gp as f64,
            SortKey::Min => player.min,
            SortKey::Pts => player.pts,
            SortKey::Reb => player.reb,
            SortKey::Ast => player.ast,
            SortKey::Stl => player.stl,
            SortKey::Blk => player.blk,
            SortKey::Tov => player.tov,
            SortKey::FgPct => player.fg_pct.unwrap_or(0.0),
            SortKey::TpPct => player.tp_pct.unwrap_or(0.0),
            SortKey::FtPct => player.ft_pct.unwrap_or(0.0),
            SortKey::TsPct => player.ts_pct.unwrap_or(0.0),
            SortKey::EfgPct => player.efg_pct.unwrap_or(0.0),
            SortKey::AstTo => player.ast_to.unwrap_or(0.0),
            SortKey::Pir => player.pir.unwrap_or(0.0),
            SortKey::DdCats => player.dd_cats as f64,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortKey::Gp => "gp",
            SortKey::Min => "min",
            SortKey::Pts => "pts",
            SortKey::Reb => "reb",
            SortKey::Ast => "ast",
            SortKey::Stl => "stl",
            SortKey::Blk => "blk",
            SortKey::Tov => "tov",
            SortKey::FgPct => "fg_pct",
            SortKey::TpPct => "tp_pct",
            SortKey::FtPct => "ft_pct",
            SortKey::TsPct => "ts_pct",
            SortKey::EfgPct => "efg_pct",
            SortKey::AstTo => "ast_to",
            SortKey::Pir => "pir",
            SortKey::DdCats => "dd_cats",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Desc,
    Asc,
}

impl SortDir {
    fn flipped(self) -> Self {
        match self {
            SortDir::Desc => SortDir::Asc,
            SortDir::Asc => SortDir::Desc,
        }
    }
}

impl fmt::Display for SortDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDir::Desc => write!(f, "desc"),
            SortDir::Asc => write!(f, "asc"),
        }
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub dir: SortDir,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            key: SortKey::Pts,
            dir: SortDir::Desc,
        }
    }
}

impl SortSpec {
    /// Column-header click semantics: re-selecting the active column flips
    /// the direction, selecting a new column resets to descending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.dir = self.dir.flipped();
        } else {
            self.key = key;
            self.dir = SortDir::Desc;
        }
    }
}

/// Sort players numerically by the active column and direction.
pub fn sort_players(players: &mut [PlayerRecord], spec: SortSpec) {
    players.sort_by(|a, b| {
        let av = spec.key.value(a);
        let bv = spec.key.value(b);
        let ord = av.partial_cmp(&bv).unwrap_or(Ordering::Equal);
        match spec.dir {
            SortDir::Asc => ord,
            SortDir::Desc => ord.reverse(),
        }
    });
}

/// The dashboard's whole UI state: the immutable source list, the derived
/// filtered/sorted view, and the active sort.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub players: Vec<PlayerRecord>,
    pub filtered: Vec<PlayerRecord>,
    pub sort: SortSpec,
}

impl DashboardState {
    pub fn new(players: Vec<PlayerRecord>) -> Self {
        let mut state = Self {
            filtered: players.clone(),
            players,
            sort: SortSpec::default(),
        };
        sort_players(&mut state.filtered, state.sort);
        state
    }

    /// Recompute `filtered` from the source list under `filter`, keeping
    /// the active sort applied.
    pub fn apply_filter(&mut self, filter: &PlayerFilter) {
        self.filtered = filter_players(&self.players, filter);
        sort_players(&mut self.filtered, self.sort);
    }

    /// Handle a sort-column selection and re-sort the current view.
    pub fn set_sort_column(&mut self, key: SortKey) {
        self.sort.toggle(key);
        sort_players(&mut self.filtered, self.sort);
    }
}

/// Number of double-digit categories among points, rebounds, and assists.
/// 2 is a double-double pace, 3 a triple-double pace.
pub fn dd_cats(pts: f64, reb: f64, ast: f64) -> u8 {
    [pts, reb, ast].iter().filter(|v| **v >= 10.0).count() as u8
}

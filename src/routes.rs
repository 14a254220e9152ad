//! Hash-fragment routing for the dashboard navigation model.
//!
//! Routes look like `#/<path>[/<id>]`. Resolution goes through a fixed
//! dispatch table keyed by path and id presence; unknown paths always fall
//! back to the main view, so resolution can never fail.

use std::fmt;

use serde::Serialize;

#[cfg(test)]
mod tests;

/// A parsed hash route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// First path segment; empty for `#/` or an empty hash.
    pub path: String,
    /// Second path segment, when present and non-empty.
    pub id: Option<String>,
}

/// Parse a hash fragment of the shape `#/<path>[/<id>]`.
pub fn route_from_hash(hash: &str) -> Route {
    let trimmed = hash
        .strip_prefix("#/")
        .or_else(|| hash.strip_prefix('#'))
        .unwrap_or(hash);
    let mut segments = trimmed.split('/');
    let path = segments.next().unwrap_or("").to_string();
    let id = segments
        .next()
        .filter(|segment| !segment.is_empty())
        .map(str::to_string);
    Route { path, id }
}

/// Whether a nav link for `candidate_path` should render as active.
pub fn is_nav_link_active(hash: &str, candidate_path: &str) -> bool {
    route_from_hash(hash).path == candidate_path
}

/// Dashboard views a route can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Main,
    Players,
    Player,
    Teams,
    Team,
    Games,
    Game,
    Leaders,
    Compare,
    Schedule,
    Predict,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            View::Main => "main",
            View::Players => "players",
            View::Player => "player",
            View::Teams => "teams",
            View::Team => "team",
            View::Games => "games",
            View::Game => "game",
            View::Leaders => "leaders",
            View::Compare => "compare",
            View::Schedule => "schedule",
            View::Predict => "predict",
        };
        write!(f, "{}", s)
    }
}

/// Page-load actions the dashboard dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageAction {
    #[serde(rename = "loadMainPage")]
    LoadMainPage,
    #[serde(rename = "loadPlayersPage")]
    LoadPlayersPage,
    #[serde(rename = "loadPlayerPage")]
    LoadPlayerPage,
    #[serde(rename = "loadTeamsPage")]
    LoadTeamsPage,
    #[serde(rename = "loadTeamPage")]
    LoadTeamPage,
    #[serde(rename = "loadGamesPage")]
    LoadGamesPage,
    #[serde(rename = "loadGamePage")]
    LoadGamePage,
    #[serde(rename = "loadLeadersPage")]
    LoadLeadersPage,
    #[serde(rename = "loadComparePage")]
    LoadComparePage,
    #[serde(rename = "loadSchedulePage")]
    LoadSchedulePage,
    #[serde(rename = "loadPredictPage")]
    LoadPredictPage,
}

impl fmt::Display for PageAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PageAction::LoadMainPage => "loadMainPage",
            PageAction::LoadPlayersPage => "loadPlayersPage",
            PageAction::LoadPlayerPage => "loadPlayerPage",
            PageAction::LoadTeamsPage => "loadTeamsPage",
            PageAction::LoadTeamPage => "loadTeamPage",
            PageAction::LoadGamesPage => "loadGamesPage",
            PageAction::LoadGamePage => "loadGamePage",
            PageAction::LoadLeadersPage => "loadLeadersPage",
            PageAction::LoadComparePage => "loadComparePage",
            PageAction::LoadSchedulePage => "loadSchedulePage",
            PageAction::LoadPredictPage => "loadPredictPage",
        };
        write!(f, "{}", s)
    }
}

/// What a resolved route renders and runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteTarget {
    pub view: View,
    pub action: PageAction,
}

/// Id-presence requirement of a dispatch entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IdRule {
    Any,
    Without,
    With,
}

impl IdRule {
    fn accepts(self, has_id: bool) -> bool {
        match self {
            IdRule::Any => true,
            IdRule::Without => !has_id,
            IdRule::With => has_id,
        }
    }
}

/// The fixed route dispatch table. Order matters only within a path.
static DISPATCH: &[(&str, IdRule, View, PageAction)] = &[
    ("", IdRule::Any, View::Main, PageAction::LoadMainPage),
    (
        "players",
        IdRule::Without,
        View::Players,
        PageAction::LoadPlayersPage,
    ),
    (
        "players",
        IdRule::With,
        View::Player,
        PageAction::LoadPlayerPage,
    ),
    (
        "teams",
        IdRule::Without,
        View::Teams,
        PageAction::LoadTeamsPage,
    ),
    ("teams", IdRule::With, View::Team, PageAction::LoadTeamPage),
    (
        "games",
        IdRule::Without,
        View::Games,
        PageAction::LoadGamesPage,
    ),
    ("games", IdRule::With, View::Game, PageAction::LoadGamePage),
    (
        "leaders",
        IdRule::Any,
        View::Leaders,
        PageAction::LoadLeadersPage,
    ),
    (
        "compare",
        IdRule::Any,
        View::Compare,
        PageAction::LoadComparePage,
    ),
    (
        "schedule",
        IdRule::Any,
        View::Schedule,
        PageAction::LoadSchedulePage,
    ),
    (
        "predict",
        IdRule::Any,
        View::Predict,
        PageAction::LoadPredictPage,
    ),
];

/// Resolve a path and optional id to its view/action pair.
///
/// Unknown paths resolve to the main view; this is the 404 policy, not an
/// error path.
pub fn resolve_route_target(path: &str, id: Option<&str>) -> RouteTarget {
    let has_id = id.is_some();
    for (entry_path, rule, view, action) in DISPATCH {
        if *entry_path == path && rule.accepts(has_id) {
            return RouteTarget {
                view: *view,
                action: *action,
            };
        }
    }
    RouteTarget {
        view: View::Main,
        action: PageAction::LoadMainPage,
    }
}

impl Route {
    /// Resolve this route through the dispatch table.
    pub fn target(&self) -> RouteTarget {
        resolve_route_target(&self.path, self.id.as_deref())
    }
}

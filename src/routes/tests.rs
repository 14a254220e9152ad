use super::*;

#[test]
fn test_route_from_hash_with_id() {
    let route = route_from_hash("#/players/095912");
    assert_eq!(route.path, "players");
    assert_eq!(route.id.as_deref(), Some("095912"));
}

#[test]
fn test_route_from_hash_without_id() {
    let route = route_from_hash("#/teams");
    assert_eq!(route.path, "teams");
    assert_eq!(route.id, None);
}

#[test]
fn test_route_from_hash_empty_inputs() {
    for hash in ["", "#", "#/"] {
        let route = route_from_hash(hash);
        assert_eq!(route.path, "", "hash {:?}", hash);
        assert_eq!(route.id, None, "hash {:?}", hash);
    }
}

#[test]
fn test_route_from_hash_trailing_slash_has_no_id() {
    let route = route_from_hash("#/players/");
    assert_eq!(route.path, "players");
    assert_eq!(route.id, None);
}

#[test]
fn test_is_nav_link_active() {
    assert!(is_nav_link_active("#/players", "players"));
    assert!(is_nav_link_active("#/players/095912", "players"));
    assert!(!is_nav_link_active("#/teams", "players"));
    assert!(is_nav_link_active("", ""));
    assert!(is_nav_link_active("#/", ""));
}

#[test]
fn test_resolve_list_vs_detail_routes() {
    let players = resolve_route_target("players", None);
    assert_eq!(players.view, View::Players);
    assert_eq!(players.action, PageAction::LoadPlayersPage);

    let player = resolve_route_target("players", Some("095912"));
    assert_eq!(player.view, View::Player);
    assert_eq!(player.action, PageAction::LoadPlayerPage);

    let team = resolve_route_target("teams", Some("kb"));
    assert_eq!(team.view, View::Team);
    assert_eq!(team.action, PageAction::LoadTeamPage);

    let games = resolve_route_target("games", None);
    assert_eq!(games.view, View::Games);
    assert_eq!(games.action, PageAction::LoadGamesPage);

    let game = resolve_route_target("games", Some("G20260220-001"));
    assert_eq!(game.view, View::Game);
    assert_eq!(game.action, PageAction::LoadGamePage);
}

#[test]
fn test_resolve_id_agnostic_routes() {
    for (path, view, action) in [
        ("leaders", View::Leaders, PageAction::LoadLeadersPage),
        ("compare", View::Compare, PageAction::LoadComparePage),
        ("schedule", View::Schedule, PageAction::LoadSchedulePage),
        ("predict", View::Predict, PageAction::LoadPredictPage),
    ] {
        let without = resolve_route_target(path, None);
        assert_eq!(without.view, view);
        assert_eq!(without.action, action);

        // An id does not change where these resolve
        let with = resolve_route_target(path, Some("x"));
        assert_eq!(with.view, view);
        assert_eq!(with.action, action);
    }
}

#[test]
fn test_resolve_root_and_unknown_paths_go_to_main() {
    let root = resolve_route_target("", None);
    assert_eq!(root.view, View::Main);
    assert_eq!(root.action, PageAction::LoadMainPage);

    let bogus = resolve_route_target("bogus", None);
    assert_eq!(bogus.view, View::Main);
    assert_eq!(bogus.action, PageAction::LoadMainPage);

    let bogus_with_id = resolve_route_target("bogus", Some("42"));
    assert_eq!(bogus_with_id.view, View::Main);
    assert_eq!(bogus_with_id.action, PageAction::LoadMainPage);
}

#[test]
fn test_route_target_convenience() {
    let target = route_from_hash("#/teams/kb").target();
    assert_eq!(target.view, View::Team);
    assert_eq!(target.action, PageAction::LoadTeamPage);
}

#[test]
fn test_serialized_names_match_dashboard_tokens() {
    let target = resolve_route_target("players", Some("095912"));
    let json = serde_json::to_string(&target).unwrap();
    assert_eq!(json, r#"{"view":"player","action":"loadPlayerPage"}"#);

    assert_eq!(View::Main.to_string(), "main");
    assert_eq!(PageAction::LoadMainPage.to_string(), "loadMainPage");
    assert_eq!(PageAction::LoadTeamPage.to_string(), "loadTeamPage");
}

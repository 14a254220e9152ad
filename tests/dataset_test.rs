//! Integration tests: dataset loading through the fallback path, then
//! filter/sort/aggregate over the loaded data.

use std::io::Write;

use hoopstat::data::{load_dataset, load_game_shots};
use hoopstat::roster::{DashboardState, PlayerFilter, SortKey};
use hoopstat::shots::{
    build_zone_series, filter_game_shots, normalize_game_shots, summarize_game_shots, Shot,
    ShotFilter, ShotResult,
};
use hoopstat::HoopError;

const DATASET_JSON: &str = r#"{
  "defaultSeason": "046",
  "players": [
    {
      "name": "Kim Minjae", "season": "046", "team": "kb", "pos": "G",
      "gp": 31, "min": 31.2, "pts": 18.5, "reb": 4.1, "ast": 6.3,
      "stl": 1.4, "blk": 0.2, "tov": 2.1,
      "fg_pct": 0.462, "ts_pct": 0.587, "ast_to": 3.0, "pir": 17.8,
      "dd_cats": 1
    },
    {
      "name": "Lee Jaehyun", "season": "046", "team": "db", "pos": "C",
      "gp": 29, "min": 33.0, "pts": 22.1, "reb": 11.4, "ast": 2.0,
      "stl": 0.8, "blk": 1.6, "tov": 2.8,
      "dd_cats": 2
    }
  ]
}"#;

const GAME_JSON: &str = r#"{
  "game_id": "G20260220-001",
  "names": { "p1": "Kim Minjae" },
  "shots": [
    { "player_id": "p1", "team_id": "home", "quarter": 1, "made": 1,
      "shot_zone": "paint", "x": 12.0, "y": 5.0 },
    { "player_id": "p1", "team_id": "home", "quarter": 2, "made": 0,
      "shot_zone": "three_pt", "x": 44.0, "y": 20.0 },
    { "player_id": "p2", "team_id": "away", "quarter": 5, "made": 1,
      "shot_zone": "mid_range", "x": 30.0, "y": 15.0 }
  ]
}"#;

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[tokio::test]
async fn test_load_dataset_uses_fallback_when_primary_fails() {
    let fallback = write_temp(DATASET_JSON);
    let fallback_path = fallback.path().to_string_lossy().to_string();

    let dataset = load_dataset("definitely/not/there.json", &fallback_path, true)
        .await
        .expect("fallback source should load");

    assert_eq!(dataset.default_season, "046");
    assert_eq!(dataset.players.len(), 2);
    // Fields missing from the JSON deserialize as None
    assert_eq!(dataset.players[1].ts_pct, None);
    assert_eq!(dataset.players[0].ast_to, Some(3.0));
}

#[tokio::test]
async fn test_load_dataset_aborts_when_both_sources_fail() {
    let result = load_dataset("nope/a.json", "nope/b.json", true).await;
    assert!(matches!(result, Err(HoopError::DataUnavailable { .. })));
}

#[tokio::test]
async fn test_loaded_dataset_through_filter_and_sort() {
    let file = write_temp(DATASET_JSON);
    let path = file.path().to_string_lossy().to_string();
    let dataset = load_dataset(&path, &path, true).await.unwrap();

    let mut state = DashboardState::new(dataset.players);
    // Default sort is points descending
    assert_eq!(state.filtered[0].name, "Lee Jaehyun");

    state.apply_filter(&PlayerFilter {
        season: Some("046".to_string()),
        team: Some("kb".to_string()),
        pos: None,
        search: String::new(),
    });
    assert_eq!(state.filtered.len(), 1);
    assert_eq!(state.filtered[0].name, "Kim Minjae");
    assert_eq!(state.players.len(), 2);

    // Missing ts_pct sorts as zero, so the record that has one leads
    state.apply_filter(&PlayerFilter::default());
    state.sort.key = SortKey::TsPct;
    state.apply_filter(&PlayerFilter::default());
    assert_eq!(state.filtered[0].name, "Kim Minjae");
}

#[tokio::test]
async fn test_game_shot_file_through_shot_pipeline() {
    let file = write_temp(GAME_JSON);
    let path = file.path().to_string_lossy().to_string();
    let game = load_game_shots(&path).await.unwrap();

    assert_eq!(game.game_id, "G20260220-001");
    let shots: Vec<Shot> = normalize_game_shots(&game.shots, &game.names).collect();
    assert_eq!(shots.len(), game.shots.len());
    assert_eq!(shots[0].player_name, "Kim Minjae");
    assert_eq!(shots[2].player_name, "p2");

    let makes = filter_game_shots(
        &shots,
        &ShotFilter {
            result: Some(ShotResult::Made),
            ..Default::default()
        },
    );
    let summary = summarize_game_shots(&makes);
    assert_eq!(summary.attempts, 2);
    assert_eq!(summary.fg_pct, 100.0);

    let zones = build_zone_series(&shots);
    let labels: Vec<&str> = zones.iter().map(|b| b.label).collect();
    assert_eq!(labels, vec!["PAINT", "MID", "3PT"]);
}

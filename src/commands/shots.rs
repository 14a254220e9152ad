//! Shot chart command: normalize, filter, and aggregate a game's shots.

use serde::Serialize;

use crate::{
    data::load_game_shots,
    shots::{
        build_quarter_select_options, build_quarter_series, build_zone_series, filter_game_shots,
        normalize_game_shots, shot_chart_export_name, summarize_game_shots, QuarterSeries,
        SelectOption, Shot, ShotFilter, ShotSummary, ZoneBucket,
    },
    Result,
};

/// Configuration for the `shots` command.
#[derive(Debug)]
pub struct ShotsParams {
    pub game: String,
    pub filter: ShotFilter,
    pub export_name: bool,
    pub as_json: bool,
}

/// Everything the shot chart view consumes, in one payload.
#[derive(Debug, Serialize)]
struct ShotChartPayload {
    game_id: String,
    summary: ShotSummary,
    zones: Vec<ZoneBucket>,
    quarters: QuarterSeries,
    quarter_options: Vec<SelectOption>,
    export_name: String,
}

/// Load a game's shot file and print the filtered chart aggregates.
pub async fn handle_shots(params: ShotsParams) -> Result<()> {
    let game = load_game_shots(&params.game).await?;
    let export = shot_chart_export_name(&game.game_id, &params.filter);

    if params.export_name {
        println!("{}", export);
        return Ok(());
    }

    let shots: Vec<Shot> = normalize_game_shots(&game.shots, &game.names).collect();
    let filtered = filter_game_shots(&shots, &params.filter);

    let payload = ShotChartPayload {
        game_id: game.game_id,
        summary: summarize_game_shots(&filtered),
        zones: build_zone_series(&filtered),
        quarters: build_quarter_series(&filtered),
        quarter_options: build_quarter_select_options(&shots),
        export_name: export,
    };

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!(
        "✓ Game {}: {} of {} shots match",
        payload.game_id,
        filtered.len(),
        shots.len()
    );
    println!(
        "{} attempts, {} made, {} missed, {:.1}% FG",
        payload.summary.attempts,
        payload.summary.made,
        payload.summary.missed,
        payload.summary.fg_pct
    );
    for bucket in &payload.zones {
        println!(
            "{:<5} {:>3} attempts  {:>3}% FG",
            bucket.label, bucket.attempts, bucket.fg_pct
        );
    }
    for (i, label) in payload.quarters.labels.iter().enumerate() {
        println!(
            "{:<4} {} made / {} missed",
            label, payload.quarters.made[i], payload.quarters.missed[i]
        );
    }
    println!("Export name: {}", payload.export_name);

    Ok(())
}

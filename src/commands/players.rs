//! Player table command: load, filter, sort, print.

use crate::{
    data::load_dataset,
    format::StatFormat,
    roster::{DashboardState, PlayerFilter, SortDir, SortKey, SortSpec},
    Result,
};

/// Configuration for the `players` command.
#[derive(Debug)]
pub struct PlayersParams {
    pub primary: String,
    pub fallback: String,
    pub season: Option<String>,
    pub team: Option<String>,
    pub pos: Option<String>,
    pub search: String,
    pub sort: SortKey,
    pub dir: SortDir,
    pub as_json: bool,
}

/// Load the dataset and print the filtered, sorted player table.
pub async fn handle_players(params: PlayersParams) -> Result<()> {
    let quiet = params.as_json;
    if !quiet {
        println!("Loading league dataset...");
    }
    let dataset = load_dataset(&params.primary, &params.fallback, quiet).await?;

    let filter = PlayerFilter {
        season: params.season,
        team: params.team,
        pos: params.pos,
        search: params.search,
    };

    let mut state = DashboardState::new(dataset.players);
    state.sort = SortSpec {
        key: params.sort,
        dir: params.dir,
    };
    state.apply_filter(&filter);

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&state.filtered)?);
        return Ok(());
    }

    println!(
        "✓ {} of {} players match (sorted by {} {})",
        state.filtered.len(),
        state.players.len(),
        state.sort.key,
        state.sort.dir,
    );
    for player in &state.filtered {
        println!(
            "{:<20} {:>3} {:<4} {:>2}  gp {:>2}  pts {:>5}  reb {:>4}  ast {:>4}  ts {:>6}  a/to {:>5}  pir {:>5}",
            player.name,
            player.season,
            player.team,
            player.pos,
            player.gp,
            StatFormat::Number(1).format(Some(player.pts)),
            StatFormat::Number(1).format(Some(player.reb)),
            StatFormat::Number(1).format(Some(player.ast)),
            StatFormat::Pct.format(player.ts_pct),
            StatFormat::Ratio.format(player.ast_to),
            StatFormat::Number(1).format(player.pir),
        );
    }

    Ok(())
}

//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use hoopstat::{
    cli::{Commands, Hoop},
    commands::{
        players::{handle_players, PlayersParams},
        route::handle_route,
        seasons::handle_seasons,
        shots::{handle_shots, ShotsParams},
    },
    shots::ShotFilter,
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = Hoop::parse();

    match app.command {
        Commands::Players {
            sources,
            season,
            team,
            pos,
            search,
            sort,
            dir,
            json,
        } => {
            handle_players(PlayersParams {
                primary: sources.data,
                fallback: sources.fallback,
                season,
                team,
                pos,
                search,
                sort,
                dir,
                as_json: json,
            })
            .await?
        }

        Commands::Shots {
            game,
            player,
            team,
            result,
            quarter,
            export_name,
            json,
        } => {
            handle_shots(ShotsParams {
                game,
                filter: ShotFilter {
                    player_id: player,
                    team_id: team,
                    result,
                    quarter,
                },
                export_name,
                as_json: json,
            })
            .await?
        }

        Commands::Route { hash, json } => handle_route(&hash, json)?,

        Commands::Seasons { json } => handle_seasons(json)?,
    }

    Ok(())
}

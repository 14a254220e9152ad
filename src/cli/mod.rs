//! CLI argument definitions and parsing.

use clap::{Args, Parser, Subcommand};

use crate::data::{FALLBACK_DATA_PATH, PRIMARY_DATA_PATH};
use crate::roster::{SortDir, SortKey};
use crate::shots::ShotResult;

/// Dataset source arguments shared by data-backed commands.
#[derive(Debug, Args)]
pub struct DataSources {
    /// Primary dataset source (URL or file path).
    #[clap(long, default_value = PRIMARY_DATA_PATH)]
    pub data: String,

    /// Fallback source tried when the primary fails.
    #[clap(long, default_value = FALLBACK_DATA_PATH)]
    pub fallback: String,
}

#[derive(Debug, Parser)]
#[clap(name = "hoopstat", about = "Basketball league stats CLI")]
pub struct Hoop {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the filtered, sorted player table.
    Players {
        #[clap(flatten)]
        sources: DataSources,

        /// Season code (e.g. 046), or "all".
        #[clap(long, short)]
        season: Option<String>,

        /// Team id, or "all".
        #[clap(long, short)]
        team: Option<String>,

        /// Position, or "all".
        #[clap(long, short)]
        pos: Option<String>,

        /// Case-insensitive name search (substring match).
        #[clap(long, short = 'n', default_value = "")]
        search: String,

        /// Sort column.
        #[clap(long, value_enum, default_value_t = SortKey::Pts)]
        sort: SortKey,

        /// Sort direction.
        #[clap(long, value_enum, default_value_t = SortDir::Desc)]
        dir: SortDir,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Summarize a per-game shot file into chart-ready series.
    Shots {
        /// Shot file source (URL or file path).
        #[clap(long)]
        game: String,

        /// Filter by player id.
        #[clap(long, short)]
        player: Option<String>,

        /// Filter by team id.
        #[clap(long, short)]
        team: Option<String>,

        /// Filter by result: make/miss.
        #[clap(long, short)]
        result: Option<ShotResult>,

        /// Filter by quarter number (5 = OT1), or "all".
        #[clap(long, short)]
        quarter: Option<String>,

        /// Print the chart snapshot export file name and exit.
        #[clap(long)]
        export_name: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Resolve a dashboard hash route to its view/action pair.
    Route {
        /// Hash fragment, e.g. "#/players/095912".
        hash: String,

        /// Output the result as JSON.
        #[clap(long)]
        json: bool,
    },

    /// List the season code table.
    Seasons {
        /// Output the table as JSON.
        #[clap(long)]
        json: bool,
    },
}

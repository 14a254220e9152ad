//! Season table command.

use serde::Serialize;

use crate::{
    data::{default_season, SEASON_CODES},
    Result,
};

#[derive(Debug, Serialize)]
struct SeasonRow {
    code: &'static str,
    label: &'static str,
    default: bool,
}

/// Print the season code table, marking the default season.
pub fn handle_seasons(as_json: bool) -> Result<()> {
    let default = default_season();
    let rows: Vec<SeasonRow> = SEASON_CODES
        .iter()
        .map(|(code, label)| SeasonRow {
            code,
            label,
            default: *code == default,
        })
        .collect();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for row in &rows {
            let marker = if row.default { " (default)" } else { "" };
            println!("{}  {}{}", row.code, row.label, marker);
        }
    }

    Ok(())
}

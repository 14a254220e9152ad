//! JSON loading with primary/fallback source resolution.
//!
//! A source is either an `http(s)://` URL fetched with reqwest or a local
//! file path. The dataset loader tries the primary source once and falls
//! back to the secondary on any error or non-OK status; if both fail the
//! whole load aborts, there is no partial result.

use serde::de::DeserializeOwned;

use crate::error::{HoopError, Result};

use super::types::{Dataset, GameShots};

/// Default primary dataset location.
pub const PRIMARY_DATA_PATH: &str = "data/players.json";
/// Default fallback dataset location.
pub const FALLBACK_DATA_PATH: &str = "players.json";

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

async fn load_json<T: DeserializeOwned>(source: &str) -> Result<T> {
    if is_url(source) {
        let value = reqwest::get(source)
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;
        Ok(value)
    } else {
        let text = std::fs::read_to_string(source)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Load the league dataset from `primary`, falling back to `fallback`.
pub async fn load_dataset(primary: &str, fallback: &str, quiet: bool) -> Result<Dataset> {
    match load_json::<Dataset>(primary).await {
        Ok(dataset) => Ok(dataset),
        Err(err) => {
            if !quiet {
                println!("⚠ Primary source '{}' failed ({}), trying fallback", primary, err);
            }
            match load_json::<Dataset>(fallback).await {
                Ok(dataset) => Ok(dataset),
                Err(_) => Err(HoopError::DataUnavailable {
                    primary: primary.to_string(),
                    fallback: fallback.to_string(),
                }),
            }
        }
    }
}

/// Load a per-game shot file.
pub async fn load_game_shots(source: &str) -> Result<GameShots> {
    load_json::<GameShots>(source).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_url() {
        assert!(is_url("https://example.com/players.json"));
        assert!(is_url("http://localhost:8080/data.json"));
        assert!(!is_url("data/players.json"));
        assert!(!is_url("./players.json"));
    }

    #[tokio::test]
    async fn test_both_sources_failing_is_data_unavailable() {
        let result = load_dataset("missing/a.json", "missing/b.json", true).await;
        match result {
            Err(HoopError::DataUnavailable { primary, fallback }) => {
                assert_eq!(primary, "missing/a.json");
                assert_eq!(fallback, "missing/b.json");
            }
            other => panic!("expected DataUnavailable, got {:?}", other.map(|_| ())),
        }
    }
}

//! Static season-code table.
//!
//! The league identifies seasons by 3-digit short codes; display labels are
//! the usual `YYYY-YY` form. The table is fixed at build time and read-only.

/// Short code → display label, in code order.
pub const SEASON_CODES: &[(&str, &str)] = &[
    ("043", "2022-23"),
    ("044", "2023-24"),
    ("045", "2024-25"),
    ("046", "2025-26"),
];

/// Display label for a season code, if known.
pub fn season_label(code: &str) -> Option<&'static str> {
    SEASON_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
}

/// The default season: the lexicographically-largest code.
pub fn default_season() -> &'static str {
    SEASON_CODES
        .iter()
        .map(|(code, _)| *code)
        .max()
        .unwrap_or("")
}

//! Display formatting for raw stat values.
//!
//! Missing values always render as the placeholder dash rather than failing,
//! so table cells stay aligned no matter how sparse a record is.

/// Placeholder rendered for a stat that has no value.
pub const MISSING: &str = "-";

/// Format a 0..1 fraction as a percentage with one decimal, e.g. `52.3%`.
pub fn format_pct(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}%", v * 100.0),
        None => MISSING.to_string(),
    }
}

/// Format a plain number with a fixed decimal count.
pub fn format_number(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", decimals, v),
        None => MISSING.to_string(),
    }
}

/// Format a ratio stat with two decimals.
///
/// A ratio of exactly zero means "not applicable" (e.g. AST/TO with zero
/// turnovers recorded), so it renders as the placeholder, not `0.00`.
pub fn format_ratio(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 => format!("{:.2}", v),
        _ => MISSING.to_string(),
    }
}

/// How a stat column renders its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatFormat {
    /// 0..1 fraction shown as a percentage.
    Pct,
    /// Ratio with two decimals; zero shown as missing.
    Ratio,
    /// Plain number with the given decimal count.
    Number(usize),
}

impl StatFormat {
    pub fn format(self, value: Option<f64>) -> String {
        match self {
            StatFormat::Pct => format_pct(value),
            StatFormat::Ratio => format_ratio(value),
            StatFormat::Number(decimals) => format_number(value, decimals),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pct() {
        assert_eq!(format_pct(Some(0.523)), "52.3%");
        assert_eq!(format_pct(Some(1.0)), "100.0%");
        assert_eq!(format_pct(Some(0.0)), "0.0%");
        assert_eq!(format_pct(None), "-");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(Some(17.25), 1), "17.2");
        assert_eq!(format_number(Some(17.25), 2), "17.25");
        assert_eq!(format_number(Some(3.0), 0), "3");
        assert_eq!(format_number(None, 1), "-");
    }

    #[test]
    fn test_format_ratio_zero_is_not_applicable() {
        assert_eq!(format_ratio(Some(0.0)), "-");
        assert_eq!(format_ratio(None), "-");
        assert_eq!(format_ratio(Some(2.5)), "2.50");
        assert_eq!(format_ratio(Some(0.75)), "0.75");
    }

    #[test]
    fn test_stat_format_dispatch() {
        assert_eq!(StatFormat::Pct.format(Some(0.441)), "44.1%");
        assert_eq!(StatFormat::Ratio.format(Some(1.8)), "1.80");
        assert_eq!(StatFormat::Ratio.format(Some(0.0)), "-");
        assert_eq!(StatFormat::Number(1).format(Some(22.34)), "22.3");
        assert_eq!(StatFormat::Number(1).format(None), "-");
    }
}

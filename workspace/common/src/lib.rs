//! Transport-layer types shared between backend and frontend.
//! [`SectorPerformance`] mirrors the upstream FMP payload shape so the
//! proxy handler and the view deserialize the same records without
//! duplicating the model. The sector arithmetic (percentage parsing,
//! averaging, gain/loss classification) lives here for the same reason.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Label of the synthetic average row prepended to the sector list.
pub const ALL_SECTORS_LABEL: &str = "All sectors";

/// One market sector with its percentage change, as reported upstream.
///
/// `changes_percentage` stays a string end to end. Upstream formats it
/// inconsistently (`"1.23%"` or `"-0.45"`), so numeric use goes through
/// [`parse_change`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SectorPerformance {
    /// Sector display name, e.g. "Technology".
    pub sector: String,
    /// Signed percentage change as text, e.g. "1.23%" or "-0.45".
    #[serde(rename = "changesPercentage")]
    pub changes_percentage: String,
}

impl SectorPerformance {
    pub fn new(sector: impl Into<String>, changes_percentage: impl Into<String>) -> Self {
        Self {
            sector: sector.into(),
            changes_percentage: changes_percentage.into(),
        }
    }

    /// Parsed numeric value of the change, if the field holds one.
    pub fn change(&self) -> Option<f64> {
        parse_change(&self.changes_percentage)
    }

    /// Gain/loss classification of this record.
    ///
    /// Unparseable values classify as [`ChangeDirection::Loss`].
    pub fn direction(&self) -> ChangeDirection {
        ChangeDirection::of(self.change().unwrap_or(0.0))
    }
}

/// Visual classification of a percentage change.
///
/// Zero is a loss: gain requires a strictly positive change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDirection {
    Gain,
    Loss,
}

impl ChangeDirection {
    pub fn of(value: f64) -> Self {
        if value > 0.0 { Self::Gain } else { Self::Loss }
    }
}

/// Parse a percentage string by its longest leading numeric prefix,
/// tolerating a trailing `%` or any other suffix.
///
/// Returns `None` when the string carries no number at all.
pub fn parse_change(raw: &str) -> Option<f64> {
    let s = raw.trim();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (idx, ch) in s.char_indices() {
        match ch {
            '+' | '-' if idx == 0 => {}
            '.' if !seen_dot => seen_dot = true,
            '0'..='9' => seen_digit = true,
            _ => break,
        }
        end = idx + ch.len_utf8();
    }
    if !seen_digit {
        return None;
    }
    s[..end].parse().ok()
}

/// Format a change value the way the list renders it: two decimals plus `%`.
pub fn format_change(value: f64) -> String {
    format!("{value:.2}%")
}

/// Arithmetic mean of all parseable changes in `records`.
///
/// `None` when nothing parses, which covers the empty payload; the mean is
/// simply not defined there, so callers never divide by zero or format NaN.
pub fn average_change(records: &[SectorPerformance]) -> Option<f64> {
    let parsed: Vec<f64> = records.iter().filter_map(SectorPerformance::change).collect();
    if parsed.is_empty() {
        tracing::debug!(records = records.len(), "no parseable changes to average");
        return None;
    }
    Some(parsed.iter().sum::<f64>() / parsed.len() as f64)
}

/// Build the display list: the synthetic "All sectors" average row followed
/// by every upstream record in its original order.
///
/// `None` when no average exists (see [`average_change`]).
pub fn with_average_row(records: &[SectorPerformance]) -> Option<Vec<SectorPerformance>> {
    let average = average_change(records)?;
    let mut rows = Vec::with_capacity(records.len() + 1);
    rows.push(SectorPerformance::new(
        ALL_SECTORS_LABEL,
        format_change(average),
    ));
    rows.extend(records.iter().cloned());
    Some(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sector: &str, change: &str) -> SectorPerformance {
        SectorPerformance::new(sector, change)
    }

    #[test]
    fn test_parse_change_with_percent_suffix() {
        assert_eq!(parse_change("1.23%"), Some(1.23));
        assert_eq!(parse_change("-0.45"), Some(-0.45));
        assert_eq!(parse_change("+0.80%"), Some(0.80));
        assert_eq!(parse_change(" 2.50 %"), Some(2.50));
    }

    #[test]
    fn test_parse_change_rejects_non_numeric() {
        assert_eq!(parse_change("n/a"), None);
        assert_eq!(parse_change(""), None);
        assert_eq!(parse_change("%"), None);
        assert_eq!(parse_change("-"), None);
    }

    #[test]
    fn test_zero_classifies_as_loss() {
        // Gain requires a strictly positive change.
        assert_eq!(ChangeDirection::of(0.0), ChangeDirection::Loss);
        assert_eq!(record("Utilities", "0.00%").direction(), ChangeDirection::Loss);
        assert_eq!(record("Energy", "0.01%").direction(), ChangeDirection::Gain);
        assert_eq!(record("Tech", "-0.01%").direction(), ChangeDirection::Loss);
    }

    #[test]
    fn test_average_of_mixed_signs() {
        let records = vec![record("Tech", "2.00%"), record("Energy", "-1.00%")];
        assert_eq!(average_change(&records), Some(0.5));
    }

    #[test]
    fn test_average_all_positive_and_all_negative() {
        let gains = vec![record("A", "1.00%"), record("B", "2.00%"), record("C", "3.00%")];
        assert_eq!(average_change(&gains), Some(2.0));

        let losses = vec![record("A", "-1.50%"), record("B", "-2.50%")];
        assert_eq!(average_change(&losses), Some(-2.0));
    }

    #[test]
    fn test_average_of_empty_payload_is_none() {
        assert_eq!(average_change(&[]), None);
        assert_eq!(with_average_row(&[]), None);
    }

    #[test]
    fn test_unparseable_records_are_skipped_in_average() {
        let records = vec![record("Tech", "2.00%"), record("Energy", "n/a")];
        assert_eq!(average_change(&records), Some(2.0));

        let all_garbage = vec![record("Tech", "n/a")];
        assert_eq!(average_change(&all_garbage), None);
    }

    #[test]
    fn test_with_average_row_prepends_aggregate() {
        let records = vec![record("Tech", "2.00%"), record("Energy", "-1.00%")];
        let rows = with_average_row(&records).unwrap();

        assert_eq!(rows.len(), records.len() + 1);
        assert_eq!(rows[0].sector, ALL_SECTORS_LABEL);
        assert_eq!(rows[0].changes_percentage, "0.50%");
        assert_eq!(rows[1], records[0]);
        assert_eq!(rows[2], records[1]);
    }

    #[test]
    fn test_format_change_rounds_to_two_decimals() {
        assert_eq!(format_change(0.5), "0.50%");
        assert_eq!(format_change(-1.005), "-1.00%");
        assert_eq!(format_change(3.14159), "3.14%");
    }

    #[test]
    fn test_serde_round_trips_upstream_field_name() {
        let json = r#"[{"sector":"Technology","changesPercentage":"1.23%"}]"#;
        let records: Vec<SectorPerformance> = serde_json::from_str(json).unwrap();
        assert_eq!(records[0].sector, "Technology");
        assert_eq!(records[0].changes_percentage, "1.23%");

        let back = serde_json::to_string(&records).unwrap();
        assert!(back.contains("changesPercentage"));
    }
}

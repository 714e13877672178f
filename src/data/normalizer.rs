//! Row Normalizer Module
//! Turns raw CSV rows into scaled observations, or a reason the row was dropped.

use crate::data::record::{Metric, Observation, RawRow};
use thiserror::Error;

/// Series label prefix for arrivals (thousands).
pub const ARRIVALS_PREFIX: &str = "Tourist/visitor arrivals";
/// Series label prefix for expenditure (millions of USD).
pub const EXPENDITURE_PREFIX: &str = "Tourism expenditure";

/// Why a row produced no observation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    #[error("no country name")]
    MissingCountry,
    #[error("year is not an integer")]
    InvalidYear,
    #[error("no series label")]
    MissingSeries,
    #[error("value is not a finite number")]
    InvalidValue,
    #[error("series label is neither arrivals nor expenditure")]
    UnrecognizedSeries,
}

impl RejectReason {
    pub const ALL: [RejectReason; 5] = [
        RejectReason::MissingCountry,
        RejectReason::InvalidYear,
        RejectReason::MissingSeries,
        RejectReason::InvalidValue,
        RejectReason::UnrecognizedSeries,
    ];
}

/// Outcome of matching a series label against the known prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesClass {
    Accepted(Metric),
    Rejected(RejectReason),
}

/// Parse a possibly comma-grouped number such as `"1,200"`.
///
/// Returns `None` for absent, empty or non-finite input. No locale handling.
pub fn parse_number(text: Option<&str>) -> Option<f64> {
    let text = text?;
    if text.is_empty() {
        return None;
    }

    let cleaned = text.replace(',', "");
    let cleaned = cleaned.trim();
    // Blank after cleaning is absent, not zero, so it never overwrites an
    // earlier value for the same metric.
    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Case-sensitive prefix match; arrivals is checked first.
pub fn classify_series(label: &str) -> SeriesClass {
    if label.starts_with(ARRIVALS_PREFIX) {
        SeriesClass::Accepted(Metric::Arrivals)
    } else if label.starts_with(EXPENDITURE_PREFIX) {
        SeriesClass::Accepted(Metric::Expenditure)
    } else {
        SeriesClass::Rejected(RejectReason::UnrecognizedSeries)
    }
}

/// Country name: the unnamed column first, then `Region/Country/Area`.
pub fn resolve_country(row: &RawRow) -> Option<String> {
    let primary = non_blank(row.unnamed.as_deref());
    let fallback = non_blank(row.region.as_deref());
    primary.or(fallback).map(str::to_string)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_year(text: Option<&str>) -> Option<i32> {
    let year = text?.trim().parse::<f64>().ok()?;
    if !year.is_finite() || year.fract() != 0.0 {
        return None;
    }
    if year < i32::MIN as f64 || year > i32::MAX as f64 {
        return None;
    }
    Some(year as i32)
}

/// Normalize one row. A row yields at most one observation.
pub fn normalize_row(row: &RawRow) -> Result<Observation, RejectReason> {
    let country = resolve_country(row).ok_or(RejectReason::MissingCountry)?;
    let year = parse_year(row.year.as_deref()).ok_or(RejectReason::InvalidYear)?;
    let series = non_blank(row.series.as_deref()).ok_or(RejectReason::MissingSeries)?;
    let value = parse_number(row.value.as_deref()).ok_or(RejectReason::InvalidValue)?;

    let metric = match classify_series(series) {
        SeriesClass::Accepted(metric) => metric,
        SeriesClass::Rejected(reason) => return Err(reason),
    };

    let value = value * metric.scale();
    if !value.is_finite() {
        return Err(RejectReason::InvalidValue);
    }

    Ok(Observation {
        country,
        year,
        metric,
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(country: &str, year: &str, series: &str, value: &str) -> RawRow {
        let cell = |s: &str| (!s.is_empty()).then(|| s.to_string());
        RawRow {
            unnamed: cell(country),
            region: None,
            year: cell(year),
            series: cell(series),
            value: cell(value),
        }
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(Some("1,200")), Some(1200.0));
        assert_eq!(parse_number(Some("  1,234,567.5 ")), Some(1_234_567.5));
        assert_eq!(parse_number(Some("-12")), Some(-12.0));
        assert_eq!(parse_number(Some("0")), Some(0.0));
        assert_eq!(parse_number(Some("")), None);
        assert_eq!(parse_number(Some(" , ")), None);
        assert_eq!(parse_number(Some("abc")), None);
        assert_eq!(parse_number(Some("inf")), None);
        assert_eq!(parse_number(Some("NaN")), None);
        assert_eq!(parse_number(Some("12%")), None);
        assert_eq!(parse_number(None), None);
    }

    #[test]
    fn test_classify_series() {
        assert_eq!(
            classify_series("Tourist/visitor arrivals (thousands)"),
            SeriesClass::Accepted(Metric::Arrivals)
        );
        assert_eq!(
            classify_series("Tourism expenditure (millions of US dollars)"),
            SeriesClass::Accepted(Metric::Expenditure)
        );
        assert_eq!(
            classify_series("tourism expenditure"),
            SeriesClass::Rejected(RejectReason::UnrecognizedSeries)
        );
        assert_eq!(
            classify_series("Total Tourism expenditure"),
            SeriesClass::Rejected(RejectReason::UnrecognizedSeries)
        );
    }

    #[test]
    fn test_country_fallback() {
        let mut raw = row("", "2019", "Tourism expenditure", "1");
        raw.region = Some("  Atlantis ".to_string());
        assert_eq!(resolve_country(&raw).as_deref(), Some("Atlantis"));

        raw.unnamed = Some("   ".to_string());
        assert_eq!(resolve_country(&raw).as_deref(), Some("Atlantis"));

        raw.unnamed = Some(" Wakanda".to_string());
        assert_eq!(resolve_country(&raw).as_deref(), Some("Wakanda"));

        raw.unnamed = None;
        raw.region = None;
        assert_eq!(resolve_country(&raw), None);
    }

    #[test]
    fn test_normalize_scales_values() {
        let arrivals = normalize_row(&row(
            "Wakanda",
            "2019",
            "Tourist/visitor arrivals, thousands",
            "1,200",
        ))
        .unwrap();
        assert_eq!(arrivals.metric, Metric::Arrivals);
        assert_eq!(arrivals.value, 1_200_000.0);
        assert_eq!(arrivals.year, 2019);

        let spend = normalize_row(&row(
            "Wakanda",
            "2019",
            "Tourism expenditure, millions",
            "50",
        ))
        .unwrap();
        assert_eq!(spend.metric, Metric::Expenditure);
        assert_eq!(spend.value, 50_000_000.0);
    }

    #[test]
    fn test_normalize_rejection_reasons() {
        let series = "Tourism expenditure";
        assert_eq!(
            normalize_row(&row("", "2019", series, "1")),
            Err(RejectReason::MissingCountry)
        );
        assert_eq!(
            normalize_row(&row("Wakanda", "N/A", series, "1")),
            Err(RejectReason::InvalidYear)
        );
        assert_eq!(
            normalize_row(&row("Wakanda", "2019.5", series, "1")),
            Err(RejectReason::InvalidYear)
        );
        assert_eq!(
            normalize_row(&row("Wakanda", "2019", "", "1")),
            Err(RejectReason::MissingSeries)
        );
        assert_eq!(
            normalize_row(&row("Wakanda", "2019", series, "abc")),
            Err(RejectReason::InvalidValue)
        );
        assert_eq!(
            normalize_row(&row("Wakanda", "2019", "Population", "1")),
            Err(RejectReason::UnrecognizedSeries)
        );
    }

    #[test]
    fn test_overflow_after_scaling_is_rejected() {
        assert_eq!(
            normalize_row(&row("Wakanda", "2019", "Tourism expenditure", "1e305")),
            Err(RejectReason::InvalidValue)
        );
        let arrivals = normalize_row(&row("Wakanda", "2019", "Tourist/visitor arrivals", "1e305"));
        assert!(arrivals.is_ok_and(|o| o.value.is_finite()));
    }

    #[test]
    fn test_year_is_trimmed() {
        let obs = normalize_row(&row("Wakanda", " 2005 ", "Tourism expenditure", "3")).unwrap();
        assert_eq!(obs.year, 2005);
    }
}

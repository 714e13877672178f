//! Record Types
//! Raw rows, per-row observations and the per-country records handed to the charts.

/// One CSV data line, reduced to the columns the pipeline reads.
/// Empty cells and missing columns are both `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    /// The blank-named column (country name in the UN layout).
    pub unnamed: Option<String>,
    /// `Region/Country/Area`
    pub region: Option<String>,
    pub year: Option<String>,
    pub series: Option<String>,
    pub value: Option<String>,
}

/// Which tourism series an observation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Arrivals,
    Expenditure,
}

impl Metric {
    /// Multiplier from source units to absolute units.
    /// Arrivals are published in thousands, expenditure in millions.
    pub fn scale(self) -> f64 {
        match self {
            Metric::Arrivals => 1_000.0,
            Metric::Expenditure => 1_000_000.0,
        }
    }
}

/// A single (country, year, metric, value) fact. `value` is already scaled.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub country: String,
    pub year: i32,
    pub metric: Metric,
    pub value: f64,
}

/// Per-country, per-year accumulator. Holds at most one value per metric.
#[derive(Debug, Clone, PartialEq)]
pub struct YearRecord {
    pub country: String,
    pub year: i32,
    pub arrivals: Option<f64>,
    pub expenditure: Option<f64>,
}

impl YearRecord {
    pub fn new(country: &str, year: i32) -> Self {
        Self {
            country: country.to_string(),
            year,
            arrivals: None,
            expenditure: None,
        }
    }

    /// Store a metric value; a repeat for the same metric replaces the earlier one.
    pub fn set(&mut self, metric: Metric, value: f64) {
        match metric {
            Metric::Arrivals => self.arrivals = Some(value),
            Metric::Expenditure => self.expenditure = Some(value),
        }
    }

    /// Both metrics present with a usable value.
    ///
    /// Zero and NaN count as missing: a zero-arrival or zero-spend year cannot
    /// be placed on the charts, so it is never picked as a country's latest
    /// complete year. Negative values are kept.
    pub fn is_complete(&self) -> bool {
        is_observed(self.arrivals) && is_observed(self.expenditure)
    }
}

fn is_observed(value: Option<f64>) -> bool {
    matches!(value, Some(v) if v != 0.0 && !v.is_nan())
}

/// Final per-country record: the latest year with both metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRecord {
    pub country: String,
    pub year: i32,
    pub tourist_arrivals: f64,
    pub tourism_expenditure: f64,
}

impl CountryRecord {
    /// Convert a complete year record. Returns `None` if either metric is unset.
    pub fn from_year_record(record: &YearRecord) -> Option<Self> {
        Some(Self {
            country: record.country.clone(),
            year: record.year,
            tourist_arrivals: record.arrivals?,
            tourism_expenditure: record.expenditure?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites_same_metric() {
        let mut record = YearRecord::new("Wakanda", 2019);
        record.set(Metric::Arrivals, 1.0);
        record.set(Metric::Arrivals, 2.0);
        assert_eq!(record.arrivals, Some(2.0));
        assert_eq!(record.expenditure, None);
    }

    #[test]
    fn test_zero_is_not_complete() {
        let mut record = YearRecord::new("Wakanda", 2019);
        record.set(Metric::Arrivals, 0.0);
        record.set(Metric::Expenditure, 5.0);
        assert!(!record.is_complete());

        record.set(Metric::Arrivals, -3.0);
        assert!(record.is_complete());
    }

    #[test]
    fn test_country_record_requires_both_metrics() {
        let mut record = YearRecord::new("Wakanda", 2019);
        record.set(Metric::Arrivals, 1.0);
        assert!(CountryRecord::from_year_record(&record).is_none());

        record.set(Metric::Expenditure, 2.0);
        let country = CountryRecord::from_year_record(&record).unwrap();
        assert_eq!(country.tourist_arrivals, 1.0);
        assert_eq!(country.tourism_expenditure, 2.0);
    }
}

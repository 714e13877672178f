//! Chart Scales
//! Axis domains, bubble radius scale and the country color palette.

use crate::data::CountryRecord;
use std::ops::Range;

/// Tableau10, assigned to countries in dataset order.
pub const PALETTE: [(u8, u8, u8); 10] = [
    (78, 121, 167),  // Blue
    (242, 142, 44),  // Orange
    (225, 87, 89),   // Red
    (118, 183, 178), // Teal
    (89, 161, 79),   // Green
    (237, 201, 73),  // Yellow
    (175, 122, 161), // Purple
    (255, 157, 167), // Pink
    (156, 117, 95),  // Brown
    (186, 176, 171), // Grey
];

/// Ticks targeted when widening a domain to round boundaries.
const NICE_TICKS: usize = 10;

pub fn palette_color(index: usize) -> (u8, u8, u8) {
    PALETTE[index % PALETTE.len()]
}

/// Shared x/y domains for both charts.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScales {
    pub x_domain: Range<f64>,
    pub y_domain: Range<f64>,
}

impl ChartScales {
    /// x spans arrivals (padded 0.9x..1.05x), y spans expenditure (0.85x..1.05x).
    pub fn from_records(records: &[CountryRecord]) -> Self {
        let (x_min, x_max) = extent(records.iter().map(|r| r.tourist_arrivals));
        let (y_min, y_max) = extent(records.iter().map(|r| r.tourism_expenditure));

        Self {
            x_domain: nice_domain(x_min * 0.9, x_max * 1.05),
            y_domain: nice_domain(y_min * 0.85, y_max * 1.05),
        }
    }
}

fn extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if min.is_infinite() {
        (0.0, 1.0)
    } else {
        (min, max)
    }
}

fn nice_step(range: f64, target_steps: usize) -> f64 {
    let raw_step = range / target_steps as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;

    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice * magnitude
}

/// Widen `[lo, hi]` outward to multiples of a round step.
pub fn nice_domain(lo: f64, hi: f64) -> Range<f64> {
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    let span = hi - lo;
    if span <= 0.0 || !span.is_finite() {
        let pad = if lo == 0.0 { 1.0 } else { lo.abs() * 0.5 };
        return (lo - pad)..(hi + pad);
    }

    let step = nice_step(span, NICE_TICKS);
    (lo / step).floor() * step..(hi / step).ceil() * step
}

/// Square-root radius scale for the bubble chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleScale {
    max_value: f64,
    min_radius: f32,
    max_radius: f32,
}

impl BubbleScale {
    pub fn new(max_value: f64, min_radius: f32, max_radius: f32) -> Self {
        Self {
            max_value,
            min_radius,
            max_radius,
        }
    }

    /// Domain `[0, max expenditure]`.
    pub fn for_records(records: &[CountryRecord], min_radius: f32, max_radius: f32) -> Self {
        let max_value = records
            .iter()
            .map(|r| r.tourism_expenditure)
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max);
        Self::new(max_value, min_radius, max_radius)
    }

    pub fn radius(&self, value: f64) -> f32 {
        if self.max_value <= 0.0 || !value.is_finite() {
            return self.min_radius;
        }
        let t = (value.max(0.0) / self.max_value).sqrt();
        self.min_radius + (self.max_radius - self.min_radius) * t as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(arrivals: f64, spend: f64) -> CountryRecord {
        CountryRecord {
            country: "X".to_string(),
            year: 2019,
            tourist_arrivals: arrivals,
            tourism_expenditure: spend,
        }
    }

    #[test]
    fn test_domains_cover_padded_extent() {
        let records = vec![record(1_000_000.0, 2e9), record(9_000_000.0, 8e9)];
        let scales = ChartScales::from_records(&records);

        assert!(scales.x_domain.start <= 900_000.0);
        assert!(scales.x_domain.end >= 9_450_000.0);
        assert!(scales.y_domain.start <= 1.7e9);
        assert!(scales.y_domain.end >= 8.4e9);
    }

    #[test]
    fn test_nice_domain() {
        assert_eq!(nice_domain(0.9, 9.45), 0.0..10.0);
        assert_eq!(nice_domain(13.0, 87.0), 10.0..90.0);
        let single = nice_domain(5.0, 5.0);
        assert!(single.start < 5.0 && single.end > 5.0);
    }

    #[test]
    fn test_bubble_radius() {
        let scale = BubbleScale::for_records(&[record(1.0, 100.0), record(1.0, 25.0)], 4.0, 18.0);
        assert_eq!(scale.radius(0.0), 4.0);
        assert_eq!(scale.radius(100.0), 18.0);
        assert_eq!(scale.radius(25.0), 11.0);
        assert_eq!(scale.radius(-5.0), 4.0);
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(palette_color(0), palette_color(10));
        assert_ne!(palette_color(0), palette_color(1));
    }
}

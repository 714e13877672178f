//! Number formatting for tooltips, axis ticks and status lines.

/// `1234567` -> `"1.23M"`
pub fn format_millions(value: f64) -> String {
    format!("{:.2}M", value / 1e6)
}

/// `2306000000` -> `"$2.31B"`
pub fn format_billions(value: f64) -> String {
    format!("${:.2}B", value / 1e9)
}

/// Axis tick for arrivals, e.g. `"2.5M"`.
pub fn arrivals_tick(value: f64) -> String {
    format!("{}M", trim_decimal(value / 1e6))
}

/// Axis tick for expenditure, e.g. `"$1.5B"`.
pub fn expenditure_tick(value: f64) -> String {
    format!("${}B", trim_decimal(value / 1e9))
}

/// Group an integer count with commas: `12345` -> `"12,345"`.
pub fn format_count(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn trim_decimal(value: f64) -> String {
    let formatted = format!("{:.3}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tooltip_formats() {
        assert_eq!(format_millions(1_200_000.0), "1.20M");
        assert_eq!(format_billions(50_000_000.0), "$0.05B");
        assert_eq!(format_billions(2_306_000_000.0), "$2.31B");
    }

    #[test]
    fn test_tick_formats() {
        assert_eq!(arrivals_tick(0.0), "0M");
        assert_eq!(arrivals_tick(2_500_000.0), "2.5M");
        assert_eq!(arrivals_tick(20_000_000.0), "20M");
        assert_eq!(expenditure_tick(1_500_000_000.0), "$1.5B");
        assert_eq!(expenditure_tick(-0.0001), "$0B");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}

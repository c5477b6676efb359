//! Display formatting

use chrono::{Duration, NaiveDate};

/// `Rp 1.250.000` style amount, rounded to whole rupiah
pub fn format_rupiah(amount: f64) -> String {
    let rounded = amount.round().max(0.0) as u64;
    let digits = rounded.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("Rp {grouped}")
}

/// Default stay: checking in on `today`, out the next day, as `YYYY-MM-DD`
pub fn default_stay(today: NaiveDate) -> (String, String) {
    let tomorrow = today + Duration::days(1);
    (
        today.format("%Y-%m-%d").to_string(),
        tomorrow.format("%Y-%m-%d").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rupiah_grouping() {
        assert_eq!(format_rupiah(0.0), "Rp 0");
        assert_eq!(format_rupiah(950.0), "Rp 950");
        assert_eq!(format_rupiah(1500.0), "Rp 1.500");
        assert_eq!(format_rupiah(1_250_000.4), "Rp 1.250.000");
    }

    #[test]
    fn test_default_stay_crosses_month() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(
            default_stay(today),
            ("2024-01-31".to_string(), "2024-02-01".to_string())
        );
    }
}

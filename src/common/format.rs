//! Display formatting for dates, prices and chart rows.

use chrono::{Datelike, NaiveDate};

use crate::models::PricePoint;

const INDO_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Ags", "Sep", "Okt", "Nov", "Des",
];

/// Short Indonesian month name for a zero-based month index (wraps mod 12).
pub fn indo_month(month_index: usize) -> &'static str {
    INDO_MONTHS[month_index % 12]
}

/// `"5 Ags 2024"` style label used on the chart axis.
pub fn format_full_date(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        indo_month(date.month0() as usize),
        date.year()
    )
}

/// Two decimals with comma thousands separators, e.g. `1,234.50`.
pub fn format_price(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

/// Ticker shown to users: exchange suffix `.JK` removed.
pub fn display_code(code: &str) -> &str {
    code.strip_suffix(".JK").unwrap_or(code)
}

/// Historical rows first, forecast rows after, each group keeping its order.
pub fn order_history_first(points: &[PricePoint]) -> Vec<PricePoint> {
    let (history, forecast): (Vec<PricePoint>, Vec<PricePoint>) =
        points.iter().copied().partition(|p| !p.is_forecast());
    history.into_iter().chain(forecast).collect()
}

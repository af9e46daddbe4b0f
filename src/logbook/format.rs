//! Cell formatting shared by the logbook column tables.
//!
//! Display conventions: absent values render `-`, dates render `MM/DD/YYYY`,
//! numeric-or-"N/A" fields render `N/A`, booleans render `Yes`/`No`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A field the API serves as either a number or free text ("N/A", "TBD").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumOrText {
    Num(f64),
    Text(String),
}

/// Empty or absent strings render as a dash.
pub fn dash(v: &Option<String>) -> String {
    match v.as_deref() {
        Some(s) if !s.trim().is_empty() => s.to_string(),
        _ => "-".to_string(),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}

fn parse_date_time(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").ok()
}

/// `MM/DD/YYYY`, or `-` when absent or unparseable.
pub fn date(v: &Option<String>) -> String {
    match v.as_deref() {
        Some(raw) if !raw.trim().is_empty() => parse_date(raw)
            .map(|d| d.format("%m/%d/%Y").to_string())
            .unwrap_or_else(|| "-".to_string()),
        _ => "-".to_string(),
    }
}

/// `MM/DD/YYYY HH:MM`, or `-` when absent or unparseable.
pub fn date_time(v: &Option<String>) -> String {
    match v.as_deref() {
        Some(raw) if !raw.trim().is_empty() => parse_date_time(raw)
            .map(|dt| dt.format("%m/%d/%Y %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string()),
        _ => "-".to_string(),
    }
}

/// Numeric-or-"N/A" fields: absent values render `N/A`.
pub fn num_or_na(v: &Option<NumOrText>) -> String {
    match v {
        Some(NumOrText::Num(n)) => format_num(*n),
        Some(NumOrText::Text(s)) if !s.trim().is_empty() => s.clone(),
        _ => "N/A".to_string(),
    }
}

/// Plain numeric fields: absent or unparseable values render `0`.
pub fn number(v: &Option<NumOrText>) -> String {
    match v {
        Some(NumOrText::Num(n)) => format_num(*n),
        Some(NumOrText::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map(format_num)
            .unwrap_or_else(|_| "0".to_string()),
        None => "0".to_string(),
    }
}

fn format_num(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Schedule dates that are literally `"NA"` pass through; otherwise dates.
pub fn date_or_na(v: &Option<String>) -> String {
    match v.as_deref() {
        Some(s) if s.trim().eq_ignore_ascii_case("na") => "NA".to_string(),
        _ => date(v),
    }
}

/// Money-style numbers: grouped thousands, two decimals, `0.00` fallback.
pub fn fixed2(v: &Option<NumOrText>) -> String {
    let n = match v {
        Some(NumOrText::Num(n)) => *n,
        Some(NumOrText::Text(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        None => 0.0,
    };
    let negative = n < 0.0;
    let cents = (n.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;
    let mut grouped = String::new();
    let digits = whole.to_string();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{}{}.{:02}", if negative { "-" } else { "" }, grouped, frac)
}

/// Percentages in the report convention: `12.50 %`.
pub fn percent2(v: &Option<NumOrText>) -> String {
    format!("{} %", fixed2(v))
}

/// Schedule durations: numbers gain a `days` suffix, text passes through.
pub fn duration_days(v: &Option<NumOrText>) -> String {
    match v {
        Some(NumOrText::Num(n)) => format!("{} days", format_num(*n)),
        Some(NumOrText::Text(s)) if !s.trim().is_empty() => s.clone(),
        _ => "-".to_string(),
    }
}

pub fn yes_no(v: Option<bool>) -> String {
    match v {
        Some(true) => "Yes".to_string(),
        Some(false) => "No".to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_for_empty_and_missing() {
        assert_eq!(dash(&None), "-");
        assert_eq!(dash(&Some("  ".to_string())), "-");
        assert_eq!(dash(&Some("RCC 1G".to_string())), "RCC 1G");
    }

    #[test]
    fn dates_render_us_style() {
        assert_eq!(date(&Some("2025-11-28".to_string())), "11/28/2025");
        assert_eq!(date(&Some("2025-11-28T00:00:00".to_string())), "11/28/2025");
        assert_eq!(date(&Some("2025-11-28T08:15:00Z".to_string())), "11/28/2025");
        assert_eq!(date(&None), "-");
        assert_eq!(date(&Some("yesterday".to_string())), "-");
        assert_eq!(
            date_time(&Some("2025-11-28T08:15:00".to_string())),
            "11/28/2025 08:15"
        );
    }

    #[test]
    fn num_or_na_handles_both_arms() {
        assert_eq!(num_or_na(&Some(NumOrText::Num(6.0))), "6");
        assert_eq!(num_or_na(&Some(NumOrText::Num(2.5))), "2.5");
        assert_eq!(num_or_na(&Some(NumOrText::Text("N/A".to_string()))), "N/A");
        assert_eq!(num_or_na(&None), "N/A");
        assert_eq!(num_or_na(&Some(NumOrText::Text(String::new()))), "N/A");
    }

    #[test]
    fn number_defaults_to_zero() {
        assert_eq!(number(&Some(NumOrText::Num(8.0))), "8");
        assert_eq!(number(&Some(NumOrText::Text("7.5".to_string()))), "7.5");
        assert_eq!(number(&Some(NumOrText::Text("n/a".to_string()))), "0");
        assert_eq!(number(&None), "0");
    }

    #[test]
    fn schedule_dates_pass_na_through() {
        assert_eq!(date_or_na(&Some("NA".to_string())), "NA");
        assert_eq!(date_or_na(&Some("2024-01-12".to_string())), "01/12/2024");
        assert_eq!(date_or_na(&None), "-");
    }

    #[test]
    fn fixed2_groups_thousands() {
        assert_eq!(fixed2(&Some(NumOrText::Num(1166.0))), "1,166.00");
        assert_eq!(fixed2(&Some(NumOrText::Num(54.18))), "54.18");
        assert_eq!(fixed2(&Some(NumOrText::Num(11_943_358.0))), "11,943,358.00");
        assert_eq!(fixed2(&Some(NumOrText::Text("63176.21".to_string()))), "63,176.21");
        assert_eq!(fixed2(&None), "0.00");
        assert_eq!(percent2(&Some(NumOrText::Num(0.0))), "0.00 %");
    }

    #[test]
    fn durations_gain_a_days_suffix() {
        assert_eq!(duration_days(&Some(NumOrText::Num(192.8))), "192.8 days");
        assert_eq!(
            duration_days(&Some(NumOrText::Text("192.8".to_string()))),
            "192.8"
        );
        assert_eq!(duration_days(&None), "-");
    }

    #[test]
    fn booleans_render_yes_no() {
        assert_eq!(yes_no(Some(true)), "Yes");
        assert_eq!(yes_no(Some(false)), "No");
        assert_eq!(yes_no(None), "-");
    }
}

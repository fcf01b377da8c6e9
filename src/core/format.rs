// src/core/format.rs
use crate::config::consts::PLACEHOLDER;
use crate::filter::parse_money;

/// 1234.5 → "$1,234.50"
pub fn money(v: f64) -> String {
    let neg = v < 0.0;
    let cents = (v.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}${grouped}.{frac:02}", if neg { "-" } else { "" })
}

/// Raw sheet value → "$x,xxx.xx", or the placeholder when it isn't a number.
pub fn money_or_placeholder(raw: Option<&str>) -> String {
    raw.and_then(parse_money)
        .map(money)
        .unwrap_or_else(|| s!(PLACEHOLDER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(money(0.0), "$0.00");
        assert_eq!(money(99.5), "$99.50");
        assert_eq!(money(1234.0), "$1,234.00");
        assert_eq!(money(1234567.891), "$1,234,567.89");
    }

    #[test]
    fn placeholder_on_garbage() {
        assert_eq!(money_or_placeholder(Some("$2,400")), "$2,400.00");
        assert_eq!(money_or_placeholder(Some("TBD")), "N/A");
        assert_eq!(money_or_placeholder(None), "N/A");
    }
}

//! Rupee amounts. The API carries integer paise; users type rupees with
//! Indian digit grouping (`1,50,000`).

use rust_decimal::RoundingStrategy;
use rust_decimal::prelude::*;

/// Parse a user-typed rupee string into paise.
///
/// Commas, whitespace and the `₹` sign are ignored. Blank or unparseable
/// input yields `0` rather than an error; the backend rejects
/// non-positive amounts.
pub fn parse_inr_to_paise(input: &str) -> i64 {
    let cleaned: String = input
        .chars()
        .filter(|c| !(c.is_whitespace() || *c == ',' || *c == '₹'))
        .collect();
    if cleaned.is_empty() {
        return 0;
    }
    // Exact decimal first; exponent forms (`1e3`) go through f64 like JS `Number`.
    let value = match Decimal::from_str(&cleaned) {
        Ok(v) => v,
        Err(_) => match cleaned.parse::<f64>().ok().and_then(Decimal::from_f64) {
            Some(v) => v,
            None => return 0,
        },
    };
    value
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|p| p.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|p| p.to_i64())
        .unwrap_or(0)
}

/// Format paise the way `Intl.NumberFormat("en-IN", INR)` does:
/// `₹1,50,000.00`, `-₹12.50`.
pub fn format_paise_inr(paise: i64) -> String {
    let sign = if paise < 0 { "-" } else { "" };
    let abs = paise.unsigned_abs();
    format!("{sign}₹{}.{:02}", group_indian(abs / 100), abs % 100)
}

/// Plain rupee value for prefilling an amount input (`12345` -> `123.45`).
pub fn paise_to_input(paise: i64) -> String {
    Decimal::new(paise, 2).normalize().to_string()
}

// Last three digits, then pairs: 1,23,45,678
fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

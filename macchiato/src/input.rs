//! Prompt helpers
//!
//! Line-based stdin prompts. Parse failures return `None` and the caller
//! re-prompts or shows an inline message; nothing panics on bad input.

use std::io::{self, Write};

use chrono::NaiveDate;

use shared::util::dollars_to_cents;

pub fn get_input(prompt: &str) -> String {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut input = String::new();
    io::stdin().read_line(&mut input).unwrap_or(0);
    input.trim().to_string()
}

pub fn get_input_with_default(prompt: &str, default: &str) -> String {
    print!("{} [{}]: ", prompt, default);
    io::stdout().flush().ok();
    let mut input = String::new();
    io::stdin().read_line(&mut input).unwrap_or(0);
    let input = input.trim();
    if input.is_empty() {
        default.to_string()
    } else {
        input.to_string()
    }
}

/// Yes/no confirmation; only an explicit `y`/`yes` confirms.
pub fn confirm(prompt: &str) -> bool {
    let answer = get_input(&format!("{} (y/n): ", prompt));
    matches!(answer.to_lowercase().as_str(), "y" | "yes")
}

/// Parse a dollars amount (`"4.50"`) into cents.
pub fn parse_dollars(input: &str) -> Option<i64> {
    input.trim().trim_start_matches('$').parse::<f64>().ok().map(dollars_to_cents)
}

/// Parse a whole number (quantities, custom tips in cents).
pub fn parse_integer(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok()
}

/// Parse a decimal number (tax-rate percentages).
pub fn parse_float(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok()
}

/// Parse a 1-based selection into an index within `len`.
pub fn parse_selection(input: &str, len: usize) -> Option<usize> {
    let n = input.trim().parse::<usize>().ok()?;
    if n >= 1 && n <= len { Some(n - 1) } else { None }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dollars() {
        assert_eq!(parse_dollars("4.50"), Some(450));
        assert_eq!(parse_dollars("$10.98"), Some(1098));
        assert_eq!(parse_dollars("0"), Some(0));
        assert_eq!(parse_dollars("-2.00"), Some(-200));
        assert_eq!(parse_dollars("ten"), None);
        assert_eq!(parse_dollars(""), None);
    }

    #[test]
    fn test_parse_selection_bounds() {
        assert_eq!(parse_selection("1", 3), Some(0));
        assert_eq!(parse_selection("3", 3), Some(2));
        assert_eq!(parse_selection("0", 3), None);
        assert_eq!(parse_selection("4", 3), None);
        assert_eq!(parse_selection("x", 3), None);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-11-03"),
            NaiveDate::from_ymd_opt(2025, 11, 3)
        );
        assert_eq!(parse_date("11/03/2025"), None);
    }
}

//! Money and business-time utilities
//!
//! All amounts travel as integer cents. Conversion to and from display
//! dollars happens here and nowhere else.

use chrono::NaiveDateTime;
use chrono_tz::Tz;

/// Timezone the café operates in. Order timestamps and "today" are always
/// evaluated against this wall clock, not the host clock.
pub const BUSINESS_TZ: Tz = chrono_tz::America::New_York;

/// Order creation timestamps on the wire: local time, `T` separator, no offset.
pub const CREATED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Convert display dollars to cents (rounded).
///
/// # Examples
///
/// ```
/// use shared::util::dollars_to_cents;
///
/// assert_eq!(dollars_to_cents(12.50), 1250);
/// assert_eq!(dollars_to_cents(0.01), 1);
/// ```
pub fn dollars_to_cents(dollars: f64) -> i64 {
    (dollars * 100.0).round() as i64
}

/// Convert cents to display dollars.
pub fn cents_to_dollars(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Format cents as a currency string.
///
/// # Examples
///
/// ```
/// use shared::util::format_cents;
///
/// assert_eq!(format_cents(450), "$4.50");
/// assert_eq!(format_cents(1098), "$10.98");
/// ```
pub fn format_cents(cents: i64) -> String {
    format!("${:.2}", cents as f64 / 100.0)
}

/// Current wall-clock time in the café's timezone.
pub fn business_now() -> NaiveDateTime {
    chrono::Utc::now().with_timezone(&BUSINESS_TZ).naive_local()
}

/// Current calendar day in the café's timezone.
pub fn business_today() -> chrono::NaiveDate {
    business_now().date()
}

/// Render a timestamp in the wire format used by `Order::created`.
pub fn format_created(at: NaiveDateTime) -> String {
    at.format(CREATED_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_dollars_to_cents() {
        assert_eq!(dollars_to_cents(12.50), 1250);
        assert_eq!(dollars_to_cents(0.01), 1);
        assert_eq!(dollars_to_cents(100.00), 10000);
        assert_eq!(dollars_to_cents(0.00), 0);
    }

    #[test]
    fn test_round_trip() {
        for price in [0.01, 0.99, 1.00, 12.50, 99.99, 100.00, 999.99] {
            let cents = dollars_to_cents(price);
            let back = cents_to_dollars(cents);
            assert!((back - price).abs() < 0.001, "Failed for {}", price);
        }
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(1250), "$12.50");
        assert_eq!(format_cents(1), "$0.01");
        assert_eq!(format_cents(0), "$0.00");
    }

    #[test]
    fn test_format_created() {
        let at = NaiveDate::from_ymd_opt(2025, 11, 3)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap();
        assert_eq!(format_created(at), "2025-11-03T14:05:09");
    }
}

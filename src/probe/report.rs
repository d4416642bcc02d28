//! Operator-facing report helpers.
//!
//! Pure formatting and selection logic shared by the scenario runners.

use serde_json::Value;

/// Format an integer cent amount as a two-decimal string.
///
/// Exact integer arithmetic; amounts never pass through floats.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Last `limit` elements of a slice, original order preserved.
pub fn display_tail<T>(items: &[T], limit: usize) -> &[T] {
    let start = items.len().saturating_sub(limit);
    &items[start..]
}

/// Integer-cent amount stored under `key`, accepting string or integer
/// encodings. The server stores monetary fields as string-encoded cents;
/// a plain JSON number is tolerated too.
pub fn cents_field(value: &Value, key: &str) -> Option<i64> {
    match value.get(key)? {
        Value::String(s) => s.trim().parse().ok(),
        Value::Number(n) => n.as_i64(),
        _ => None,
    }
}

/// Pretty-print a JSON value for the operator.
pub fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(119_999), "1199.99");
        assert_eq!(format_cents(189_999), "1899.99");
        assert_eq!(format_cents(100), "1.00");
        assert_eq!(format_cents(5), "0.05");
        assert_eq!(format_cents(0), "0.00");
        assert_eq!(format_cents(-2_50), "-2.50");
    }

    #[test]
    fn test_display_tail_truncates_to_last_elements() {
        let items = [1, 2, 3, 4, 5, 6, 7];
        assert_eq!(display_tail(&items, 5), &[3, 4, 5, 6, 7]);
        assert_eq!(display_tail(&items, 10), &items);
        assert!(display_tail(&items, 0).is_empty());
    }

    #[test]
    fn test_cents_field_accepts_string_and_number() {
        let value = json!({"price": "119999", "cost": 85000, "name": "x"});
        assert_eq!(cents_field(&value, "price"), Some(119_999));
        assert_eq!(cents_field(&value, "cost"), Some(85_000));
        assert_eq!(cents_field(&value, "name"), None);
        assert_eq!(cents_field(&value, "absent"), None);
    }
}

//! Formatting of numbers and lengths into inline CSS values.
//!
//! Values are rendered the way a browser script would stringify them, so
//! `-0` prints as `0` and non-finite numbers print as `NaN` / `Infinity`
//! (which the style engine then rejects, leaving the property unchanged).

use std::time::Duration;

/// Stringify a number the way JavaScript's `String(n)` does for the values
/// this crate produces.
#[must_use]
pub fn js_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_owned()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_owned()
    } else if value == 0.0 {
        "0".to_owned()
    } else {
        format!("{value}")
    }
}

/// `translateY({offset}px)`, with a zero offset written as `translateY(0)`.
#[must_use]
pub fn translate_y(offset: f64) -> String {
    if offset == 0.0 {
        "translateY(0)".to_owned()
    } else {
        format!("translateY({}px)", js_number(offset))
    }
}

/// `translateY({offset}px)` for every offset, zero included.
#[must_use]
pub fn translate_y_px(offset: f64) -> String {
    format!("translateY({}px)", js_number(offset))
}

/// A duration in CSS seconds, e.g. `0.6s` or `0s`.
#[must_use]
pub fn seconds(duration: Duration) -> String {
    format!("{}s", js_number(duration.as_secs_f64()))
}

/// A percentage length, e.g. `42.5%`.
#[must_use]
pub fn percent(value: f64) -> String {
    format!("{}%", js_number(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(js_number(-0.0), "0");
        assert_eq!(translate_y(0.0 * -0.5), "translateY(0)");
        assert_eq!(translate_y_px(0.0 * -0.5), "translateY(0px)");
    }

    #[test]
    fn non_finite_values_match_script_stringification() {
        assert_eq!(percent(f64::NAN), "NaN%");
        assert_eq!(percent(f64::INFINITY), "Infinity%");
        assert_eq!(js_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn lengths_and_times() {
        assert_eq!(translate_y(20.0), "translateY(20px)");
        assert_eq!(translate_y(-150.5), "translateY(-150.5px)");
        assert_eq!(seconds(Duration::from_millis(600)), "0.6s");
        assert_eq!(seconds(Duration::from_millis(400)), "0.4s");
        assert_eq!(seconds(Duration::ZERO), "0s");
        assert_eq!(percent(100.0), "100%");
    }
}

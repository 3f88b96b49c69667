//! Parsers for the `srcset` and `sizes` attributes of a responsive image.
//!
//! Both parsers are total: a malformed token degrades to a record with missing
//! fields rather than an error.

mod sizes;
mod srcset;

pub use sizes::{parse_sizes, SizesEntry};
pub use srcset::{parse_srcset, SrcsetEntry};

lazy_static::lazy_static! {
    // Longest leading decimal number, ignoring whatever unit text follows it
    static ref LEADING_NUMBER: regex::Regex =
        regex::Regex::new(r"^\s*[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?").unwrap();
}

/// Read the number at the start of `value`, so `"768px)"` is `768.0` and `"1.5"` is `1.5`.
/// Returns `None` when `value` does not start with a number.
pub fn parse_number(value: &str) -> Option<f64> {
    LEADING_NUMBER
        .find(value)
        .and_then(|m| m.as_str().trim_start().parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_ignores_units() {
        assert_eq!(parse_number("768px)"), Some(768.0));
        assert_eq!(parse_number("100vw"), Some(100.0));
        assert_eq!(parse_number("1.5"), Some(1.5));
        assert_eq!(parse_number("  .5x"), Some(0.5));
        assert_eq!(parse_number("2e3w"), Some(2000.0));
    }

    #[test]
    fn test_parse_number_without_leading_digits() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("px"), None);
        assert_eq!(parse_number("calc(100vw - 2rem)"), None);
    }
}

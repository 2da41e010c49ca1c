//! Width bucket values - the string form of an interval selection.
//!
//! A bucket is written `"{min}-{max}"` with shortest float formatting, so
//! `[0.7, 2)` becomes `"0.7-2"`.

use crate::domain::catalog::WidthRange;

/// Formats an interval as a selection value.
pub fn format_bucket(range: &WidthRange) -> String {
    format!("{}-{}", range.min, range.max)
}

/// The degenerate bucket `"w-w"`, used for a single measured width.
///
/// Filtering treats it as the point `w`, matched by containment.
pub fn point_bucket(width: f64) -> String {
    format!("{}-{}", width, width)
}

/// Parses a selection value back into an interval.
///
/// Only the first two `-`-separated parts are read. Returns `None` when
/// either bound is missing or not a number; callers treat that as no
/// constraint.
pub fn parse_bucket(value: &str) -> Option<WidthRange> {
    let mut parts = value.split('-');
    let min = parse_bound(parts.next()?)?;
    let max = parse_bound(parts.next()?)?;
    Some(WidthRange::new(min, max))
}

fn parse_bound(part: &str) -> Option<f64> {
    part.trim().parse::<f64>().ok().filter(|n| !n.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_shortest_representation() {
        assert_eq!(format_bucket(&WidthRange::new(0.7, 2.0)), "0.7-2");
        assert_eq!(format_bucket(&WidthRange::new(1.25, 3.0)), "1.25-3");
    }

    #[test]
    fn parses_well_formed_bucket() {
        assert_eq!(parse_bucket("0.7-2"), Some(WidthRange::new(0.7, 2.0)));
        assert_eq!(parse_bucket(" 1 - 3 "), Some(WidthRange::new(1.0, 3.0)));
    }

    #[test]
    fn parse_reads_first_two_parts_only() {
        assert_eq!(parse_bucket("1-2-3"), Some(WidthRange::new(1.0, 2.0)));
    }

    #[test]
    fn malformed_values_do_not_parse() {
        assert_eq!(parse_bucket("wide"), None);
        assert_eq!(parse_bucket("1.5"), None);
        assert_eq!(parse_bucket("a-2"), None);
        assert_eq!(parse_bucket("NaN-2"), None);
        assert_eq!(parse_bucket(""), None);
    }

    #[test]
    fn point_bucket_round_trips() {
        assert_eq!(point_bucket(1.5), "1.5-1.5");
        assert_eq!(parse_bucket(&point_bucket(1.5)), Some(WidthRange::new(1.5, 1.5)));
    }
}

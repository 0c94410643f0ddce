//! Derived display values.
//!
//! Pure helpers for the computed parts of the card: discount percentage,
//! the old-price guard, and the two name truncation variants.
//!
//! Note the two price guards on purpose use different operators: the
//! discount badge fires on `list != price`, the strikethrough old price on
//! `list > price`. They are evaluated independently and must not be unified;
//! with an inverted offer (price above list) the badge shows a negative
//! percentage while the old price stays hidden.

/// Length above which the compact name variant is truncated.
const COMPACT_LIMIT: usize = 35;
/// Characters kept by the compact variant.
const COMPACT_KEEP: usize = 30;
/// Length above which the wide name variant is truncated.
const WIDE_LIMIT: usize = 60;

const ELLIPSIS: &str = "...";

/// Rounded discount percentage, or `None` when it does not apply.
///
/// Computed only when both prices are present, non-zero, and differ; a zero
/// price follows the absent path. Values below zero or above 100 pass
/// through as computed.
pub fn discount_percent(list_price: Option<f64>, price: Option<f64>) -> Option<i64> {
    match (list_price, price) {
        (Some(list), Some(price)) if list != 0.0 && price != 0.0 && list != price => {
            Some(((list - price) / list * 100.0).round() as i64)
        }
        _ => None,
    }
}

/// Whether the strikethrough old price is rendered.
///
/// Requires both prices non-zero and a list price strictly greater than the
/// current price.
pub fn show_old_price(list_price: Option<f64>, price: Option<f64>) -> bool {
    matches!(
        (list_price, price),
        (Some(list), Some(price)) if list != 0.0 && price != 0.0 && list > price
    )
}

/// Compact name variant for narrow viewports.
pub fn compact_name(name: &str) -> String {
    truncate(name, COMPACT_LIMIT, COMPACT_KEEP)
}

/// Wide name variant for wide viewports.
pub fn wide_name(name: &str) -> String {
    truncate(name, WIDE_LIMIT, WIDE_LIMIT)
}

fn truncate(name: &str, limit: usize, keep: usize) -> String {
    if name.chars().count() > limit {
        let mut out: String = name.chars().take(keep).collect();
        out.push_str(ELLIPSIS);
        out
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_requires_both_prices() {
        assert_eq!(discount_percent(None, Some(80.0)), None);
        assert_eq!(discount_percent(Some(100.0), None), None);
        assert_eq!(discount_percent(None, None), None);
    }

    #[test]
    fn test_discount_skipped_when_prices_equal() {
        assert_eq!(discount_percent(Some(100.0), Some(100.0)), None);
    }

    #[test]
    fn test_discount_rounds() {
        assert_eq!(discount_percent(Some(100.0), Some(80.0)), Some(20));
        assert_eq!(discount_percent(Some(90.0), Some(60.0)), Some(33));
        assert_eq!(discount_percent(Some(150.0), Some(99.9)), Some(33));
    }

    #[test]
    fn test_inverted_offer_passes_through_negative() {
        // price above list: badge math still applies, no clamping
        assert_eq!(discount_percent(Some(80.0), Some(100.0)), Some(-25));
        assert!(!show_old_price(Some(80.0), Some(100.0)));
    }

    #[test]
    fn test_zero_prices_follow_the_absent_path() {
        assert_eq!(discount_percent(Some(0.0), Some(50.0)), None);
        assert_eq!(discount_percent(Some(100.0), Some(0.0)), None);
        assert!(!show_old_price(Some(100.0), Some(0.0)));
        assert!(!show_old_price(Some(0.0), Some(-1.0)));
    }

    #[test]
    fn test_old_price_needs_strictly_greater_list() {
        assert!(show_old_price(Some(100.0), Some(80.0)));
        assert!(!show_old_price(Some(100.0), Some(100.0)));
        assert!(!show_old_price(None, Some(80.0)));
        assert!(!show_old_price(Some(100.0), None));
    }

    #[test]
    fn test_short_names_pass_through_unchanged() {
        let name = "Plain white tee";
        assert_eq!(compact_name(name), name);
        assert_eq!(wide_name(name), name);

        let exactly_35 = "a".repeat(35);
        assert_eq!(compact_name(&exactly_35), exactly_35);
        let exactly_60 = "b".repeat(60);
        assert_eq!(wide_name(&exactly_60), exactly_60);
    }

    #[test]
    fn test_compact_truncates_to_thirty_plus_ellipsis() {
        let name = "x".repeat(36);
        let expected = format!("{}...", "x".repeat(30));
        assert_eq!(compact_name(&name), expected);
    }

    #[test]
    fn test_wide_truncates_to_sixty_plus_ellipsis() {
        let name = "y".repeat(61);
        let expected = format!("{}...", "y".repeat(60));
        assert_eq!(wide_name(&name), expected);
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        let name = "é".repeat(40);
        let expected = format!("{}...", "é".repeat(30));
        assert_eq!(compact_name(&name), expected);
    }
}

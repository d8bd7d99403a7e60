//! Property tests for the catalog localization handler
//!
//! Covers the formatter contract end to end with a real catalog:
//! literal grouped digits up to the ceiling, saturated above it, bullet for
//! flags.

use badging_core::{badge_string, LocalizationEffects, BADGE_FLAG_GLYPH};
use badging_effects::{CatalogLocalization, DigitGrouping};
use proptest::prelude::*;

proptest! {
    #[test]
    fn grouping_preserves_digits(value in any::<u64>()) {
        let grouped = DigitGrouping::western(",").apply(value);
        prop_assert_eq!(grouped.replace(',', ""), value.to_string());
    }

    #[test]
    fn western_groups_are_three_wide(value in 1_000u64..u64::MAX) {
        let grouped = DigitGrouping::western(",").apply(value);
        let mut groups = grouped.split(',');
        let first = groups.next().unwrap_or_default();
        prop_assert!((1..=3).contains(&first.len()));
        for group in groups {
            prop_assert_eq!(group.len(), 3);
        }
    }

    #[test]
    fn indian_groups_are_two_wide_after_first(value in 100_000u64..u64::MAX) {
        let grouped = DigitGrouping::indian(",").apply(value);
        let groups: Vec<&str> = grouped.split(',').collect();
        prop_assert_eq!(groups.last().map(|g| g.len()), Some(3));
        for group in &groups[1..groups.len() - 1] {
            prop_assert_eq!(group.len(), 2);
        }
    }

    #[test]
    fn counts_up_to_ceiling_render_grouped(n in 1u64..=1_000_000) {
        let localization = CatalogLocalization::english();
        prop_assert_eq!(
            badge_string(&localization, Some(n), 1_000_000),
            localization.format_number(n)
        );
    }

    #[test]
    fn counts_above_ceiling_saturate(max in 1u64..100_000, excess in 1u64..1_000_000) {
        let localization = CatalogLocalization::english();
        let expected = format!("{}+", localization.format_number(max));
        prop_assert_eq!(badge_string(&localization, Some(max + excess), max), expected);
    }
}

#[test]
fn flag_renders_bullet_in_every_locale() {
    for locale in ["en-US", "de-DE", "fr-FR", "hi-IN", "xx"] {
        let localization = CatalogLocalization::builtin(locale);
        assert_eq!(badge_string(&localization, None, 99), BADGE_FLAG_GLYPH);
    }
}

#[test]
fn scenario_saturated_with_custom_ceiling() {
    let localization = CatalogLocalization::english();
    assert_eq!(badge_string(&localization, Some(9999), 999), "999+");
    assert_eq!(badge_string(&localization, Some(5), 999), "5");
}

#[test]
fn saturated_ceiling_uses_locale_grouping() {
    let localization = CatalogLocalization::builtin("de-DE");
    assert_eq!(badge_string(&localization, Some(20_000), 9_999), "9.999+");
}

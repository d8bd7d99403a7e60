//! Badge label formatting
//!
//! Turns badge content into the string a dock or taskbar would show:
//! a bullet for a flag, grouped digits for a count, and a saturated
//! "at least N" string above the ceiling.

use crate::effects::LocalizationEffects;

/// Glyph shown for a badge with no count.
pub const BADGE_FLAG_GLYPH: &str = "\u{2022}";

/// Largest count shown literally; anything above renders as saturated.
pub const MAX_BADGE_CONTENT: u64 = 99;

/// Format badge content for display.
///
/// `None` is the flag glyph. Counts above `max_badge_content` render the
/// saturated template around the formatted ceiling.
pub fn badge_string<L>(localization: &L, content: Option<u64>, max_badge_content: u64) -> String
where
    L: LocalizationEffects + ?Sized,
{
    match content {
        None => BADGE_FLAG_GLYPH.to_string(),
        Some(n) if n > max_badge_content => {
            let ceiling = localization.format_number(max_badge_content);
            localization.saturated_badge_content(&ceiling)
        }
        Some(n) => localization.format_number(n),
    }
}

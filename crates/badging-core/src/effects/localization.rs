//! Localization effect interface

/// Locale-aware number rendering for badge labels.
pub trait LocalizationEffects: Send + Sync {
    /// Render `value` as a grouped decimal string for the active locale.
    fn format_number(&self, value: u64) -> String;

    /// Render the "at least N" sentence around an already formatted ceiling.
    fn saturated_badge_content(&self, formatted_ceiling: &str) -> String;
}

//! Subcommands

pub mod format;
pub mod simulate;

use anyhow::Result;
use badging_core::BadgeConfig;

/// Apply command-line overrides on top of the loaded configuration.
pub fn apply_overrides(
    config: &mut BadgeConfig,
    max_badge_content: Option<u64>,
    locale: Option<&str>,
) -> Result<()> {
    if let Some(max) = max_badge_content {
        config.max_badge_content = max;
    }
    if let Some(locale) = locale {
        config.set_from_string("locale", locale)?;
    }
    config.validate()?;
    Ok(())
}

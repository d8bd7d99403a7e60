//! `badging format`

use anyhow::{bail, Result};
use badging_core::{badge_string, BadgeConfig, BadgeValue};
use badging_effects::CatalogLocalization;
use clap::Args;

#[derive(Args)]
pub struct FormatCommand {
    /// A positive count, or `flag`
    pub value: String,

    /// Largest count shown before saturating
    #[arg(long)]
    pub max: Option<u64>,

    /// Locale used for digit grouping and the saturated template
    #[arg(long)]
    pub locale: Option<String>,
}

/// Parse `flag` or a count the way a page would pass it.
pub fn parse_value(input: &str) -> Result<BadgeValue> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("flag") {
        return Ok(BadgeValue::Flag);
    }
    match input.parse::<u64>() {
        Ok(0) => bail!("0 clears the badge and has no label"),
        Ok(count) => Ok(BadgeValue::Number(count)),
        Err(e) => bail!("badge value '{input}' is neither 'flag' nor a count: {e}"),
    }
}

/// Label for `value` under `config`
pub fn format_label(value: BadgeValue, config: &BadgeConfig) -> String {
    let localization = CatalogLocalization::for_config(config);
    badge_string(&localization, value.count(), config.max_badge_content)
}

pub fn handle_format_command(cmd: FormatCommand, mut config: BadgeConfig) -> Result<()> {
    super::apply_overrides(&mut config, cmd.max, cmd.locale.as_deref())?;
    let value = parse_value(&cmd.value)?;
    tracing::debug!(%value, locale = %config.locale, max = config.max_badge_content, "formatting badge");
    println!("{}", format_label(value, &config));
    Ok(())
}

//! Catalog-backed localization handler
//!
//! # Invariants
//!
//! 1. **Fallback chain terminates**: lookups try the exact tag, then its
//!    language subtag, then the fallback chain, each at most once.
//!
//! 2. **Interpolation is single pass**: `{name}` tokens are replaced once;
//!    substituted values are never rescanned.
//!
//! 3. **Total**: when no locale resolves, numbers render as plain digits and
//!    the saturated string as `"{count}+"`.

use badging_core::config::DEFAULT_LOCALE;
use badging_core::{BadgeConfig, LocalizationEffects};
use std::collections::HashMap;

/// Catalog key for the saturated badge template. Takes `{count}`.
pub const SATURATED_BADGE_CONTENT: &str = "saturated_badge_content";

const DEFAULT_SATURATED_TEMPLATE: &str = "{count}+";

/// Digit grouping rule for one locale.
///
/// `primary` is the size of the rightmost group, `secondary` the size of every
/// group to its left (3/3 for most locales, 3/2 for Indian numbering).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrouping {
    separator: String,
    primary: usize,
    secondary: usize,
}

impl DigitGrouping {
    /// Groups of three.
    pub fn western(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            primary: 3,
            secondary: 3,
        }
    }

    /// Three, then groups of two (lakh/crore).
    pub fn indian(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            primary: 3,
            secondary: 2,
        }
    }

    /// No separators at all.
    pub fn ungrouped() -> Self {
        Self {
            separator: String::new(),
            primary: 0,
            secondary: 0,
        }
    }

    /// Separator inserted between groups
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Render `value` with this grouping.
    pub fn apply(&self, value: u64) -> String {
        let digits = value.to_string();
        if self.primary == 0 || self.secondary == 0 || digits.len() <= self.primary {
            return digits;
        }

        let (head, tail) = digits.split_at(digits.len() - self.primary);
        let mut groups = Vec::with_capacity(head.len() / self.secondary + 2);
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(self.secondary);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();
        groups.push(tail);
        groups.join(&self.separator)
    }
}

/// Formatting data for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFormat {
    grouping: DigitGrouping,
    strings: HashMap<String, String>,
}

impl LocaleFormat {
    /// Create with a grouping rule and no strings
    pub fn new(grouping: DigitGrouping) -> Self {
        Self {
            grouping,
            strings: HashMap::new(),
        }
    }

    /// Add a string template
    pub fn with_string(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.strings.insert(key.into(), template.into());
        self
    }

    /// Grouping rule
    pub fn grouping(&self) -> &DigitGrouping {
        &self.grouping
    }

    /// Look up a string template
    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }
}

/// Localization handler backed by an in-memory locale catalog.
#[derive(Debug, Clone)]
pub struct CatalogLocalization {
    locale: String,
    locales: HashMap<String, LocaleFormat>,
    fallback_chain: Vec<String>,
}

impl CatalogLocalization {
    /// Create an empty catalog for `locale`.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            locales: HashMap::new(),
            fallback_chain: Vec::new(),
        }
    }

    /// Catalog preloaded with the built-in locales, falling back to English.
    pub fn builtin(locale: impl Into<String>) -> Self {
        let mut catalog = Self::new(locale);
        for (tag, grouping) in [
            ("en", DigitGrouping::western(",")),
            ("en-IN", DigitGrouping::indian(",")),
            ("hi", DigitGrouping::indian(",")),
            ("de", DigitGrouping::western(".")),
            ("fr", DigitGrouping::western("\u{202F}")),
            ("ru", DigitGrouping::western("\u{00A0}")),
            ("ja", DigitGrouping::western(",")),
        ] {
            catalog.add_locale(
                tag,
                LocaleFormat::new(grouping)
                    .with_string(SATURATED_BADGE_CONTENT, DEFAULT_SATURATED_TEMPLATE),
            );
        }
        catalog.set_fallback_chain(vec!["en".to_string()]);
        catalog
    }

    /// English-only catalog, the usual choice for tests.
    pub fn english() -> Self {
        Self::builtin(DEFAULT_LOCALE)
    }

    /// Built-in catalog for the configured locale
    pub fn for_config(config: &BadgeConfig) -> Self {
        Self::builtin(config.locale.clone())
    }

    /// Add or replace formatting data for a locale tag
    pub fn add_locale(&mut self, tag: impl Into<String>, format: LocaleFormat) {
        self.locales.insert(tag.into(), format);
    }

    /// Set the fallback chain (tried in order after the active locale).
    pub fn set_fallback_chain(&mut self, chain: Vec<String>) {
        self.fallback_chain = chain;
    }

    /// Active locale tag
    pub fn locale(&self) -> &str {
        &self.locale
    }

    fn candidates(&self) -> Vec<&str> {
        let mut chain = vec![self.locale.as_str()];
        if let Some((language, _)) = self.locale.split_once(['-', '_']) {
            chain.push(language);
        }
        for fallback in &self.fallback_chain {
            if !chain.contains(&fallback.as_str()) {
                chain.push(fallback.as_str());
            }
        }
        chain
    }

    fn resolve(&self) -> Option<&LocaleFormat> {
        self.candidates()
            .into_iter()
            .find_map(|tag| self.locales.get(tag))
    }

    /// Look up a string template through the fallback chain.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.candidates()
            .into_iter()
            .filter_map(|tag| self.locales.get(tag))
            .find_map(|format| format.get(key))
    }

    /// Look up a template and replace `{name}` tokens from `args`.
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> Option<String> {
        self.get(key).map(|template| interpolate(template, args))
    }
}

impl LocalizationEffects for CatalogLocalization {
    fn format_number(&self, value: u64) -> String {
        match self.resolve() {
            Some(format) => format.grouping().apply(value),
            None => value.to_string(),
        }
    }

    fn saturated_badge_content(&self, formatted_ceiling: &str) -> String {
        let args = [("count", formatted_ceiling)];
        self.format(SATURATED_BADGE_CONTENT, &args)
            .unwrap_or_else(|| interpolate(DEFAULT_SATURATED_TEMPLATE, &args))
    }
}

fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            result.push(ch);
            continue;
        }

        let mut token = String::new();
        let mut closed = false;
        for c in chars.by_ref() {
            if c == '}' {
                closed = true;
                break;
            }
            token.push(c);
        }

        match args.iter().find(|(name, _)| *name == token) {
            Some((_, value)) if closed => result.push_str(value),
            _ => {
                result.push('{');
                result.push_str(&token);
                if closed {
                    result.push('}');
                }
            }
        }
    }

    result
}

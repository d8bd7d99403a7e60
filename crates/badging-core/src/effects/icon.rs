//! Icon badging effect interface
//!
//! The platform primitive that actually updates the visible icon. Dock,
//! taskbar and launcher integrations implement this outside the service.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the forwarded count should be interpreted by the platform primitive.
///
/// Some platforms accept an explicit flag alongside the count; others only
/// take the count. Both conventions carry the same intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForwardingConvention {
    /// Pass the count together with an explicit flag.
    Flag,
    /// Pass only the count.
    CountOnly,
}

impl ForwardingConvention {
    /// Convention used by the current build target.
    pub const fn platform_default() -> Self {
        if cfg!(windows) {
            ForwardingConvention::Flag
        } else {
            ForwardingConvention::CountOnly
        }
    }

    /// Whether the explicit flag is passed.
    pub const fn uses_flag(&self) -> bool {
        matches!(self, ForwardingConvention::Flag)
    }
}

impl Default for ForwardingConvention {
    fn default() -> Self {
        Self::platform_default()
    }
}

impl fmt::Display for ForwardingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForwardingConvention::Flag => write!(f, "flag"),
            ForwardingConvention::CountOnly => write!(f, "count_only"),
        }
    }
}

impl std::str::FromStr for ForwardingConvention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flag" => Ok(ForwardingConvention::Flag),
            "count_only" | "count-only" | "count" => Ok(ForwardingConvention::CountOnly),
            other => Err(format!("unknown forwarding convention '{other}'")),
        }
    }
}

/// Platform icon badging
pub trait IconBadgeEffects: Send + Sync {
    /// Show `count` on the application icon.
    ///
    /// `None` shows the generic marker, `Some(0)` removes the badge, any
    /// other value shows that count. No failure is reported back.
    fn set_badge_count(&self, count: Option<u64>, convention: ForwardingConvention);
}

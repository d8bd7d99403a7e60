//! Badge values and the shared badge state
//!
//! # Invariants
//!
//! - `BadgeState::Shown` never carries a zero count (`NonZeroU64`)
//! - A zero count is only reachable through a clear, never through a set
//!
//! `BadgeValue` is the untrusted wire shape and can still hold `Number(0)`;
//! rejecting it is the endpoint's job.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;

/// Badge content requested by a peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeValue {
    /// Show a generic marker with no count.
    Flag,
    /// Show a count. Zero is a protocol violation.
    Number(u64),
}

impl BadgeValue {
    /// True for the `Number(0)` shape that well-formed peers never send.
    pub fn is_zero_number(&self) -> bool {
        matches!(self, BadgeValue::Number(0))
    }

    /// Convert to the optional-count domain (`Flag` is absent).
    pub fn count(&self) -> Option<u64> {
        match self {
            BadgeValue::Flag => None,
            BadgeValue::Number(n) => Some(*n),
        }
    }
}

impl fmt::Display for BadgeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BadgeValue::Flag => write!(f, "flag"),
            BadgeValue::Number(n) => write!(f, "number({n})"),
        }
    }
}

/// Content of a visible badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeContent {
    /// Generic marker
    Flag,
    /// Non-zero count
    Count(NonZeroU64),
}

/// Current badge of a browsing context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeState {
    /// Nothing is shown.
    #[default]
    NoBadge,
    /// A badge is shown.
    Shown(BadgeContent),
}

impl BadgeState {
    /// Build the state produced by applying an optional count.
    ///
    /// Absent means flag, zero means clear.
    pub fn from_count(count: Option<u64>) -> Self {
        match count {
            None => BadgeState::Shown(BadgeContent::Flag),
            Some(n) => match NonZeroU64::new(n) {
                Some(n) => BadgeState::Shown(BadgeContent::Count(n)),
                None => BadgeState::NoBadge,
            },
        }
    }

    /// The count handed to the icon capability for this state.
    ///
    /// `NoBadge` forwards `Some(0)`, a flag forwards `None`.
    pub fn forwarded_count(&self) -> Option<u64> {
        match self {
            BadgeState::NoBadge => Some(0),
            BadgeState::Shown(BadgeContent::Flag) => None,
            BadgeState::Shown(BadgeContent::Count(n)) => Some(n.get()),
        }
    }

    /// Content to hand to the formatter, or `None` when nothing is shown.
    pub fn label_content(&self) -> Option<Option<u64>> {
        match self {
            BadgeState::NoBadge => None,
            BadgeState::Shown(BadgeContent::Flag) => Some(None),
            BadgeState::Shown(BadgeContent::Count(n)) => Some(Some(n.get())),
        }
    }

    /// Whether a badge is visible
    pub fn is_shown(&self) -> bool {
        matches!(self, BadgeState::Shown(_))
    }
}

impl fmt::Display for BadgeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BadgeState::NoBadge => write!(f, "none"),
            BadgeState::Shown(BadgeContent::Flag) => write!(f, "flag"),
            BadgeState::Shown(BadgeContent::Count(n)) => write!(f, "count({n})"),
        }
    }
}

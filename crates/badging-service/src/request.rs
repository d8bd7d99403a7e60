//! Requests a peer can send and what dispatching them produced

use badging_core::{BadgeState, BadgeValue, ProtocolViolation};
use std::fmt;

/// A request arriving on a badge endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeRequest {
    /// Show `value` on the icon.
    SetBadge(BadgeValue),
    /// Remove the badge.
    ClearBadge,
}

impl fmt::Display for BadgeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BadgeRequest::SetBadge(value) => write!(f, "set_badge({value})"),
            BadgeRequest::ClearBadge => write!(f, "clear_badge"),
        }
    }
}

/// Result of dispatching one request on the host side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The request was applied and forwarded; carries the new state.
    Applied(BadgeState),
    /// The request was rejected and reported; state is untouched.
    Rejected(ProtocolViolation),
}

impl DispatchOutcome {
    /// Whether the request changed shared state
    pub fn is_applied(&self) -> bool {
        matches!(self, DispatchOutcome::Applied(_))
    }
}

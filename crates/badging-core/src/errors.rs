//! Error types for the badge service
//!
//! `BadgeError` covers host-side failures (configuration, unknown endpoints,
//! closed channels). Peer misbehavior is a `ProtocolViolation`, which is
//! reported through the bad-message sink rather than returned to the peer.

use crate::types::EndpointId;

/// Unified error type for badge service operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BadgeError {
    /// Invalid input or configuration
    #[error("Invalid: {message}")]
    Invalid {
        /// Error message describing the invalid input
        message: String,
    },

    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Error message describing the configuration failure
        message: String,
    },

    /// No endpoint with this id is registered
    #[error("Unknown endpoint: {0}")]
    UnknownEndpoint(EndpointId),

    /// The receiving side of a channel is gone
    #[error("Channel closed: {message}")]
    ChannelClosed {
        /// What was being sent
        message: String,
    },

    /// The UI thread task queue has been dropped
    #[error("UI task queue closed")]
    QueueClosed,
}

impl BadgeError {
    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a channel closed error
    pub fn channel_closed(message: impl Into<String>) -> Self {
        Self::ChannelClosed {
            message: message.into(),
        }
    }
}

/// Standard Result type for badge operations
pub type Result<T> = std::result::Result<T, BadgeError>;

/// A peer request that a well-formed peer never sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolViolation {
    /// `SetBadge(Number(0))`; clearing must go through `ClearBadge`.
    #[error("badge value must not be zero when it is a number (ClearBadge should be called instead)")]
    ZeroNumber,
}

impl ProtocolViolation {
    /// Human-readable reason handed to the bad-message sink
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BadgeError::invalid("max_badge_content must be at least 1");
        assert!(err.to_string().contains("max_badge_content"));

        let err = BadgeError::UnknownEndpoint(EndpointId::from_raw(4));
        assert_eq!(err.to_string(), "Unknown endpoint: endpoint-4");

        let err = BadgeError::channel_closed("set_badge(flag)");
        assert!(err.to_string().contains("set_badge"));
    }

    #[test]
    fn test_violation_reason_mentions_clear() {
        assert!(ProtocolViolation::ZeroNumber.reason().contains("ClearBadge"));
    }
}

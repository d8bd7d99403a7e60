//! Badging Core - Badge Service Foundation
//!
//! This crate provides the value types, capability interfaces and
//! configuration shared by every layer of the host badge service. It contains
//! no service state and no platform integration.
//!
//! # Contents
//!
//! ## Value Types
//! - `BadgeValue`: what a peer asks for (`Flag` or `Number(n)`)
//! - `BadgeState`: what the host currently shows (`NoBadge` or `Shown`)
//! - `FrameIdentity`, `BrowsingContextId`, `EndpointId`: opaque keys
//!
//! ## Effect Interfaces (capabilities consumed by the service)
//! - `IconBadgeEffects`: pushes a count to the platform icon
//! - `BadMessageEffects`: reports peers that violate the request shape
//! - `LocalizationEffects`: grouped digits and the saturated template
//!
//! ## Formatting
//! - `badge_string`: the pure label function (bullet, digits or saturated)
//!
//! ## Thread Affinity
//! - `UiThread`: records the owning thread and asserts on entry

#![forbid(unsafe_code)]

/// Service configuration (TOML + environment)
pub mod config;

/// Capability interfaces consumed by the badge service
pub mod effects;

/// Error types
pub mod errors;

/// Badge label formatting
pub mod format;

/// UI thread affinity checks
pub mod thread;

/// Value types and identifiers
pub mod types;

pub use config::{BadgeConfig, ConfigValidator};
pub use effects::{
    BadMessageEffects, BadgeHandlers, ForwardingConvention, IconBadgeEffects, LocalizationEffects,
};
pub use errors::{BadgeError, ProtocolViolation, Result};
pub use format::{badge_string, BADGE_FLAG_GLYPH, MAX_BADGE_CONTENT};
pub use thread::UiThread;
pub use types::{BadgeContent, BadgeState, BadgeValue, BrowsingContextId, EndpointId, FrameIdentity};

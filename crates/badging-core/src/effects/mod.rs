//! Capability interfaces consumed by the badge service
//!
//! # Effect Classification
//!
//! - **Category**: Infrastructure Effects
//! - **Implementation**: `badging-effects` (reference handlers), `badging-testkit` (mocks)
//! - **Usage**: `badging-service` calls these, never implements them
//!
//! Every method is synchronous and fire-and-forget from the caller's side.
//! Any asynchronous platform work happens inside the handler.

pub mod bad_message;
pub mod handlers;
pub mod icon;
pub mod localization;

pub use bad_message::BadMessageEffects;
pub use handlers::BadgeHandlers;
pub use icon::{ForwardingConvention, IconBadgeEffects};
pub use localization::LocalizationEffects;

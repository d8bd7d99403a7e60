//! Badging Effects - Reference Capability Handlers
//!
//! Standard implementations of the effect traits defined in `badging-core`.
//! Hosts with their own dock or taskbar integration implement
//! `IconBadgeEffects` themselves and can still reuse the localization and
//! bad-message handlers from here.
//!
//! - `CatalogLocalization`: per-locale digit grouping and string templates
//! - `TracingBadMessageHandler`: logs violations and counts them per frame
//! - `TracingIconBadger`, `LabelIconBadger`: icon handlers for hosts that
//!   only log, or that render a text label

#![forbid(unsafe_code)]

pub mod bad_message;
pub mod icon;
pub mod localization;

pub use bad_message::TracingBadMessageHandler;
pub use icon::{LabelIconBadger, TracingIconBadger};
pub use localization::{CatalogLocalization, DigitGrouping, LocaleFormat, SATURATED_BADGE_CONTENT};

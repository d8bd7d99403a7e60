//! Badge value types and identifiers

pub mod badge;
pub mod identifiers;

pub use badge::{BadgeContent, BadgeState, BadgeValue};
pub use identifiers::{BrowsingContextId, EndpointId, FrameIdentity};

//! Badging Testing Infrastructure
//!
//! Recording mocks for the capability traits, a ready-made host fixture and
//! proptest strategies shared by the service and CLI tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! badging-testkit = { path = "../badging-testkit" }
//! ```
//!
//! ```rust,no_run
//! use badging_testkit::*;
//!
//! let mut host = TestHost::new();
//! let (remote, _endpoint) = host.connect(test_frame(1), test_context(1));
//! remote.set_badge(badging_core::BadgeValue::Number(3)).unwrap();
//! host.pump();
//! assert_eq!(host.icon.last_count(), Some(Some(3)));
//! ```

pub mod fixtures;
pub mod mock_effects;
pub mod strategies;

pub use fixtures::*;
pub use mock_effects::*;

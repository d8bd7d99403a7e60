//! Badging Service - Host Badge Service Layer
//!
//! Lets content in isolated rendering units set or clear the badge on the host
//! application's icon. Each browsing context owns one `BadgeService`; every
//! frame that binds gets its own endpoint on that service.
//!
//! # Request Flow
//!
//! ```text
//! frame binds ──► resolver ──► BadgeService::bind_endpoint ──► EndpointRegistry
//! BadgeRemote::set_badge ──► channel ──► BadgeService::pump / dispatch
//!     ──► validate ──► apply_badge ──► IconBadgeEffects
//!                  └─► BadMessageEffects (Number(0)) ──► endpoint revoked
//! ```
//!
//! # Threading
//!
//! Everything here runs on the UI thread and asserts so on entry. Work that
//! starts elsewhere is posted through `UiTaskSender` and executed by
//! `UiTaskQueue::run_pending` on the UI thread.
//!
//! # Example
//!
//! ```ignore
//! let mut factory = BadgeServiceFactory::new(BadgeConfig::default(), handlers);
//! let (remote, endpoint) = connect_frame(&mut factory, frame, context);
//! remote.set_badge(BadgeValue::Number(5))?;
//! factory.pump_all();
//! ```

#![forbid(unsafe_code)]

pub mod binding;
pub mod channel;
pub mod endpoint;
pub mod factory;
pub mod registry;
pub mod request;
pub mod service;
pub mod ui_queue;

pub use binding::{bind_frame_receiver, connect_frame, FrameBindRequest};
pub use channel::{badge_channel, BadgeReceiver, BadgeRemote, ChannelPoll};
pub use endpoint::{validate_request, Endpoint};
pub use factory::{BadgeServiceFactory, BadgeServiceResolver};
pub use registry::EndpointRegistry;
pub use request::{BadgeRequest, DispatchOutcome};
pub use service::{BadgeService, PumpReport};
pub use ui_queue::{ui_task_queue, UiTask, UiTaskQueue, UiTaskSender};

//! Host fixture wiring a badge service factory to recording mocks

use crate::mock_effects::{MockBadMessageSink, MockIconBadger};
use badging_core::{
    BadgeConfig, BadgeHandlers, BrowsingContextId, EndpointId, ForwardingConvention,
    FrameIdentity,
};
use badging_effects::CatalogLocalization;
use badging_service::{
    connect_frame, BadgeRemote, BadgeService, BadgeServiceFactory, BadgeServiceResolver,
    PumpReport,
};
use std::sync::Arc;

/// Deterministic frame identity for `seed`
pub fn test_frame(seed: i32) -> FrameIdentity {
    FrameIdentity::new(100 + seed, seed)
}

/// Deterministic browsing context for `seed`
pub fn test_context(seed: u64) -> BrowsingContextId {
    BrowsingContextId::new(seed)
}

/// A factory plus the mocks it forwards to.
///
/// Must be created and driven on the test's own thread; it becomes the UI
/// thread for every service the factory creates.
#[derive(Debug)]
pub struct TestHost {
    /// Factory under test; the resolver for every bind
    pub factory: BadgeServiceFactory,
    /// Records every forwarded badge
    pub icon: Arc<MockIconBadger>,
    /// Records every protocol violation report
    pub bad_messages: Arc<MockBadMessageSink>,
}

impl TestHost {
    /// Host with the count-only convention and English formatting
    pub fn new() -> Self {
        Self::with_config(BadgeConfig {
            convention: ForwardingConvention::CountOnly,
            ..BadgeConfig::default()
        })
    }

    /// Host with `config`, localized for its locale
    pub fn with_config(config: BadgeConfig) -> Self {
        let icon = Arc::new(MockIconBadger::new());
        let bad_messages = Arc::new(MockBadMessageSink::new());
        let localization = Arc::new(CatalogLocalization::for_config(&config));
        let handlers = BadgeHandlers::new(icon.clone(), bad_messages.clone(), localization);
        Self {
            factory: BadgeServiceFactory::new(config, handlers),
            icon,
            bad_messages,
        }
    }

    /// Open and bind a channel for `frame` in `context`
    pub fn connect(
        &mut self,
        frame: FrameIdentity,
        context: BrowsingContextId,
    ) -> (BadgeRemote, Option<EndpointId>) {
        connect_frame(&mut self.factory, frame, context)
    }

    /// Deliver everything queued on every channel
    pub fn pump(&mut self) -> PumpReport {
        self.factory.pump_all()
    }

    /// Service for `context`, creating it if needed
    pub fn service(&mut self, context: BrowsingContextId) -> &mut BadgeService {
        self.factory
            .service_for_context(context)
            .expect("context is enabled")
    }
}

impl Default for TestHost {
    fn default() -> Self {
        Self::new()
    }
}

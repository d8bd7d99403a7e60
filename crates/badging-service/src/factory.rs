//! Browsing context to badge service resolution
//!
//! The service itself holds no global state. Hosts supply a resolver that
//! maps a browsing context to at most one service; `BadgeServiceFactory` is
//! the reference implementation that creates services lazily.

use crate::service::{BadgeService, PumpReport};
use badging_core::{BadgeConfig, BadgeHandlers, BrowsingContextId, UiThread};
use std::collections::{BTreeMap, HashSet};

/// Resolves the badge service for a browsing context.
pub trait BadgeServiceResolver {
    /// Thread that owns every service this resolver hands out
    fn ui_thread(&self) -> UiThread;

    /// Service for `context`, created on first use.
    ///
    /// `None` when the context has no badge capability.
    fn service_for_context(&mut self, context: BrowsingContextId) -> Option<&mut BadgeService>;
}

/// Creates one badge service per browsing context on demand.
///
/// Contexts can opt out (off-the-record profiles, for example); binds for
/// those are dropped. Destroying a context drops its service and closes every
/// endpoint channel it owned.
#[derive(Debug)]
pub struct BadgeServiceFactory {
    ui: UiThread,
    config: BadgeConfig,
    handlers: BadgeHandlers,
    services: BTreeMap<BrowsingContextId, BadgeService>,
    disabled: HashSet<BrowsingContextId>,
}

impl BadgeServiceFactory {
    /// Create a factory owned by the calling thread.
    pub fn new(config: BadgeConfig, handlers: BadgeHandlers) -> Self {
        Self {
            ui: UiThread::current(),
            config,
            handlers,
            services: BTreeMap::new(),
            disabled: HashSet::new(),
        }
    }

    /// Configuration handed to new services
    pub fn config(&self) -> &BadgeConfig {
        &self.config
    }

    /// Stop providing a service for `context`, dropping any existing one.
    pub fn disable_context(&mut self, context: BrowsingContextId) {
        self.ui.assert_current();
        self.disabled.insert(context);
        if self.services.remove(&context).is_some() {
            tracing::debug!(%context, "badge service dropped for disabled context");
        }
    }

    /// Allow a previously disabled context to get a service again
    pub fn enable_context(&mut self, context: BrowsingContextId) {
        self.ui.assert_current();
        self.disabled.remove(&context);
    }

    /// Whether binds for `context` can resolve a service
    pub fn is_enabled(&self, context: BrowsingContextId) -> bool {
        !self.disabled.contains(&context)
    }

    /// Tear down the service for a context that went away.
    pub fn destroy_context(&mut self, context: BrowsingContextId) -> bool {
        self.ui.assert_current();
        match self.services.remove(&context) {
            Some(service) => {
                tracing::debug!(
                    %context,
                    endpoints = service.endpoint_count(),
                    "badge service destroyed"
                );
                true
            }
            None => false,
        }
    }

    /// Existing service for `context`, without creating one
    pub fn service(&self, context: BrowsingContextId) -> Option<&BadgeService> {
        self.services.get(&context)
    }

    /// Number of live services
    pub fn service_count(&self) -> usize {
        self.services.len()
    }

    /// Pump every live service.
    pub fn pump_all(&mut self) -> PumpReport {
        self.ui.assert_current();
        let mut report = PumpReport::default();
        for service in self.services.values_mut() {
            report.merge(service.pump());
        }
        report
    }
}

impl BadgeServiceResolver for BadgeServiceFactory {
    fn ui_thread(&self) -> UiThread {
        self.ui
    }

    fn service_for_context(&mut self, context: BrowsingContextId) -> Option<&mut BadgeService> {
        self.ui.assert_current();
        if self.disabled.contains(&context) {
            return None;
        }

        let config = &self.config;
        let handlers = &self.handlers;
        Some(self.services.entry(context).or_insert_with(|| {
            tracing::debug!(%context, "badge service created");
            BadgeService::new(config.clone(), handlers.clone())
        }))
    }
}

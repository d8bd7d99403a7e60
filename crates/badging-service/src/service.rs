//! Badge Service - per browsing context badge state
//!
//! Owns the endpoint registry and the single badge value for one browsing
//! context. Endpoints only queue requests; the service validates them, applies
//! the result and forwards it to the icon capability in arrival order.
//!
//! # Invariants
//!
//! - State changes only through `apply_badge`
//! - A rejected request changes nothing and forwards nothing
//! - The endpoint that sent a rejected request is revoked immediately
//! - Every applied request is forwarded immediately; nothing is coalesced
//!
//! # Thread Safety
//!
//! None needed: every public method asserts it runs on the UI thread that
//! created the service. Calling from elsewhere panics.

use crate::channel::{BadgeReceiver, ChannelPoll};
use crate::endpoint::validate_request;
use crate::registry::EndpointRegistry;
use crate::request::{BadgeRequest, DispatchOutcome};
use badging_core::{
    badge_string, BadgeConfig, BadgeError, BadgeHandlers, BadgeState, BadgeValue, EndpointId,
    ForwardingConvention, FrameIdentity, Result, UiThread,
};

/// Summary of one `pump` pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PumpReport {
    /// Requests taken off channels
    pub delivered: usize,
    /// Requests rejected as protocol violations
    pub rejected: usize,
    /// Endpoints removed because their peer hung up
    pub disconnected: Vec<EndpointId>,
    /// Endpoints torn down after a protocol violation
    pub revoked: Vec<EndpointId>,
}

impl PumpReport {
    /// Fold another report into this one
    pub fn merge(&mut self, other: PumpReport) {
        self.delivered += other.delivered;
        self.rejected += other.rejected;
        self.disconnected.extend(other.disconnected);
        self.revoked.extend(other.revoked);
    }
}

/// Badge service for one browsing context.
#[derive(Debug)]
pub struct BadgeService {
    ui: UiThread,
    config: BadgeConfig,
    handlers: BadgeHandlers,
    state: BadgeState,
    endpoints: EndpointRegistry,
}

impl BadgeService {
    /// Create a service owned by the calling thread.
    pub fn new(config: BadgeConfig, handlers: BadgeHandlers) -> Self {
        Self {
            ui: UiThread::current(),
            config,
            handlers,
            state: BadgeState::NoBadge,
            endpoints: EndpointRegistry::new(),
        }
    }

    /// Thread that owns this service
    pub fn ui_thread(&self) -> UiThread {
        self.ui
    }

    /// Active configuration
    pub fn config(&self) -> &BadgeConfig {
        &self.config
    }

    /// Current badge
    pub fn state(&self) -> BadgeState {
        self.state
    }

    /// Register an endpoint for `frame` on `receiver`.
    pub fn bind_endpoint(&mut self, frame: FrameIdentity, receiver: BadgeReceiver) -> EndpointId {
        self.ui.assert_current();
        let id = self.endpoints.add(frame, receiver);
        tracing::debug!(endpoint = %id, %frame, live = self.endpoints.len(), "badge endpoint bound");
        id
    }

    /// Remove an endpoint and close its channel.
    ///
    /// Returns false if it was already gone.
    pub fn disconnect(&mut self, endpoint: EndpointId) -> bool {
        self.ui.assert_current();
        match self.endpoints.remove(endpoint) {
            Some(removed) => {
                tracing::debug!(%endpoint, frame = %removed.frame(), "badge endpoint disconnected");
                true
            }
            None => false,
        }
    }

    /// Number of live endpoints
    pub fn endpoint_count(&self) -> usize {
        self.endpoints.len()
    }

    /// Frame an endpoint was bound for
    pub fn endpoint_frame(&self, endpoint: EndpointId) -> Option<FrameIdentity> {
        self.endpoints.get(endpoint).map(|e| e.frame())
    }

    /// Live endpoints in registration order
    pub fn endpoints(&self) -> impl Iterator<Item = (EndpointId, FrameIdentity)> + '_ {
        self.endpoints.iter()
    }

    /// Deliver one request as if it arrived on `endpoint`.
    ///
    /// A protocol violation is reported to the bad-message sink, revokes the
    /// endpoint and comes back as `DispatchOutcome::Rejected`, not as an
    /// error. The only error is an endpoint that is not registered.
    pub fn dispatch(
        &mut self,
        endpoint: EndpointId,
        request: BadgeRequest,
    ) -> Result<DispatchOutcome> {
        self.ui.assert_current();
        let frame = self
            .endpoints
            .get(endpoint)
            .map(|e| e.frame())
            .ok_or(BadgeError::UnknownEndpoint(endpoint))?;
        Ok(self.handle_request(endpoint, frame, request))
    }

    /// `SetBadge` on `endpoint`
    pub fn set_badge(&mut self, endpoint: EndpointId, value: BadgeValue) -> Result<DispatchOutcome> {
        self.dispatch(endpoint, BadgeRequest::SetBadge(value))
    }

    /// `ClearBadge` on `endpoint`
    pub fn clear_badge(&mut self, endpoint: EndpointId) -> Result<DispatchOutcome> {
        self.dispatch(endpoint, BadgeRequest::ClearBadge)
    }

    /// Drain every endpoint's channel and apply what arrived.
    ///
    /// Endpoints are visited in registration order and each one's queue is
    /// applied in send order. Endpoints whose peer hung up are removed. An
    /// endpoint that sends a malformed request is revoked on the spot: the
    /// rest of its queue is discarded and its channel closed.
    pub fn pump(&mut self) -> PumpReport {
        self.ui.assert_current();
        let mut report = PumpReport::default();

        for id in self.endpoints.ids() {
            loop {
                let Some(endpoint) = self.endpoints.get_mut(id) else {
                    break;
                };
                let frame = endpoint.frame();
                match endpoint.next_request() {
                    ChannelPoll::Request(request) => {
                        report.delivered += 1;
                        if !self.handle_request(id, frame, request).is_applied() {
                            report.rejected += 1;
                            report.revoked.push(id);
                            break;
                        }
                    }
                    ChannelPoll::Empty => break,
                    ChannelPoll::Disconnected => {
                        if self.disconnect(id) {
                            report.disconnected.push(id);
                        }
                        break;
                    }
                }
            }
        }

        report
    }

    /// Set or clear the shared badge and forward it to the icon.
    ///
    /// `None` shows the flag, `Some(0)` clears, anything else shows the count.
    pub fn apply_badge(
        &mut self,
        count: Option<u64>,
        convention: ForwardingConvention,
    ) -> BadgeState {
        self.ui.assert_current();
        self.state = BadgeState::from_count(count);
        self.handlers.icon.set_badge_count(count, convention);
        tracing::debug!(state = %self.state, %convention, "badge applied");
        self.state
    }

    /// Label for arbitrary badge content using this service's formatter.
    pub fn badge_string(&self, content: Option<u64>) -> String {
        badge_string(
            self.handlers.localization.as_ref(),
            content,
            self.config.max_badge_content,
        )
    }

    /// Label for the current badge, `None` when nothing is shown.
    pub fn badge_label(&self) -> Option<String> {
        self.state
            .label_content()
            .map(|content| self.badge_string(content))
    }

    /// Stop trusting an endpoint: drop it along with anything still queued.
    fn revoke(&mut self, endpoint: EndpointId) {
        if let Some(removed) = self.endpoints.remove(endpoint) {
            tracing::warn!(%endpoint, frame = %removed.frame(), "badge endpoint revoked");
        }
    }

    fn handle_request(
        &mut self,
        endpoint: EndpointId,
        frame: FrameIdentity,
        request: BadgeRequest,
    ) -> DispatchOutcome {
        match validate_request(&request) {
            Ok(count) => {
                tracing::debug!(%endpoint, %frame, %request, "badge request");
                DispatchOutcome::Applied(self.apply_badge(count, self.config.convention))
            }
            Err(violation) => {
                tracing::warn!(%endpoint, %frame, %request, %violation, "rejected badge request");
                self.handlers
                    .bad_message
                    .report_bad_message(frame, &violation.reason());
                self.revoke(endpoint);
                DispatchOutcome::Rejected(violation)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::badge_channel;
    use assert_matches::assert_matches;
    use badging_core::{BadgeContent, ProtocolViolation};
    use badging_effects::CatalogLocalization;
    use badging_testkit::{MockBadMessageSink, MockIconBadger};
    use std::num::NonZeroU64;
    use std::sync::Arc;

    struct Harness {
        service: BadgeService,
        icon: Arc<MockIconBadger>,
        bad_messages: Arc<MockBadMessageSink>,
    }

    fn harness() -> Harness {
        let icon = Arc::new(MockIconBadger::new());
        let bad_messages = Arc::new(MockBadMessageSink::new());
        let handlers = BadgeHandlers::new(
            icon.clone(),
            bad_messages.clone(),
            Arc::new(CatalogLocalization::english()),
        );
        let config = BadgeConfig {
            convention: ForwardingConvention::CountOnly,
            ..BadgeConfig::default()
        };
        Harness {
            service: BadgeService::new(config, handlers),
            icon,
            bad_messages,
        }
    }

    fn bind(service: &mut BadgeService) -> EndpointId {
        let (_remote, receiver) = badge_channel();
        service.bind_endpoint(FrameIdentity::new(10, 1), receiver)
    }

    #[test]
    fn test_set_number_forwards_count() {
        let mut h = harness();
        let endpoint = bind(&mut h.service);

        let outcome = h
            .service
            .set_badge(endpoint, BadgeValue::Number(5))
            .expect("dispatch");

        let five = NonZeroU64::new(5).expect("non-zero");
        assert_eq!(
            outcome,
            DispatchOutcome::Applied(BadgeState::Shown(BadgeContent::Count(five)))
        );
        assert_eq!(h.icon.last_count(), Some(Some(5)));
        assert_eq!(h.service.badge_label(), Some("5".to_string()));
    }

    #[test]
    fn test_zero_number_rejected_without_forwarding() {
        let mut h = harness();
        let endpoint = bind(&mut h.service);
        h.service
            .set_badge(endpoint, BadgeValue::Flag)
            .expect("dispatch");

        let outcome = h
            .service
            .set_badge(endpoint, BadgeValue::Number(0))
            .expect("dispatch");

        assert_eq!(outcome, DispatchOutcome::Rejected(ProtocolViolation::ZeroNumber));
        assert_eq!(h.service.state(), BadgeState::Shown(BadgeContent::Flag));
        assert_eq!(h.icon.call_count(), 1);
        assert_eq!(h.bad_messages.report_count(), 1);
        assert_eq!(
            h.bad_messages.reports()[0].0,
            FrameIdentity::new(10, 1)
        );
        assert_eq!(h.service.endpoint_count(), 0);
        assert_matches!(
            h.service.set_badge(endpoint, BadgeValue::Number(3)),
            Err(BadgeError::UnknownEndpoint(_))
        );
    }

    #[test]
    fn test_clear_without_prior_set_forwards_zero() {
        let mut h = harness();
        let endpoint = bind(&mut h.service);

        h.service.clear_badge(endpoint).expect("dispatch");
        h.service.clear_badge(endpoint).expect("dispatch");

        assert_eq!(h.service.state(), BadgeState::NoBadge);
        assert_eq!(h.icon.counts(), vec![Some(0), Some(0)]);
        assert_eq!(h.service.badge_label(), None);
    }

    #[test]
    fn test_flag_then_clear_is_no_badge() {
        let mut h = harness();
        let endpoint = bind(&mut h.service);

        h.service.set_badge(endpoint, BadgeValue::Flag).expect("dispatch");
        assert_eq!(h.service.badge_label(), Some("•".to_string()));
        h.service.clear_badge(endpoint).expect("dispatch");

        assert_eq!(h.service.state(), BadgeState::NoBadge);
    }

    #[test]
    fn test_unknown_endpoint_is_error() {
        let mut h = harness();
        let endpoint = bind(&mut h.service);
        assert!(h.service.disconnect(endpoint));
        assert!(!h.service.disconnect(endpoint));

        let err = h.service.clear_badge(endpoint).unwrap_err();
        assert_matches!(err, BadgeError::UnknownEndpoint(id) if id == endpoint);
        assert_eq!(h.icon.call_count(), 0);
    }

    #[test]
    fn test_pump_applies_in_send_order_and_drops_hung_up_peers() {
        let mut h = harness();
        let (remote, receiver) = badge_channel();
        let endpoint = h.service.bind_endpoint(FrameIdentity::new(3, 7), receiver);

        remote.set_badge(BadgeValue::Number(1)).expect("send");
        remote.set_badge(BadgeValue::Flag).expect("send");
        remote.clear_badge().expect("send");
        drop(remote);

        let report = h.service.pump();
        assert_eq!(report.delivered, 3);
        assert_eq!(report.rejected, 0);
        assert_eq!(report.disconnected, vec![endpoint]);
        assert_eq!(h.icon.counts(), vec![Some(1), None, Some(0)]);
        assert_eq!(h.service.endpoint_count(), 0);
    }

    #[test]
    fn test_pump_revokes_endpoint_after_zero_number() {
        let mut h = harness();
        let (remote, receiver) = badge_channel();
        let endpoint = h.service.bind_endpoint(FrameIdentity::new(3, 7), receiver);

        remote.set_badge(BadgeValue::Number(1)).expect("send");
        remote.set_badge(BadgeValue::Number(0)).expect("send");
        remote.set_badge(BadgeValue::Number(42)).expect("send");

        let report = h.service.pump();
        assert_eq!(report.delivered, 2);
        assert_eq!(report.rejected, 1);
        assert_eq!(report.revoked, vec![endpoint]);
        assert!(report.disconnected.is_empty());
        assert_eq!(h.icon.counts(), vec![Some(1)]);
        assert_eq!(h.bad_messages.report_count(), 1);
        assert_eq!(h.service.endpoint_count(), 0);
        assert!(!remote.is_connected());
        assert_matches!(
            remote.set_badge(BadgeValue::Number(7)),
            Err(BadgeError::ChannelClosed { .. })
        );

        h.service.pump();
        assert_eq!(h.icon.counts(), vec![Some(1)]);
    }

    #[test]
    fn test_revocation_leaves_other_endpoints_bound() {
        let mut h = harness();
        let (bad, bad_rx) = badge_channel();
        let (good, good_rx) = badge_channel();
        h.service.bind_endpoint(FrameIdentity::new(3, 7), bad_rx);
        let kept = h.service.bind_endpoint(FrameIdentity::new(4, 1), good_rx);

        bad.set_badge(BadgeValue::Number(0)).expect("send");
        good.set_badge(BadgeValue::Number(5)).expect("send");
        h.service.pump();

        assert_eq!(h.service.endpoints().map(|(id, _)| id).collect::<Vec<_>>(), vec![kept]);
        assert!(good.is_connected());
        assert_eq!(h.icon.counts(), vec![Some(5)]);
    }

    #[test]
    fn test_apply_uses_given_convention() {
        let mut h = harness();
        h.service.apply_badge(Some(9), ForwardingConvention::Flag);
        assert_eq!(
            h.icon.calls().last().map(|c| c.convention),
            Some(ForwardingConvention::Flag)
        );
    }

    #[test]
    fn test_badge_string_saturates_at_config_ceiling() {
        let h = harness();
        assert_eq!(h.service.badge_string(Some(99)), "99");
        assert_eq!(h.service.badge_string(Some(100)), "99+");
        assert_eq!(h.service.badge_string(None), "•");
    }

    #[test]
    fn test_off_thread_entry_panics() {
        let mut h = harness();
        let panicked = std::thread::scope(|scope| {
            scope
                .spawn(|| {
                    std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                        h.service.apply_badge(Some(1), ForwardingConvention::Flag);
                    }))
                    .is_err()
                })
                .join()
                .expect("join")
        });
        assert!(panicked);
        assert_eq!(h.icon.call_count(), 0);
    }
}

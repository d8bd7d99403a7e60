//! Recording capability mocks
//!
//! Each mock keeps every call it receives so tests can assert on the exact
//! sequence the service produced.

use badging_core::{BadMessageEffects, ForwardingConvention, FrameIdentity, IconBadgeEffects};
use parking_lot::Mutex;

/// One call into the icon capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForwardedBadge {
    /// Count as forwarded (`None` is the flag)
    pub count: Option<u64>,
    /// Convention the service passed along
    pub convention: ForwardingConvention,
}

/// Icon capability that records every forwarded badge.
#[derive(Debug, Default)]
pub struct MockIconBadger {
    calls: Mutex<Vec<ForwardedBadge>>,
}

impl MockIconBadger {
    /// Mock with no recorded calls
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call, oldest first
    pub fn calls(&self) -> Vec<ForwardedBadge> {
        self.calls.lock().clone()
    }

    /// Forwarded counts, oldest first
    pub fn counts(&self) -> Vec<Option<u64>> {
        self.calls.lock().iter().map(|call| call.count).collect()
    }

    /// Most recent forwarded count; `None` when nothing was forwarded yet
    pub fn last_count(&self) -> Option<Option<u64>> {
        self.calls.lock().last().map(|call| call.count)
    }

    /// Number of forwarded badges
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Forget recorded calls
    pub fn reset(&self) {
        self.calls.lock().clear();
    }
}

impl IconBadgeEffects for MockIconBadger {
    fn set_badge_count(&self, count: Option<u64>, convention: ForwardingConvention) {
        self.calls.lock().push(ForwardedBadge { count, convention });
    }
}

/// Bad-message sink that records every report.
#[derive(Debug, Default)]
pub struct MockBadMessageSink {
    reports: Mutex<Vec<(FrameIdentity, String)>>,
}

impl MockBadMessageSink {
    /// Sink with no recorded reports
    pub fn new() -> Self {
        Self::default()
    }

    /// Every report, oldest first
    pub fn reports(&self) -> Vec<(FrameIdentity, String)> {
        self.reports.lock().clone()
    }

    /// Number of reports across all frames
    pub fn report_count(&self) -> usize {
        self.reports.lock().len()
    }

    /// Reports filed against `frame`
    pub fn reports_for(&self, frame: FrameIdentity) -> usize {
        self.reports
            .lock()
            .iter()
            .filter(|(reported, _)| *reported == frame)
            .count()
    }
}

impl BadMessageEffects for MockBadMessageSink {
    fn report_bad_message(&self, frame: FrameIdentity, reason: &str) {
        self.reports.lock().push((frame, reason.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_records_in_order() {
        let icon = MockIconBadger::new();
        icon.set_badge_count(Some(3), ForwardingConvention::CountOnly);
        icon.set_badge_count(None, ForwardingConvention::Flag);

        assert_eq!(icon.counts(), vec![Some(3), None]);
        assert_eq!(icon.last_count(), Some(None));
        assert_eq!(icon.calls()[1].convention, ForwardingConvention::Flag);

        icon.reset();
        assert_eq!(icon.last_count(), None);
    }

    #[test]
    fn test_sink_counts_per_frame() {
        let sink = MockBadMessageSink::new();
        let frame = FrameIdentity::new(1, 1);
        sink.report_bad_message(frame, "bad");
        sink.report_bad_message(FrameIdentity::new(2, 1), "bad");

        assert_eq!(sink.report_count(), 2);
        assert_eq!(sink.reports_for(frame), 1);
    }
}

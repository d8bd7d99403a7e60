//! Bad-message handler that logs and counts violations
//!
//! # Blocking Lock Usage
//!
//! Uses `parking_lot::Mutex` because:
//! 1. Reports arrive on the UI thread only, so there is no contention
//! 2. The critical section is a single map increment

use badging_core::{BadMessageEffects, FrameIdentity};
use parking_lot::Mutex;
use std::collections::HashMap;

/// Logs every violation at error level and keeps a per-frame tally.
#[derive(Debug, Default)]
pub struct TracingBadMessageHandler {
    reports: Mutex<HashMap<FrameIdentity, u64>>,
}

impl TracingBadMessageHandler {
    /// Create a handler with no recorded reports
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of violations reported for `frame`
    pub fn report_count(&self, frame: FrameIdentity) -> u64 {
        self.reports.lock().get(&frame).copied().unwrap_or(0)
    }

    /// Number of violations reported across all frames
    pub fn total_reports(&self) -> u64 {
        self.reports.lock().values().sum()
    }

    /// Frames that have been reported at least once
    pub fn offending_frames(&self) -> Vec<FrameIdentity> {
        let mut frames: Vec<_> = self.reports.lock().keys().copied().collect();
        frames.sort();
        frames
    }
}

impl BadMessageEffects for TracingBadMessageHandler {
    fn report_bad_message(&self, frame: FrameIdentity, reason: &str) {
        tracing::error!(%frame, reason, "bad message from renderer");
        *self.reports.lock().entry(frame).or_insert(0) += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_per_frame() {
        let handler = TracingBadMessageHandler::new();
        let a = FrameIdentity::new(1, 1);
        let b = FrameIdentity::new(2, 1);

        handler.report_bad_message(a, "zero");
        handler.report_bad_message(a, "zero");
        handler.report_bad_message(b, "zero");

        assert_eq!(handler.report_count(a), 2);
        assert_eq!(handler.report_count(b), 1);
        assert_eq!(handler.report_count(FrameIdentity::new(3, 3)), 0);
        assert_eq!(handler.total_reports(), 3);
        assert_eq!(handler.offending_frames(), vec![a, b]);
    }
}

//! Icon badging handlers
//!
//! Neither handler paints anything. `TracingIconBadger` only logs;
//! `LabelIconBadger` turns the forwarded count into the label a dock would
//! show and hands it to a host-supplied sink.

use badging_core::{badge_string, ForwardingConvention, IconBadgeEffects, LocalizationEffects};
use std::fmt;
use std::sync::Arc;

/// Icon handler that logs each forwarded count.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingIconBadger;

impl TracingIconBadger {
    /// Create a new handler
    pub fn new() -> Self {
        Self
    }
}

impl IconBadgeEffects for TracingIconBadger {
    fn set_badge_count(&self, count: Option<u64>, convention: ForwardingConvention) {
        tracing::info!(?count, %convention, "icon badge updated");
    }
}

/// Icon handler for label-based platforms.
///
/// The sink receives `None` when the badge is removed and `Some(label)`
/// otherwise. Both conventions produce the same labels.
pub struct LabelIconBadger<F> {
    localization: Arc<dyn LocalizationEffects>,
    max_badge_content: u64,
    sink: F,
}

impl<F> LabelIconBadger<F>
where
    F: Fn(Option<String>) + Send + Sync,
{
    /// Create a label badger that formats with `localization`
    pub fn new(localization: Arc<dyn LocalizationEffects>, max_badge_content: u64, sink: F) -> Self {
        Self {
            localization,
            max_badge_content,
            sink,
        }
    }

    /// Label for a forwarded count, `None` when the badge is cleared.
    pub fn label_for(&self, count: Option<u64>) -> Option<String> {
        match count {
            Some(0) => None,
            content => Some(badge_string(
                self.localization.as_ref(),
                content,
                self.max_badge_content,
            )),
        }
    }
}

impl<F> IconBadgeEffects for LabelIconBadger<F>
where
    F: Fn(Option<String>) + Send + Sync,
{
    fn set_badge_count(&self, count: Option<u64>, convention: ForwardingConvention) {
        let label = self.label_for(count);
        tracing::debug!(?count, %convention, ?label, "icon badge label");
        (self.sink)(label);
    }
}

impl<F> fmt::Debug for LabelIconBadger<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabelIconBadger")
            .field("max_badge_content", &self.max_badge_content)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CatalogLocalization;
    use parking_lot::Mutex;

    fn recording_badger() -> (
        LabelIconBadger<impl Fn(Option<String>) + Send + Sync>,
        Arc<Mutex<Vec<Option<String>>>>,
    ) {
        let labels = Arc::new(Mutex::new(Vec::new()));
        let sink_labels = Arc::clone(&labels);
        let badger = LabelIconBadger::new(
            Arc::new(CatalogLocalization::english()),
            99,
            move |label| sink_labels.lock().push(label),
        );
        (badger, labels)
    }

    #[test]
    fn test_labels_for_each_count_shape() {
        let (badger, labels) = recording_badger();

        badger.set_badge_count(Some(5), ForwardingConvention::CountOnly);
        badger.set_badge_count(None, ForwardingConvention::CountOnly);
        badger.set_badge_count(Some(1500), ForwardingConvention::Flag);
        badger.set_badge_count(Some(0), ForwardingConvention::Flag);

        assert_eq!(
            *labels.lock(),
            vec![
                Some("5".to_string()),
                Some("•".to_string()),
                Some("99+".to_string()),
                None,
            ]
        );
    }

    #[test]
    fn test_tracing_badger_accepts_everything() {
        let badger = TracingIconBadger::new();
        badger.set_badge_count(Some(0), ForwardingConvention::Flag);
        badger.set_badge_count(None, ForwardingConvention::CountOnly);
    }
}

//! Handler bundle passed to the badge service

use super::{BadMessageEffects, IconBadgeEffects, LocalizationEffects};
use std::fmt;
use std::sync::Arc;

/// The set of capabilities one badge service calls into.
///
/// Cloning is cheap; handlers are shared between every service created by the
/// same factory.
#[derive(Clone)]
pub struct BadgeHandlers {
    /// Platform icon badging
    pub icon: Arc<dyn IconBadgeEffects>,
    /// Bad-message sink
    pub bad_message: Arc<dyn BadMessageEffects>,
    /// Number formatting
    pub localization: Arc<dyn LocalizationEffects>,
}

impl BadgeHandlers {
    /// Bundle three handlers
    pub fn new(
        icon: Arc<dyn IconBadgeEffects>,
        bad_message: Arc<dyn BadMessageEffects>,
        localization: Arc<dyn LocalizationEffects>,
    ) -> Self {
        Self {
            icon,
            bad_message,
            localization,
        }
    }
}

impl fmt::Debug for BadgeHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BadgeHandlers").finish_non_exhaustive()
    }
}

//! Bad-message reporting effect interface

use crate::types::FrameIdentity;

/// Sink for peers that violate the expected request shape.
///
/// The host runtime owns the consequences (closing the channel, penalizing
/// the renderer). The service only reports.
pub trait BadMessageEffects: Send + Sync {
    /// Report that `frame` sent a malformed request.
    fn report_bad_message(&self, frame: FrameIdentity, reason: &str);
}

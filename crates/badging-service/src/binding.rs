//! Frame binding entry point
//!
//! The routing layer calls `bind_frame_receiver` when a rendering unit asks
//! for the badge interface. A context without a badge service is not an
//! error: the bind is dropped and the peer's channel closes.

use crate::channel::{badge_channel, BadgeReceiver, BadgeRemote};
use crate::factory::BadgeServiceResolver;
use badging_core::{BrowsingContextId, EndpointId, FrameIdentity};

/// A pending bind from the routing layer.
#[derive(Debug)]
pub struct FrameBindRequest {
    /// Frame asking for the interface
    pub frame: FrameIdentity,
    /// Browsing context that owns the frame
    pub context: BrowsingContextId,
    /// Endpoint side of the frame's channel
    pub receiver: BadgeReceiver,
}

impl FrameBindRequest {
    /// Bundle a bind request
    pub fn new(frame: FrameIdentity, context: BrowsingContextId, receiver: BadgeReceiver) -> Self {
        Self {
            frame,
            context,
            receiver,
        }
    }
}

/// Bind a frame's channel to the badge service of its browsing context.
///
/// Must run on the UI thread. Returns `None` (and drops the channel) when the
/// context has no badge service.
pub fn bind_frame_receiver<R>(resolver: &mut R, request: FrameBindRequest) -> Option<EndpointId>
where
    R: BadgeServiceResolver + ?Sized,
{
    resolver.ui_thread().assert_current();

    let FrameBindRequest {
        frame,
        context,
        receiver,
    } = request;

    let Some(service) = resolver.service_for_context(context) else {
        tracing::debug!(%frame, %context, "no badge service for context, dropping bind");
        return None;
    };
    Some(service.bind_endpoint(frame, receiver))
}

/// Open a channel for `frame` and bind it in one step.
///
/// Convenience for hosts that create the peer side themselves.
pub fn connect_frame<R>(
    resolver: &mut R,
    frame: FrameIdentity,
    context: BrowsingContextId,
) -> (BadgeRemote, Option<EndpointId>)
where
    R: BadgeServiceResolver + ?Sized,
{
    let (remote, receiver) = badge_channel();
    let endpoint = bind_frame_receiver(resolver, FrameBindRequest::new(frame, context, receiver));
    (remote, endpoint)
}

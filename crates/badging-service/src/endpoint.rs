//! Badge endpoints and request validation
//!
//! An endpoint is one bound channel plus the frame that bound it. It holds no
//! reference to the service and never touches badge state; the service pulls
//! requests out of it and applies them.
//!
//! # Validation
//!
//! `SetBadge(Number(0))` is rejected. Clearing has its own request, so a
//! well-formed peer never sends a zero number; seeing one means the peer is
//! buggy or compromised.

use crate::channel::{BadgeReceiver, ChannelPoll};
use crate::request::BadgeRequest;
use badging_core::{EndpointId, FrameIdentity, ProtocolViolation};

/// One bound channel on a badge service.
#[derive(Debug)]
pub struct Endpoint {
    id: EndpointId,
    frame: FrameIdentity,
    receiver: BadgeReceiver,
}

impl Endpoint {
    /// Bind `receiver` to `frame` under `id`
    pub fn new(id: EndpointId, frame: FrameIdentity, receiver: BadgeReceiver) -> Self {
        Self {
            id,
            frame,
            receiver,
        }
    }

    /// Endpoint identity within its service
    pub fn id(&self) -> EndpointId {
        self.id
    }

    /// Frame this endpoint was bound for
    pub fn frame(&self) -> FrameIdentity {
        self.frame
    }

    /// Take the next queued request without blocking.
    ///
    /// `Disconnected` only shows up once the peer has hung up and the queue
    /// is empty.
    pub fn next_request(&mut self) -> ChannelPoll {
        self.receiver.poll_request()
    }
}

/// Check a request and map it to the count handed to `apply_badge`.
///
/// `Flag` maps to `None`, `Number(n)` to `Some(n)` and `ClearBadge` to
/// `Some(0)`.
pub fn validate_request(request: &BadgeRequest) -> Result<Option<u64>, ProtocolViolation> {
    match request {
        BadgeRequest::SetBadge(value) if value.is_zero_number() => {
            Err(ProtocolViolation::ZeroNumber)
        }
        BadgeRequest::SetBadge(value) => Ok(value.count()),
        BadgeRequest::ClearBadge => Ok(Some(0)),
    }
}

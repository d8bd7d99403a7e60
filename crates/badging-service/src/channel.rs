//! Per-frame badge channel
//!
//! The peer side holds a `BadgeRemote`; the endpoint owns the matching
//! `BadgeReceiver`. Requests are queued in send order and only leave the queue
//! when the UI thread pumps the service, so a peer never touches host state
//! directly.
//!
//! Dropping every `BadgeRemote` is a disconnect. Requests already queued are
//! still delivered before the endpoint observes the hang-up.

use crate::request::BadgeRequest;
use badging_core::{BadgeError, BadgeValue, Result};
use tokio::sync::mpsc::{self, error::TryRecvError};

/// Create a connected remote/receiver pair.
pub fn badge_channel() -> (BadgeRemote, BadgeReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (BadgeRemote { tx }, BadgeReceiver { rx })
}

/// Peer-side handle for sending badge requests.
#[derive(Debug, Clone)]
pub struct BadgeRemote {
    tx: mpsc::UnboundedSender<BadgeRequest>,
}

impl BadgeRemote {
    /// Queue a request.
    ///
    /// Fails once the endpoint has been destroyed.
    pub fn send(&self, request: BadgeRequest) -> Result<()> {
        self.tx
            .send(request)
            .map_err(|err| BadgeError::channel_closed(err.0.to_string()))
    }

    /// Ask the host to show `value`
    pub fn set_badge(&self, value: BadgeValue) -> Result<()> {
        self.send(BadgeRequest::SetBadge(value))
    }

    /// Ask the host to remove the badge
    pub fn clear_badge(&self) -> Result<()> {
        self.send(BadgeRequest::ClearBadge)
    }

    /// Whether the endpoint on the other side still exists
    pub fn is_connected(&self) -> bool {
        !self.tx.is_closed()
    }
}

/// What a non-blocking poll of a receiver found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelPoll {
    /// The next queued request
    Request(BadgeRequest),
    /// Nothing queued right now
    Empty,
    /// Queue drained and every remote dropped
    Disconnected,
}

/// Endpoint-side half of a badge channel.
#[derive(Debug)]
pub struct BadgeReceiver {
    rx: mpsc::UnboundedReceiver<BadgeRequest>,
}

impl BadgeReceiver {
    /// Take the next queued request without blocking.
    pub fn poll_request(&mut self) -> ChannelPoll {
        match self.rx.try_recv() {
            Ok(request) => ChannelPoll::Request(request),
            Err(TryRecvError::Empty) => ChannelPoll::Empty,
            Err(TryRecvError::Disconnected) => ChannelPoll::Disconnected,
        }
    }
}

//! Endpoint registry owned by a badge service
//!
//! # Invariants
//!
//! - Ids are never reused within one registry
//! - Iteration order is registration order (ids are monotonic)
//! - Frames are metadata only; several endpoints may share a frame

use crate::channel::BadgeReceiver;
use crate::endpoint::Endpoint;
use badging_core::{EndpointId, FrameIdentity};
use std::collections::BTreeMap;

/// Live endpoints keyed by their own identity.
#[derive(Debug, Default)]
pub struct EndpointRegistry {
    endpoints: BTreeMap<EndpointId, Endpoint>,
    next_id: u64,
}

impl EndpointRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new endpoint for `frame` and return its id.
    pub fn add(&mut self, frame: FrameIdentity, receiver: BadgeReceiver) -> EndpointId {
        self.next_id += 1;
        let id = EndpointId::from_raw(self.next_id);
        self.endpoints.insert(id, Endpoint::new(id, frame, receiver));
        id
    }

    /// Remove an endpoint, dropping its channel.
    pub fn remove(&mut self, id: EndpointId) -> Option<Endpoint> {
        self.endpoints.remove(&id)
    }

    /// Look up an endpoint
    pub fn get(&self, id: EndpointId) -> Option<&Endpoint> {
        self.endpoints.get(&id)
    }

    /// Look up an endpoint mutably
    pub fn get_mut(&mut self, id: EndpointId) -> Option<&mut Endpoint> {
        self.endpoints.get_mut(&id)
    }

    /// Ids in registration order
    pub fn ids(&self) -> Vec<EndpointId> {
        self.endpoints.keys().copied().collect()
    }

    /// Endpoints bound for `frame`
    pub fn ids_for_frame(&self, frame: FrameIdentity) -> Vec<EndpointId> {
        self.endpoints
            .values()
            .filter(|endpoint| endpoint.frame() == frame)
            .map(Endpoint::id)
            .collect()
    }

    /// Iterate `(id, frame)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (EndpointId, FrameIdentity)> + '_ {
        self.endpoints
            .values()
            .map(|endpoint| (endpoint.id(), endpoint.frame()))
    }

    /// Number of live endpoints
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    /// Whether no endpoint is registered
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

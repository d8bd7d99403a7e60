//! Identifiers for frames, browsing contexts and endpoints
//!
//! All three are opaque keys. The service stores and compares them but never
//! resolves them to anything; the routing infrastructure that hands them out
//! lives outside this workspace.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identity of the isolated rendering unit that issued a request.
///
/// A `(process_id, routing_id)` pair supplied by the frame routing layer.
/// Immutable once assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FrameIdentity {
    process_id: i32,
    routing_id: i32,
}

impl FrameIdentity {
    /// Create a frame identity from the routing layer's ids.
    pub const fn new(process_id: i32, routing_id: i32) -> Self {
        Self {
            process_id,
            routing_id,
        }
    }

    /// Id of the rendering process hosting the frame.
    pub const fn process_id(&self) -> i32 {
        self.process_id
    }

    /// Routing id of the frame within its process.
    pub const fn routing_id(&self) -> i32 {
        self.routing_id
    }
}

impl fmt::Display for FrameIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame-{}:{}", self.process_id, self.routing_id)
    }
}

impl FromStr for FrameIdentity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s.strip_prefix("frame-").unwrap_or(s);
        let (process, routing) = body
            .split_once(':')
            .ok_or_else(|| format!("expected <process>:<routing>, got '{s}'"))?;
        let process_id = process
            .parse()
            .map_err(|e| format!("invalid process id '{process}': {e}"))?;
        let routing_id = routing
            .parse()
            .map_err(|e| format!("invalid routing id '{routing}': {e}"))?;
        Ok(Self::new(process_id, routing_id))
    }
}

/// Opaque handle for the browsing context that owns a badge service.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct BrowsingContextId(pub u64);

impl BrowsingContextId {
    /// Create from a raw handle value
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw handle value
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for BrowsingContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "context-{}", self.0)
    }
}

/// Identity of one bound endpoint within a badge service.
///
/// Assigned by the service when the endpoint is registered. Two endpoints
/// bound to the same frame still get distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EndpointId(u64);

impl EndpointId {
    /// Create from a raw counter value
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw counter value
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EndpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "endpoint-{}", self.0)
    }
}

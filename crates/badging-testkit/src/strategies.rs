//! Property test strategies for badge types

use proptest::prelude::*;

// Re-export proptest for convenience
pub use proptest;

use badging_core::{BadgeValue, FrameIdentity};
use badging_service::BadgeRequest;

/// Any badge value, zero numbers included.
///
/// Small numbers are weighted up so zero and the saturation boundary show up
/// often.
pub fn arb_badge_value() -> impl Strategy<Value = BadgeValue> {
    prop_oneof![
        1 => Just(BadgeValue::Flag),
        1 => Just(BadgeValue::Number(0)),
        3 => (0u64..200).prop_map(BadgeValue::Number),
        1 => any::<u64>().prop_map(BadgeValue::Number),
    ]
}

/// Badge values a well-behaved page could send
pub fn arb_valid_badge_value() -> impl Strategy<Value = BadgeValue> {
    prop_oneof![
        Just(BadgeValue::Flag),
        (1u64..200).prop_map(BadgeValue::Number),
        (1u64..=u64::MAX).prop_map(BadgeValue::Number),
    ]
}

/// Frame identities over a small process and routing id space
pub fn arb_frame_identity() -> impl Strategy<Value = FrameIdentity> {
    (1i32..64, 1i32..1024).prop_map(|(process, routing)| FrameIdentity::new(process, routing))
}

/// A request as a page would issue it
pub fn arb_request() -> impl Strategy<Value = BadgeRequest> {
    prop_oneof![
        4 => arb_badge_value().prop_map(BadgeRequest::SetBadge),
        1 => Just(BadgeRequest::ClearBadge),
    ]
}

/// Up to `max_len` requests in issue order
pub fn arb_request_sequence(max_len: usize) -> impl Strategy<Value = Vec<BadgeRequest>> {
    prop::collection::vec(arb_request(), 0..=max_len)
}

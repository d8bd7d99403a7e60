//! Property tests over arbitrary request sequences

use badging_core::{BadgeState, BadgeValue};
use badging_service::{validate_request, BadgeRequest};
use badging_testkit::strategies::{
    arb_frame_identity, arb_request_sequence, arb_valid_badge_value,
};
use badging_testkit::{test_context, test_frame, TestHost};
use proptest::prelude::*;

/// Requests a service accepts before the first violation revokes the sender
fn accepted_prefix(requests: &[BadgeRequest]) -> &[BadgeRequest] {
    let end = requests
        .iter()
        .position(|request| validate_request(request).is_err())
        .unwrap_or(requests.len());
    &requests[..end]
}

proptest! {
    #[test]
    fn prop_last_accepted_request_wins(requests in arb_request_sequence(24)) {
        let mut host = TestHost::new();
        let context = test_context(1);
        let (remote, _) = host.connect(test_frame(1), context);
        for request in &requests {
            remote.send(*request).unwrap();
        }
        host.pump();

        let expected = accepted_prefix(&requests)
            .last()
            .and_then(|request| validate_request(request).ok())
            .map(BadgeState::from_count)
            .unwrap_or(BadgeState::NoBadge);
        prop_assert_eq!(host.service(context).state(), expected);
    }

    #[test]
    fn prop_nothing_forwarded_after_violation(requests in arb_request_sequence(24)) {
        let mut host = TestHost::new();
        let (remote, _) = host.connect(test_frame(1), test_context(1));
        for request in &requests {
            remote.send(*request).unwrap();
        }
        let report = host.pump();

        let accepted = accepted_prefix(&requests).len();
        let violated = accepted < requests.len();
        prop_assert_eq!(host.icon.call_count(), accepted);
        prop_assert_eq!(host.bad_messages.report_count(), usize::from(violated));
        prop_assert_eq!(report.rejected, usize::from(violated));
        prop_assert_eq!(remote.is_connected(), !violated);
    }

    #[test]
    fn prop_zero_number_never_changes_state(prior in arb_valid_badge_value()) {
        let mut host = TestHost::new();
        let context = test_context(1);
        let (remote, _) = host.connect(test_frame(1), context);
        remote.set_badge(prior).unwrap();
        host.pump();
        let before = host.service(context).state();
        let calls = host.icon.call_count();

        remote.set_badge(BadgeValue::Number(0)).unwrap();
        host.pump();

        prop_assert_eq!(host.service(context).state(), before);
        prop_assert_eq!(host.bad_messages.report_count(), 1);
        prop_assert_eq!(host.icon.call_count(), calls);
    }

    #[test]
    fn prop_violation_reported_against_sender(
        frame in arb_frame_identity(),
        bystander in arb_frame_identity(),
    ) {
        prop_assume!(frame != bystander);
        let mut host = TestHost::new();
        let context = test_context(1);
        let (offender, _) = host.connect(frame, context);
        let (other, _) = host.connect(bystander, context);

        offender.set_badge(BadgeValue::Number(0)).unwrap();
        other.set_badge(BadgeValue::Number(2)).unwrap();
        host.pump();

        prop_assert_eq!(host.bad_messages.reports_for(frame), 1);
        prop_assert_eq!(host.bad_messages.reports_for(bystander), 0);
        prop_assert!(other.is_connected());
        prop_assert_eq!(host.service(context).endpoint_count(), 1);
    }
}

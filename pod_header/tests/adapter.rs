use pod_header::{HeaderBoundary, Message, MessageHeader, RecordingBoundary, project_header, send_message};
use proptest::prelude::*;
use std::sync::Once;

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Boundary that keeps every span it was handed.
#[derive(Default)]
struct CapturingBoundary {
    spans: Vec<Vec<u8>>,
}

impl HeaderBoundary for CapturingBoundary {
    fn receive(&mut self, bytes: &[u8]) {
        assert_eq!(bytes.len(), MessageHeader::SIZE);
        self.spans.push(bytes.to_vec());
    }
}

#[test]
fn hello_pod_scenario() {
    init_tracing();
    let msg = Message::new(42, "hello pod");

    let mut boundary = RecordingBoundary::new();
    send_message(&msg, &mut boundary);

    assert_eq!(
        boundary.last_header(),
        Some(&MessageHeader { len: 9, kind: 42, flags: 0 })
    );
}

#[test]
#[should_panic(expected = "header boundary")]
fn wrong_length_never_truncates() {
    init_tracing();
    let header = project_header(&Message::new(42, "hello pod"));
    let mut boundary = RecordingBoundary::new();
    boundary.receive(&header.as_bytes()[..7]);
}

#[test]
#[should_panic(expected = "header boundary")]
fn oversized_span_is_rejected() {
    let header = project_header(&Message::new(42, "hello pod"));
    let mut span = header.as_bytes().to_vec();
    span.push(0);
    RecordingBoundary::new().receive(&span);
}

#[test]
fn custom_boundaries_see_exactly_one_header_per_send() {
    init_tracing();
    let mut boundary = CapturingBoundary::default();
    for (kind, text) in [(1u16, "a"), (2, "bb"), (3, "ccc")] {
        send_message(&Message::new(kind, text), &mut boundary);
    }
    assert_eq!(boundary.spans.len(), 3);
    let last = MessageHeader::from_bytes(&boundary.spans[2]).unwrap();
    assert_eq!(last, MessageHeader { len: 3, kind: 3, flags: 0 });
}

proptest! {
    #[test]
    fn prop_projection_mirrors_message(kind in any::<u16>(), payload in ".{0,256}") {
        let msg = Message::new(kind, payload.clone());
        let header = project_header(&msg);

        prop_assert_eq!(header.len as usize, payload.len());
        prop_assert_eq!(header.kind, kind);
        prop_assert_eq!(header.flags, 0);
    }

    #[test]
    fn prop_boundary_holds_what_was_sent(kind in any::<u16>(), payload in prop::collection::vec(any::<char>(), 0..64)) {
        let msg = Message::new(kind, payload.into_iter().collect::<String>());
        let mut boundary = RecordingBoundary::new();
        send_message(&msg, &mut boundary);

        prop_assert_eq!(boundary.last_header(), Some(&project_header(&msg)));
    }

    #[test]
    fn prop_any_other_length_is_rejected(len in 0usize..64) {
        prop_assume!(len != MessageHeader::SIZE);
        let span = vec![0u8; len];
        prop_assert!(MessageHeader::from_bytes(&span).is_err());
    }
}

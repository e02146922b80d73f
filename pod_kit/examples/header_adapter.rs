//! Adapt a rich message to the 8-byte header a raw-bytes interface expects.

use pod_kit::prelude::*;
use tracing_subscriber::EnvFilter;

/// Stand-in for a foreign interface: prints what it receives.
struct PrintingBoundary {
    inner: RecordingBoundary,
}

impl HeaderBoundary for PrintingBoundary {
    fn receive(&mut self, bytes: &[u8]) {
        println!("boundary got {} bytes: {:02x?}", bytes.len(), bytes);
        self.inner.receive(bytes);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let msg = Message::new(42, "hello pod");
    println!("message: {:?}", msg);

    let mut boundary = PrintingBoundary {
        inner: RecordingBoundary::new(),
    };
    send_message(&msg, &mut boundary);

    if let Some(header) = boundary.inner.last_header() {
        println!("last header: {:?}", header);
        assert_eq!(header.kind, msg.kind);
        assert_eq!(header.len as usize, msg.payload.len());
        assert_eq!(header.flags, 0);
    }

    println!("\nA 7-byte span is rejected:");
    let header = project_header(&msg);
    let result = std::panic::catch_unwind(move || {
        RecordingBoundary::new().receive(&header.as_bytes()[..7]);
    });
    println!("  rejected: {}", result.is_err());
}

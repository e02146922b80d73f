//! Copy a POD record through its raw bytes.

use pod_kit::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut p1 = Packet::zeroed();
    p1.len = 42;
    p1.kind = 1;
    p1.flags = 0xFF;

    let mut p2 = Packet::zeroed();
    copy_bytes(&p1, &mut p2);

    println!("source      {:?} -> {:02x?}", p1, bytes_of(&p1));
    println!("destination {:?} -> {:02x?}", p2, bytes_of(&p2));
    assert_eq!(p2.len, 42);
    assert_eq!(p2.kind, 1);
    assert_eq!(p2.flags, 0xFF);

    // The same bytes can arrive as an untyped span.
    let span = bytes_of(&p1).to_vec();
    let mut p3 = Packet::default();
    copy_from_bytes(&span, &mut p3);
    println!("from span   {:?}", p3);

    println!("\n✓ All fields match");
}

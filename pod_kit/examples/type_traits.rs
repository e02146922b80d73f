//! Which of the four record shapes are POD, and why.
//!
//! Run with `RUST_LOG=info cargo run -p pod_kit --example type_traits`.

use pod_kit::prelude::*;
use tracing_subscriber::EnvFilter;

#[repr(C)]
#[derive(Describe, Clone, Copy)]
struct A {
    pub x: i32,
    pub y: f64,
}

#[repr(C)]
#[derive(Describe, Clone, Copy)]
struct B {
    pub a: A,
    pub z: i32,
}

#[repr(C)]
#[derive(Describe)]
struct D {
    pub x: i32,
    y: i32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Catalog ===\n");
    for desc in catalog::all() {
        let report = TypeReport::of(&desc);
        report.log();
        println!("{}\n", report);
    }

    println!("=== Derived from Rust structs ===\n");
    for report in [
        TypeReport::for_type::<A>(),
        TypeReport::for_type::<B>(),
        TypeReport::for_type::<D>(),
        TypeReport::for_type::<Message>(),
        TypeReport::for_type::<MessageHeader>(),
    ] {
        println!("{}\n", report);
    }

    let d = D { x: 1, y: 2 };
    println!("D {{ x: {}, y: {} }} occupies {} bytes", d.x, d.y, std::mem::size_of::<D>());
}

//! # pod_traits
//!
//! Classify record types as *trivial*, *standard-layout* and *POD* from an
//! explicit structural description.
//!
//! ```rust
//! use pod_traits::{catalog, classify};
//!
//! let d = classify(&catalog::d());
//! assert!(d.is_trivial);
//! assert!(!d.is_standard_layout); // public `x`, private `y`
//! assert!(!d.is_pod);
//! ```
//!
//! Rust structs can describe themselves with `#[derive(Describe)]` (feature
//! `derive`, on by default). `pub` fields are public, everything else private;
//! `#[describe(owns_resources)]` marks a type that manages a resource.

// Lets the derive's `::pod_traits` paths resolve inside this crate's own tests.
extern crate self as pod_traits;

pub mod catalog;
pub mod classify;
pub mod describe;
pub mod descriptor;
pub mod layout;

pub use classify::{Classification, Violation, classify, violations};
pub use describe::Describe;
pub use descriptor::{Access, Field, FieldType, Scalar, SpecialMembers, TypeDescriptor};
pub use layout::{FieldOffset, Layout};

#[cfg(feature = "derive")]
pub use pod_traits_derive::Describe;

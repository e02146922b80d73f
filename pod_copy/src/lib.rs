//! # pod_copy
//!
//! Byte-wise copies of Plain Old Data within one address space.
//!
//! ```rust
//! use pod_copy::{Packet, copy_bytes};
//!
//! let p1 = Packet { len: 42, kind: 1, flags: 0xFF };
//! let mut p2 = Packet::default();
//!
//! copy_bytes(&p1, &mut p2);
//!
//! assert_eq!(p2.len, 42);
//! assert_eq!(p2.kind, 1);
//! assert_eq!(p2.flags, 0xFF);
//! ```
//!
//! Only `T: bytemuck::Pod` is accepted, so values that own heap storage
//! (`String`, `Vec<T>`, `Box<T>`) cannot be passed in. The copy reproduces
//! native layout and endianness; it is not a wire format.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod packet;
pub mod transcribe;

pub use error::CopyError;
pub use packet::Packet;
pub use transcribe::{
    copy_bytes, copy_from_bytes, copy_slice, transcribe, try_copy_from_bytes, try_copy_slice,
};

// Re-export bytemuck for convenience
pub use bytemuck;

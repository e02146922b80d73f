//! # pod_kit
//!
//! Plain Old Data in three pieces:
//!
//! - **Classification**: is a type trivial, standard-layout, POD?
//!   ([`pod_traits`])
//! - **Byte copies**: duplicate a POD value through its raw bytes
//!   ([`pod_copy`])
//! - **Header adaptation**: turn a rich message into a fixed 8-byte header for
//!   an interface that takes only bytes and a length ([`pod_header`])
//!
//! ## Quick Start
//!
//! ```rust
//! use pod_kit::prelude::*;
//!
//! // Which of these are POD?
//! assert!(catalog::a().is_pod());
//! assert!(!catalog::c().is_pod());
//!
//! // Copy a record through its bytes
//! let p1 = Packet::new(42, 1, 0xFF);
//! let mut p2 = Packet::default();
//! copy_bytes(&p1, &mut p2);
//! assert_eq!(p1, p2);
//!
//! // Hand a header to a raw-bytes interface
//! let msg = Message::new(42, "hello pod");
//! let mut boundary = RecordingBoundary::new();
//! send_message(&msg, &mut boundary);
//! assert_eq!(boundary.last_header().map(|h| h.len), Some(9));
//! ```

pub mod prelude;
pub mod report;

pub use pod_copy;
pub use pod_header;
pub use pod_traits;

// Re-export classifier types
pub use pod_traits::{
    Access, Classification, Describe, Field, FieldType, Layout, Scalar, SpecialMembers,
    TypeDescriptor, Violation, catalog, classify, violations,
};

// Re-export byte copy types
pub use pod_copy::{CopyError, Packet, copy_bytes, copy_from_bytes, transcribe, try_copy_from_bytes};

// Re-export header adapter types
pub use pod_header::{
    HeaderBoundary, HeaderError, Message, MessageHeader, RecordingBoundary, project_header,
    send_message,
};

// Re-export for convenience
pub use bytemuck::{Pod, Zeroable};
pub use report::TypeReport;

//! Convenience re-exports for common usage

// Classification
pub use pod_traits::{Access, Describe, Scalar, TypeDescriptor, catalog, classify};

// Byte copies
pub use pod_copy::{Packet, copy_bytes, copy_from_bytes};

// Header adaptation
pub use pod_header::{HeaderBoundary, Message, MessageHeader, RecordingBoundary, project_header, send_message};

pub use crate::report::TypeReport;

// Bytemuck utilities
pub use bytemuck::{Pod, Zeroable, bytes_of};

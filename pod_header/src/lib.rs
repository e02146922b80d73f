//! Fixed-layout message headers for raw-bytes interfaces.
//!
//! A [`Message`] owns its payload and cannot cross a boundary that only takes
//! a pointer and a length. [`project_header`] snapshots the payload size and
//! message kind into a [`MessageHeader`], an 8-byte POD record, which is then
//! handed to a [`HeaderBoundary`] as raw bytes.

pub mod boundary;
pub mod error;
pub mod header;
pub mod message;

pub use boundary::{HeaderBoundary, RecordingBoundary, send_message};
pub use error::HeaderError;
pub use header::MessageHeader;
pub use message::{Message, project_header};

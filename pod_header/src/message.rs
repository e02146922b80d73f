use pod_traits::Describe;

use crate::{HeaderError, MessageHeader};

/// A message as application code builds it; owns its payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Describe)]
pub struct Message {
    pub kind: u16,
    pub payload: String,
}

impl Message {
    pub fn new(kind: u16, payload: impl Into<String>) -> Self {
        Message {
            kind,
            payload: payload.into(),
        }
    }

    /// Current payload size in bytes.
    pub fn payload_len(&self) -> usize {
        self.payload.len()
    }
}

impl TryFrom<&Message> for MessageHeader {
    type Error = HeaderError;

    fn try_from(message: &Message) -> Result<Self, HeaderError> {
        let size = message.payload_len();
        let len = u32::try_from(size).map_err(|_| HeaderError::PayloadTooLarge(size))?;
        Ok(MessageHeader {
            len,
            kind: message.kind,
            flags: MessageHeader::NO_FLAGS,
        })
    }
}

/// Snapshot `message` into a fresh header.
///
/// `len` is the payload size at the time of the call, `kind` is copied and
/// `flags` is zero. The header keeps no reference to `message`.
///
/// # Panics
///
/// If the payload is longer than `u32::MAX` bytes.
pub fn project_header(message: &Message) -> MessageHeader {
    match MessageHeader::try_from(message) {
        Ok(header) => header,
        Err(e) => panic!("project_header: {}", e),
    }
}

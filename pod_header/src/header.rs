use bytemuck::bytes_of;
use bytemuck_derive::{Pod, Zeroable};
use pod_traits::Describe;

use crate::HeaderError;

/// POD message header.
///
/// Wire layout, native endianness:
///
/// | offset | size | field   |
/// |--------|------|---------|
/// | 0      | 4    | `len`   |
/// | 4      | 2    | `kind`  |
/// | 6      | 2    | `flags` |
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Describe)]
pub struct MessageHeader {
    /// Payload length in bytes.
    pub len: u32,
    /// Message type.
    pub kind: u16,
    /// Reserved, always zero.
    pub flags: u16,
}

const _: () = assert!(MessageHeader::SIZE == 8);

impl MessageHeader {
    pub const SIZE: usize = core::mem::size_of::<MessageHeader>();

    /// The only value `flags` is ever given.
    pub const NO_FLAGS: u16 = 0;

    /// The header as the raw span passed across a boundary.
    pub fn as_bytes(&self) -> &[u8] {
        bytes_of(self)
    }

    /// Read a header from exactly [`Self::SIZE`] bytes, aligned or not.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HeaderError> {
        let mut header = MessageHeader::default();
        pod_copy::try_copy_from_bytes(bytes, &mut header)?;
        Ok(header)
    }
}

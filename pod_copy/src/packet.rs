use bytemuck_derive::{Pod, Zeroable};

/// Fixed-layout record: `len` u32, `kind` u16, `flags` u16, 8 bytes.
#[repr(C)]
#[cfg_attr(feature = "describe", derive(pod_traits::Describe))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Packet {
    pub len: u32,
    pub kind: u16,
    pub flags: u16,
}

const _: () = assert!(core::mem::size_of::<Packet>() == 8);

impl Packet {
    pub const fn new(len: u32, kind: u16, flags: u16) -> Self {
        Packet { len, kind, flags }
    }
}

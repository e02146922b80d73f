//! Types that can report their own structure.

use crate::descriptor::TypeDescriptor;

/// Produces the structural description of `Self`.
///
/// Usually derived:
///
/// ```
/// use pod_traits::Describe;
///
/// #[derive(Describe)]
/// #[repr(C)]
/// struct Packet {
///     pub len: u32,
///     pub kind: u16,
///     pub flags: u16,
/// }
///
/// assert!(Packet::describe().is_pod());
/// ```
pub trait Describe {
    fn describe() -> TypeDescriptor;
}

impl Describe for String {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::owned_buffer("String")
    }
}

impl<T> Describe for Vec<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::owned_buffer("Vec")
    }
}

impl<T> Describe for Box<T> {
    fn describe() -> TypeDescriptor {
        use crate::descriptor::{Access, Scalar, SpecialMembers};
        TypeDescriptor::new("Box")
            .field("ptr", Access::Private, Scalar::Pointer)
            .user_provided(SpecialMembers::RESOURCE_MANAGEMENT)
    }
}

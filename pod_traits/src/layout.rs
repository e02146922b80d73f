//! Size, alignment and field offsets computed from a descriptor.
//!
//! Members are placed in declaration order at their natural alignment, base
//! class members before the derived class's own, with one pointer-sized
//! dispatch slot up front for polymorphic hierarchies. Empty base classes take
//! no space and a type with no members at all occupies one byte. For
//! standard-layout types this matches `#[repr(C)]`.

use crate::descriptor::{FieldType, Scalar, TypeDescriptor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub size: usize,
    pub align: usize,
}

impl Layout {
    pub const fn of<T>() -> Self {
        Layout {
            size: core::mem::size_of::<T>(),
            align: core::mem::align_of::<T>(),
        }
    }

    const fn scalar(s: Scalar) -> Self {
        Layout {
            size: s.size(),
            align: s.align(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOffset {
    /// Class in the hierarchy that declares the member.
    pub class: String,
    pub name: String,
    pub offset: usize,
    pub size: usize,
}

fn round_up(n: usize, align: usize) -> usize {
    n.div_ceil(align) * align
}

impl FieldType {
    pub fn layout(&self) -> Layout {
        match self {
            FieldType::Scalar(s) => Layout::scalar(*s),
            FieldType::Record(desc) => desc.layout(),
            FieldType::Array(elem, len) => {
                let elem = elem.layout();
                Layout {
                    size: elem.size * len,
                    align: elem.align,
                }
            }
        }
    }
}

impl TypeDescriptor {
    /// Size and alignment. Approximate when more than one class in the
    /// hierarchy declares data, see [`field_offsets`](Self::field_offsets).
    pub fn layout(&self) -> Layout {
        self.place().0
    }

    /// Offsets of every data member in the hierarchy, in memory order.
    ///
    /// Exact for standard-layout types. When data sits in more than one class
    /// the members are packed flat and a base's tail padding is not reserved,
    /// so a real compiler may place the derived members later.
    pub fn field_offsets(&self) -> Vec<FieldOffset> {
        self.place().1
    }

    fn place(&self) -> (Layout, Vec<FieldOffset>) {
        let mut offset = 0;
        let mut align = 1;
        let mut placed = Vec::new();

        if self.is_polymorphic() {
            let vptr = Layout::scalar(Scalar::Pointer);
            offset = vptr.size;
            align = vptr.align;
        }

        // Bases first, most-base first.
        let mut classes = self.hierarchy();
        classes.reverse();

        for class in classes {
            for field in &class.fields {
                let l = field.ty.layout();
                offset = round_up(offset, l.align);
                placed.push(FieldOffset {
                    class: class.name.clone(),
                    name: field.name.clone(),
                    offset,
                    size: l.size,
                });
                offset += l.size;
                align = align.max(l.align);
            }
        }

        let size = if offset == 0 { 1 } else { round_up(offset, align) };
        (Layout { size, align }, placed)
    }

    /// Bytes of padding inserted between and after members.
    pub fn padding(&self) -> usize {
        let layout = self.layout();
        let used: usize = self.field_offsets().iter().map(|f| f.size).sum();
        let vptr = if self.is_polymorphic() {
            Scalar::Pointer.size()
        } else {
            0
        };
        layout.size.saturating_sub(used + vptr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Access;

    #[repr(C)]
    struct A {
        x: i32,
        y: f64,
    }

    #[repr(C)]
    struct Packet {
        len: u32,
        kind: u16,
        flags: u16,
    }

    fn a() -> TypeDescriptor {
        TypeDescriptor::new("A")
            .field("x", Access::Public, Scalar::I32)
            .field("y", Access::Public, Scalar::F64)
    }

    #[test]
    fn matches_repr_c_with_padding() {
        assert_eq!(a().layout(), Layout::of::<A>());
        let offsets = a().field_offsets();
        assert_eq!(offsets[0].offset, core::mem::offset_of!(A, x));
        assert_eq!(offsets[1].offset, core::mem::offset_of!(A, y));
        assert_eq!(a().padding(), 4);
    }

    #[test]
    fn packet_has_no_padding() {
        let packet = TypeDescriptor::new("Packet")
            .field("len", Access::Public, Scalar::U32)
            .field("kind", Access::Public, Scalar::U16)
            .field("flags", Access::Public, Scalar::U16);
        assert_eq!(packet.layout(), Layout::of::<Packet>());
        assert_eq!(packet.layout(), Layout { size: 8, align: 4 });
        assert_eq!(packet.padding(), 0);
    }

    #[test]
    fn empty_type_occupies_one_byte() {
        assert_eq!(
            TypeDescriptor::new("Empty").layout(),
            Layout { size: 1, align: 1 }
        );
    }

    #[test]
    fn polymorphic_type_reserves_dispatch_slot() {
        let c = TypeDescriptor::new("C")
            .virtual_function()
            .field("x", Access::Public, Scalar::I32);
        let ptr = core::mem::size_of::<usize>();
        let offsets = c.field_offsets();
        assert_eq!(offsets[0].offset, ptr);
        assert_eq!(c.layout().size, round_up(ptr + 4, ptr));
    }

    #[test]
    fn base_members_come_first() {
        let base = TypeDescriptor::new("Base").field("id", Access::Public, Scalar::U64);
        let derived = TypeDescriptor::new("Derived")
            .base(base)
            .field("tag", Access::Public, Scalar::U8);
        let offsets = derived.field_offsets();
        assert_eq!(offsets[0].class, "Base");
        assert_eq!(offsets[0].offset, 0);
        assert_eq!(offsets[1].class, "Derived");
        assert_eq!(offsets[1].offset, 8);
        assert_eq!(derived.layout(), Layout { size: 16, align: 8 });
    }

    #[test]
    fn multi_class_members_are_packed_flat() {
        let base = TypeDescriptor::new("Base")
            .field("wide", Access::Public, Scalar::U64)
            .field("tag", Access::Public, Scalar::U8);
        let derived = TypeDescriptor::new("Derived")
            .base(base)
            .field("extra", Access::Public, Scalar::U8);
        assert!(!derived.is_standard_layout());

        let offsets: Vec<_> = derived.field_offsets().iter().map(|f| f.offset).collect();
        assert_eq!(offsets, [0, 8, 9]);
        assert_eq!(derived.layout(), Layout { size: 16, align: 8 });
    }

    #[test]
    fn nested_records_and_arrays() {
        let b = TypeDescriptor::new("B")
            .field("a", Access::Public, a())
            .field("z", Access::Public, Scalar::I32);
        assert_eq!(b.layout(), Layout { size: 24, align: 8 });

        let buf = TypeDescriptor::new("Buf")
            .field("bytes", Access::Public, FieldType::array(Scalar::U8.into(), 5))
            .field("n", Access::Public, Scalar::U16);
        assert_eq!(buf.layout(), Layout { size: 8, align: 2 });
        assert_eq!(buf.field_offsets()[1].offset, 6);
    }
}

//! Structural type descriptions.
//!
//! A [`TypeDescriptor`] records exactly the facts the classifier needs: the
//! non-static data members with their access level, the base classes, which
//! special member functions are user-provided, and whether virtual dispatch is
//! involved. Nothing else about a type is modelled.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Access control of a non-static data member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    Public,
    Protected,
    Private,
}

/// Fixed-size primitive member types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scalar {
    Bool,
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    F32,
    U64,
    I64,
    F64,
    U128,
    I128,
    /// Raw pointer, `usize`-sized.
    Pointer,
}

impl Scalar {
    pub const ALL: [Scalar; 14] = [
        Scalar::Bool,
        Scalar::U8,
        Scalar::I8,
        Scalar::U16,
        Scalar::I16,
        Scalar::U32,
        Scalar::I32,
        Scalar::F32,
        Scalar::U64,
        Scalar::I64,
        Scalar::F64,
        Scalar::U128,
        Scalar::I128,
        Scalar::Pointer,
    ];

    /// Size in bytes.
    pub const fn size(self) -> usize {
        match self {
            Scalar::Bool | Scalar::U8 | Scalar::I8 => 1,
            Scalar::U16 | Scalar::I16 => 2,
            Scalar::U32 | Scalar::I32 | Scalar::F32 => 4,
            Scalar::U64 | Scalar::I64 | Scalar::F64 => 8,
            Scalar::U128 | Scalar::I128 => 16,
            Scalar::Pointer => core::mem::size_of::<usize>(),
        }
    }

    /// Natural alignment in bytes.
    pub const fn align(self) -> usize {
        use core::mem::align_of;
        match self {
            Scalar::Bool | Scalar::U8 | Scalar::I8 => 1,
            Scalar::U16 | Scalar::I16 => align_of::<u16>(),
            Scalar::U32 | Scalar::I32 => align_of::<u32>(),
            Scalar::F32 => align_of::<f32>(),
            Scalar::U64 | Scalar::I64 => align_of::<u64>(),
            Scalar::F64 => align_of::<f64>(),
            Scalar::U128 => align_of::<u128>(),
            Scalar::I128 => align_of::<i128>(),
            Scalar::Pointer => align_of::<usize>(),
        }
    }

    /// Maps a Rust primitive name (`"u32"`, `"f64"`, ...) to a scalar.
    pub fn from_rust_name(ident: &str) -> Option<Self> {
        match ident {
            "bool" => Some(Scalar::Bool),
            "u8" => Some(Scalar::U8),
            "i8" => Some(Scalar::I8),
            "u16" => Some(Scalar::U16),
            "i16" => Some(Scalar::I16),
            "u32" => Some(Scalar::U32),
            "i32" => Some(Scalar::I32),
            "f32" => Some(Scalar::F32),
            "u64" => Some(Scalar::U64),
            "i64" => Some(Scalar::I64),
            "f64" => Some(Scalar::F64),
            "u128" => Some(Scalar::U128),
            "i128" => Some(Scalar::I128),
            "usize" | "isize" => Some(Scalar::Pointer),
            _ => None,
        }
    }
}

/// The type of a data member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Scalar(Scalar),
    /// A nested record (composition).
    Record(Box<TypeDescriptor>),
    /// A fixed-length array of elements.
    Array(Box<FieldType>, usize),
}

impl FieldType {
    pub fn record(descriptor: TypeDescriptor) -> Self {
        FieldType::Record(Box::new(descriptor))
    }

    pub fn array(elem: FieldType, len: usize) -> Self {
        FieldType::Array(Box::new(elem), len)
    }

    /// The record this member ultimately stores, looking through arrays.
    pub fn element_record(&self) -> Option<&TypeDescriptor> {
        match self {
            FieldType::Scalar(_) => None,
            FieldType::Record(desc) => Some(desc),
            FieldType::Array(elem, _) => elem.element_record(),
        }
    }
}

impl From<Scalar> for FieldType {
    fn from(s: Scalar) -> Self {
        FieldType::Scalar(s)
    }
}

impl From<TypeDescriptor> for FieldType {
    fn from(desc: TypeDescriptor) -> Self {
        FieldType::record(desc)
    }
}

/// A non-static data member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub access: Access,
    pub ty: FieldType,
}

/// Set of user-provided special member functions.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SpecialMembers(u8);

impl SpecialMembers {
    pub const NONE: Self = Self(0);
    pub const DEFAULT_CONSTRUCTOR: Self = Self(1 << 0);
    pub const COPY_CONSTRUCTOR: Self = Self(1 << 1);
    pub const MOVE_CONSTRUCTOR: Self = Self(1 << 2);
    pub const COPY_ASSIGNMENT: Self = Self(1 << 3);
    pub const MOVE_ASSIGNMENT: Self = Self(1 << 4);
    pub const DESTRUCTOR: Self = Self(1 << 5);

    /// Copy, move and destroy: what a resource-owning type provides.
    pub const RESOURCE_MANAGEMENT: Self = Self(
        Self::COPY_CONSTRUCTOR.0
            | Self::MOVE_CONSTRUCTOR.0
            | Self::COPY_ASSIGNMENT.0
            | Self::MOVE_ASSIGNMENT.0
            | Self::DESTRUCTOR.0,
    );

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for SpecialMembers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for SpecialMembers {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for SpecialMembers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(SpecialMembers, &str); 6] = [
            (SpecialMembers::DEFAULT_CONSTRUCTOR, "DEFAULT_CONSTRUCTOR"),
            (SpecialMembers::COPY_CONSTRUCTOR, "COPY_CONSTRUCTOR"),
            (SpecialMembers::MOVE_CONSTRUCTOR, "MOVE_CONSTRUCTOR"),
            (SpecialMembers::COPY_ASSIGNMENT, "COPY_ASSIGNMENT"),
            (SpecialMembers::MOVE_ASSIGNMENT, "MOVE_ASSIGNMENT"),
            (SpecialMembers::DESTRUCTOR, "DESTRUCTOR"),
        ];
        let mut set = f.debug_set();
        for (flag, name) in NAMES {
            if self.contains(flag) {
                set.entry(&format_args!("{name}"));
            }
        }
        set.finish()
    }
}

/// Structural description of a record type.
///
/// # Example
///
/// ```
/// use pod_traits::{Access, Scalar, TypeDescriptor};
///
/// let d = TypeDescriptor::new("D")
///     .field("x", Access::Public, Scalar::I32)
///     .field("y", Access::Private, Scalar::I32);
///
/// assert!(d.is_trivial());
/// assert!(!d.is_standard_layout());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub name: String,
    pub fields: Vec<Field>,
    pub bases: Vec<TypeDescriptor>,
    pub special_members: SpecialMembers,
    pub has_virtual_functions: bool,
    pub has_virtual_bases: bool,
}

impl TypeDescriptor {
    /// An empty record with implicit special members.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            bases: Vec::new(),
            special_members: SpecialMembers::NONE,
            has_virtual_functions: false,
            has_virtual_bases: false,
        }
    }

    /// A growable buffer that owns its storage, shaped like a `String`.
    pub fn owned_buffer(name: impl Into<String>) -> Self {
        Self::new(name)
            .field("ptr", Access::Private, Scalar::Pointer)
            .field("len", Access::Private, Scalar::Pointer)
            .field("capacity", Access::Private, Scalar::Pointer)
            .user_provided(SpecialMembers::RESOURCE_MANAGEMENT)
    }

    pub fn field(
        mut self,
        name: impl Into<String>,
        access: Access,
        ty: impl Into<FieldType>,
    ) -> Self {
        self.fields.push(Field {
            name: name.into(),
            access,
            ty: ty.into(),
        });
        self
    }

    /// Adds a non-virtual base class.
    pub fn base(mut self, base: TypeDescriptor) -> Self {
        self.bases.push(base);
        self
    }

    /// Adds a base class inherited virtually.
    pub fn virtual_base(mut self, base: TypeDescriptor) -> Self {
        self.has_virtual_bases = true;
        self.bases.push(base);
        self
    }

    /// Declares at least one virtual member function.
    pub fn virtual_function(mut self) -> Self {
        self.has_virtual_functions = true;
        self
    }

    pub fn user_provided(mut self, members: SpecialMembers) -> Self {
        self.special_members |= members;
        self
    }

    pub fn has_data_members(&self) -> bool {
        !self.fields.is_empty()
    }

    /// True if this type or any base declares virtual functions or bases.
    pub fn is_polymorphic(&self) -> bool {
        self.has_virtual_functions
            || self.has_virtual_bases
            || self.bases.iter().any(TypeDescriptor::is_polymorphic)
    }

    /// Every class in the hierarchy, this one first, bases depth-first.
    pub fn hierarchy(&self) -> Vec<&TypeDescriptor> {
        let mut out = vec![self];
        for base in &self.bases {
            out.extend(base.hierarchy());
        }
        out
    }

    pub fn field_named(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

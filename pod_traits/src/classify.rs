//! Trivial / standard-layout / POD classification.

use std::fmt;

use crate::descriptor::{Access, SpecialMembers, TypeDescriptor};

/// The three properties decided for a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Classification {
    pub is_trivial: bool,
    pub is_standard_layout: bool,
    /// `is_trivial && is_standard_layout`.
    pub is_pod: bool,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn yes_no(b: bool) -> &'static str {
            if b { "yes" } else { "no" }
        }
        write!(
            f,
            "trivial: {}, standard-layout: {}, POD: {}",
            yes_no(self.is_trivial),
            yes_no(self.is_standard_layout),
            yes_no(self.is_pod)
        )
    }
}

/// A structural fact that disqualifies a type from one or both properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    UserProvidedSpecialMembers {
        class: String,
        members: SpecialMembers,
    },
    VirtualFunctions {
        class: String,
    },
    VirtualBases {
        class: String,
    },
    MixedAccess {
        class: String,
    },
    DataInMultipleClasses {
        classes: Vec<String>,
    },
    NonTrivialMember {
        class: String,
        field: String,
    },
    NonStandardLayoutMember {
        class: String,
        field: String,
    },
}

impl Violation {
    pub fn breaks_triviality(&self) -> bool {
        matches!(
            self,
            Violation::UserProvidedSpecialMembers { .. }
                | Violation::VirtualFunctions { .. }
                | Violation::VirtualBases { .. }
                | Violation::NonTrivialMember { .. }
        )
    }

    pub fn breaks_standard_layout(&self) -> bool {
        matches!(
            self,
            Violation::VirtualFunctions { .. }
                | Violation::VirtualBases { .. }
                | Violation::MixedAccess { .. }
                | Violation::DataInMultipleClasses { .. }
                | Violation::NonStandardLayoutMember { .. }
        )
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::UserProvidedSpecialMembers { class, members } => {
                write!(f, "`{class}` has user-provided special members {members:?}")
            }
            Violation::VirtualFunctions { class } => {
                write!(f, "`{class}` declares virtual functions")
            }
            Violation::VirtualBases { class } => write!(f, "`{class}` has virtual bases"),
            Violation::MixedAccess { class } => {
                write!(f, "`{class}` mixes access control among its data members")
            }
            Violation::DataInMultipleClasses { classes } => {
                write!(f, "data members are declared in {}", classes.join(", "))
            }
            Violation::NonTrivialMember { class, field } => {
                write!(f, "member `{class}::{field}` is not trivial")
            }
            Violation::NonStandardLayoutMember { class, field } => {
                write!(f, "member `{class}::{field}` is not standard-layout")
            }
        }
    }
}

/// Everything that keeps `desc` from being trivial or standard-layout.
///
/// An empty result means the type is POD.
pub fn violations(desc: &TypeDescriptor) -> Vec<Violation> {
    let mut out = Vec::new();
    let hierarchy = desc.hierarchy();

    for class in &hierarchy {
        if !class.special_members.is_empty() {
            out.push(Violation::UserProvidedSpecialMembers {
                class: class.name.clone(),
                members: class.special_members,
            });
        }
        if class.has_virtual_functions {
            out.push(Violation::VirtualFunctions {
                class: class.name.clone(),
            });
        }
        if class.has_virtual_bases {
            out.push(Violation::VirtualBases {
                class: class.name.clone(),
            });
        }
    }

    let data_classes: Vec<&TypeDescriptor> = hierarchy
        .iter()
        .copied()
        .filter(|c| c.has_data_members())
        .collect();

    match data_classes.as_slice() {
        [] => {}
        [holder] => {
            if !has_uniform_access(holder) {
                out.push(Violation::MixedAccess {
                    class: holder.name.clone(),
                });
            }
        }
        many => {
            // Visibility is judged across the whole chain as well.
            let mut accesses = many.iter().flat_map(|c| c.fields.iter().map(|f| f.access));
            if let Some(first) = accesses.next() {
                if accesses.any(|a| a != first) {
                    out.push(Violation::MixedAccess {
                        class: desc.name.clone(),
                    });
                }
            }
            out.push(Violation::DataInMultipleClasses {
                classes: many.iter().map(|c| c.name.clone()).collect(),
            });
        }
    }

    for class in &hierarchy {
        for field in &class.fields {
            let Some(record) = field.ty.element_record() else {
                continue;
            };
            let nested = classify(record);
            if !nested.is_trivial {
                out.push(Violation::NonTrivialMember {
                    class: class.name.clone(),
                    field: field.name.clone(),
                });
            }
            if !nested.is_standard_layout {
                out.push(Violation::NonStandardLayoutMember {
                    class: class.name.clone(),
                    field: field.name.clone(),
                });
            }
        }
    }

    out
}

/// Classifies `desc`. Never fails.
///
/// ```
/// use pod_traits::{classify, Access, Scalar, TypeDescriptor};
///
/// let a = TypeDescriptor::new("A")
///     .field("x", Access::Public, Scalar::I32)
///     .field("y", Access::Public, Scalar::F64);
/// assert!(classify(&a).is_pod);
///
/// let c = TypeDescriptor::new("C")
///     .virtual_function()
///     .field("x", Access::Public, Scalar::I32);
/// let c = classify(&c);
/// assert!(!c.is_trivial && !c.is_standard_layout);
/// ```
pub fn classify(desc: &TypeDescriptor) -> Classification {
    let violations = violations(desc);
    let is_trivial = !violations.iter().any(Violation::breaks_triviality);
    let is_standard_layout = !violations.iter().any(Violation::breaks_standard_layout);
    Classification {
        is_trivial,
        is_standard_layout,
        is_pod: is_trivial && is_standard_layout,
    }
}

fn has_uniform_access(desc: &TypeDescriptor) -> bool {
    let mut accesses = desc.fields.iter().map(|f| f.access);
    match accesses.next() {
        Some(first) => accesses.all(|a| a == first),
        None => true,
    }
}

impl TypeDescriptor {
    pub fn classify(&self) -> Classification {
        classify(self)
    }

    pub fn is_trivial(&self) -> bool {
        classify(self).is_trivial
    }

    pub fn is_standard_layout(&self) -> bool {
        classify(self).is_standard_layout
    }

    pub fn is_pod(&self) -> bool {
        classify(self).is_pod
    }

    /// True if every data member in the hierarchy shares `access`.
    pub fn all_fields(&self, access: Access) -> bool {
        self.hierarchy()
            .iter()
            .flat_map(|c| c.fields.iter())
            .all(|f| f.access == access)
    }
}

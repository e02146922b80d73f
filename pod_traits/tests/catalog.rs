use pod_traits::{Access, Describe, FieldType, Layout, Scalar, TypeDescriptor, Violation, catalog, classify, violations};

#[test]
fn exercise_types_classify_as_expected() {
    let [a, b, c, d] = catalog::all().map(|t| classify(&t));

    assert!(a.is_pod);
    assert!(b.is_pod);
    assert!(!c.is_pod);
    assert!(!d.is_pod);

    assert!(a.is_trivial && a.is_standard_layout);
    assert!(b.is_trivial && b.is_standard_layout);
    assert!(!c.is_trivial);
    assert!(!d.is_standard_layout);
}

#[test]
fn explanations_name_the_cause() {
    assert_eq!(
        violations(&catalog::c()),
        vec![Violation::VirtualFunctions { class: "C".into() }]
    );
    assert_eq!(
        violations(&catalog::d()),
        vec![Violation::MixedAccess { class: "D".into() }]
    );
    assert!(violations(&catalog::b()).is_empty());
}

#[repr(C)]
#[derive(Describe)]
pub struct A {
    pub x: i32,
    pub y: f64,
}

#[repr(C)]
#[derive(Describe)]
pub struct B {
    pub a: A,
    pub z: i32,
}

#[repr(C)]
#[derive(Describe)]
pub struct D {
    pub x: i32,
    y: i32,
}

#[derive(Describe)]
pub struct Grid {
    pub cells: [[u8; 3]; 3],
    pub origin: A,
}

#[derive(Describe)]
#[describe(owns_resources)]
pub struct FileHandle {
    pub fd: i32,
}

#[derive(Describe)]
pub struct Named {
    pub id: u32,
    pub label: String,
}

#[derive(Describe)]
pub struct Unit;

#[test]
fn derived_descriptors_match_catalog() {
    assert_eq!(A::describe(), catalog::a());
    assert_eq!(B::describe(), catalog::b());
    assert_eq!(D::describe(), catalog::d());
    let _ = D { x: 0, y: 0 }.y;
}

#[test]
fn derived_layouts_match_the_compiler() {
    assert_eq!(A::describe().layout(), Layout::of::<A>());
    assert_eq!(B::describe().layout(), Layout::of::<B>());
    assert_eq!(D::describe().layout(), Layout::of::<D>());
}

#[test]
fn derived_arrays_and_owners() {
    let grid = Grid::describe();
    assert!(grid.is_pod());
    assert_eq!(grid.layout().size, 9 + 7 + 16);

    assert!(!FileHandle::describe().is_trivial());
    assert!(FileHandle::describe().is_standard_layout());

    let named = Named::describe();
    assert!(!named.is_trivial());
    assert!(!named.is_pod());

    assert!(Unit::describe().is_pod());
    assert_eq!(
        Unit::describe(),
        TypeDescriptor::new("Unit")
    );
}

#[test]
fn hand_built_equals_derived_field_by_field() {
    let expected = TypeDescriptor::new("FileHandle")
        .field("fd", Access::Public, Scalar::I32)
        .user_provided(pod_traits::SpecialMembers::RESOURCE_MANAGEMENT);
    assert_eq!(FileHandle::describe(), expected);
}

#[derive(Describe)]
pub struct Wrap<T> {
    pub v: T,
}

#[test]
fn generic_structs_describe_their_parameter() {
    let plain = Wrap::<A>::describe();
    assert!(plain.is_pod());
    assert_eq!(plain.layout(), Layout::of::<A>());

    let owning = Wrap::<String>::describe();
    assert!(!owning.is_trivial());
    assert!(!owning.is_pod());
}

#[derive(Describe)]
pub struct EveryScalar {
    pub bool: bool,
    pub u8: u8,
    pub i8: i8,
    pub u16: u16,
    pub i16: i16,
    pub u32: u32,
    pub i32: i32,
    pub f32: f32,
    pub u64: u64,
    pub i64: i64,
    pub f64: f64,
    pub u128: u128,
    pub i128: i128,
    pub usize: usize,
    pub isize: isize,
}

#[test]
fn derive_and_name_table_agree() {
    let desc = EveryScalar::describe();
    assert_eq!(desc.fields.len(), 15);
    for field in &desc.fields {
        let scalar = Scalar::from_rust_name(&field.name)
            .unwrap_or_else(|| panic!("no scalar named {}", field.name));
        assert_eq!(field.ty, FieldType::from(scalar), "field {}", field.name);
    }
    for scalar in Scalar::ALL {
        assert!(
            desc.fields.iter().any(|f| f.ty == FieldType::from(scalar)),
            "{scalar:?} has no primitive"
        );
    }
}

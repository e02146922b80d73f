//! The record shapes used throughout the examples.
//!
//! | type | shape                             | trivial | standard-layout | POD |
//! |------|-----------------------------------|---------|-----------------|-----|
//! | `A`  | `{ x: i32, y: f64 }`              | yes     | yes             | yes |
//! | `B`  | `{ a: A, z: i32 }`                | yes     | yes             | yes |
//! | `C`  | virtual `foo()`, `{ x: i32 }`     | no      | no              | no  |
//! | `D`  | `{ pub x: i32, private y: i32 }`  | yes     | no              | no  |

use crate::descriptor::{Access, Scalar, TypeDescriptor};

pub fn a() -> TypeDescriptor {
    TypeDescriptor::new("A")
        .field("x", Access::Public, Scalar::I32)
        .field("y", Access::Public, Scalar::F64)
}

pub fn b() -> TypeDescriptor {
    TypeDescriptor::new("B")
        .field("a", Access::Public, a())
        .field("z", Access::Public, Scalar::I32)
}

pub fn c() -> TypeDescriptor {
    TypeDescriptor::new("C")
        .virtual_function()
        .field("x", Access::Public, Scalar::I32)
}

pub fn d() -> TypeDescriptor {
    TypeDescriptor::new("D")
        .field("x", Access::Public, Scalar::I32)
        .field("y", Access::Private, Scalar::I32)
}

/// All four, in order.
pub fn all() -> [TypeDescriptor; 4] {
    [a(), b(), c(), d()]
}

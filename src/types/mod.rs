//! Type system module

pub mod type_system;

pub use type_system::{can_implicitly_convert, same_type, Type, TypeKind, TypeRef, TypeStore};

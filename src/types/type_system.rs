//! Type System for Typefill
//!
//! Built-in types, pointer types and the implicit conversion rules.
//! Types are shared through [`TypeRef`]; pointer types are interned in a
//! [`TypeStore`] so every `T*` built during one pass is a single instance.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Shared handle to a type
pub type TypeRef = Rc<Type>;

/// Kind of a type, with its payload
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Bool,
    SignedInteger(u32),
    /// Unsigned 8-bit
    Byte,
    String,
    Pointer(TypeRef),
}

/// A type: its kind plus the name shown in diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Type {
    name: String,
    kind: TypeKind,
}

impl Type {
    pub fn bool() -> Self {
        Self { name: "bool".to_string(), kind: TypeKind::Bool }
    }

    pub fn signed_integer(width: u32) -> Self {
        let name = match width {
            16 => "short".to_string(),
            32 => "int".to_string(),
            64 => "long".to_string(),
            _ => format!("i{}", width),
        };
        Self { name, kind: TypeKind::SignedInteger(width) }
    }

    pub fn byte() -> Self {
        Self { name: "byte".to_string(), kind: TypeKind::Byte }
    }

    pub fn string() -> Self {
        Self { name: "str".to_string(), kind: TypeKind::String }
    }

    /// Create a pointer type. Prefer [`TypeStore::pointer_to`], which interns.
    pub fn pointer(pointee: TypeRef) -> Self {
        Self {
            name: format!("{}*", pointee.name),
            kind: TypeKind::Pointer(pointee),
        }
    }

    /// Parse a type name such as `int`, `i8` or `byte**`
    pub fn parse(name: &str) -> std::result::Result<Self, String> {
        let name = name.trim();
        if let Some(inner) = name.strip_suffix('*') {
            return Ok(Self::pointer(Rc::new(Self::parse(inner)?)));
        }
        match name {
            "bool" => Ok(Self::bool()),
            "byte" => Ok(Self::byte()),
            "short" => Ok(Self::signed_integer(16)),
            "int" => Ok(Self::signed_integer(32)),
            "long" => Ok(Self::signed_integer(64)),
            "str" => Ok(Self::string()),
            other => match other.strip_prefix('i').and_then(|width| width.parse::<u32>().ok()) {
                Some(width) if width > 0 => Ok(Self::signed_integer(width)),
                _ => Err(format!("unknown type '{}'", other)),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl TryFrom<String> for Type {
    type Error = String;

    fn try_from(name: String) -> std::result::Result<Self, Self::Error> {
        Self::parse(&name)
    }
}

impl From<Type> for String {
    fn from(ty: Type) -> Self {
        ty.name
    }
}

/// Structural type equality; display names are not compared
pub fn same_type(a: &Type, b: &Type) -> bool {
    match (&a.kind, &b.kind) {
        (TypeKind::Pointer(x), TypeKind::Pointer(y)) => same_type(x, y),
        (x, y) => x == y,
    }
}

/// Whether a value of type `from` may be used where `to` is expected
pub fn can_implicitly_convert(from: &Type, to: &Type) -> bool {
    if same_type(from, to) {
        return true;
    }
    match (&from.kind, &to.kind) {
        (TypeKind::SignedInteger(a), TypeKind::SignedInteger(b)) => a < b,
        (TypeKind::Byte, TypeKind::SignedInteger(b)) => *b > 8,
        _ => false,
    }
}

/// Owns the built-in types and every pointer type constructed during a pass
#[derive(Debug)]
pub struct TypeStore {
    bool_type: TypeRef,
    int_type: TypeRef,
    byte_type: TypeRef,
    string_type: TypeRef,
    pointers: HashMap<TypeRef, TypeRef>,
}

impl TypeStore {
    pub fn new() -> Self {
        Self {
            bool_type: Rc::new(Type::bool()),
            int_type: Rc::new(Type::signed_integer(32)),
            byte_type: Rc::new(Type::byte()),
            string_type: Rc::new(Type::string()),
            pointers: HashMap::new(),
        }
    }

    pub fn bool(&self) -> TypeRef {
        Rc::clone(&self.bool_type)
    }

    /// The default signed integer (32 bits)
    pub fn int(&self) -> TypeRef {
        Rc::clone(&self.int_type)
    }

    pub fn byte(&self) -> TypeRef {
        Rc::clone(&self.byte_type)
    }

    pub fn string(&self) -> TypeRef {
        Rc::clone(&self.string_type)
    }

    /// Pointer to `pointee`, shared with every earlier request for the same shape
    pub fn pointer_to(&mut self, pointee: &TypeRef) -> TypeRef {
        if let Some(ptr) = self.pointers.get(pointee) {
            return Rc::clone(ptr);
        }
        let ptr = Rc::new(Type::pointer(Rc::clone(pointee)));
        self.pointers.insert(Rc::clone(pointee), Rc::clone(&ptr));
        ptr
    }

    /// Number of distinct pointer types built so far
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }
}

impl Default for TypeStore {
    fn default() -> Self {
        Self::new()
    }
}

//! Symbol tables: the global function registry and the local scope of the
//! function body being checked.

use std::collections::HashMap;

use crate::frontend::ast::{FunctionSignature, Param};
use crate::types::{same_type, Type, TypeRef};
use crate::utils::{Error, Result};

// ==================== Function Table ====================

/// Registered function signatures, in registration order.
/// Names are unique across declarations and definitions.
#[derive(Debug, Default)]
pub struct FunctionTable {
    signatures: Vec<FunctionSignature>,
    by_name: HashMap<String, usize>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a signature. `int_type` is the built-in type `main` must return.
    pub fn register(&mut self, signature: FunctionSignature, int_type: &Type) -> Result<()> {
        if self.by_name.contains_key(&signature.name) {
            return Err(Error::DuplicateFunction {
                name: signature.name,
                location: signature.location,
            });
        }

        if signature.name == "main" {
            let returns_int = signature
                .return_type
                .as_ref()
                .is_some_and(|ret| same_type(ret, int_type));
            if !returns_int {
                return Err(Error::InvalidMainSignature {
                    location: signature.location,
                });
            }
        }

        self.by_name.insert(signature.name.clone(), self.signatures.len());
        self.signatures.push(signature);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&FunctionSignature> {
        self.by_name.get(name).map(|&index| &self.signatures[index])
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }
}

// ==================== Local Scope ====================

/// A variable visible inside a function body
#[derive(Debug, Clone)]
pub struct LocalVariable {
    pub name: String,
    pub ty: TypeRef,
}

/// Locals of the function currently being checked.
/// Lookup returns the first binding with a name, in insertion order.
#[derive(Debug, Default)]
pub struct LocalScope {
    vars: Vec<LocalVariable>,
}

impl LocalScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the scope with exactly `params`, in order
    pub fn enter(&mut self, params: &[Param]) {
        self.vars.clear();
        for param in params {
            if self.lookup(&param.name).is_some() {
                log::warn!(
                    "parameter '{}' is declared more than once; the first declaration is used",
                    param.name
                );
            }
            self.vars.push(LocalVariable {
                name: param.name.clone(),
                ty: TypeRef::clone(&param.ty),
            });
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&LocalVariable> {
        self.vars.iter().find(|var| var.name == name)
    }

    pub fn exit(&mut self) {
        self.vars.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Location;
    use pretty_assertions::assert_eq;
    use std::rc::Rc;

    fn signature(name: &str, ret: Option<&str>) -> FunctionSignature {
        FunctionSignature {
            name: name.to_string(),
            params: vec![],
            return_type: ret.map(|r| Rc::new(Type::parse(r).unwrap())),
            location: Location::new("test.src", 1, 1),
        }
    }

    fn param(name: &str, ty: &str) -> Param {
        Param { name: name.to_string(), ty: Rc::new(Type::parse(ty).unwrap()) }
    }

    #[test]
    fn test_register_and_lookup() {
        let int = Type::signed_integer(32);
        let mut table = FunctionTable::new();
        table.register(signature("putchar", Some("int")), &int).unwrap();
        table.register(signature("main", Some("int")), &int).unwrap();

        assert_eq!(table.len(), 2);
        assert!(table.lookup("putchar").is_some());
        assert!(table.lookup("puts").is_none());
    }

    #[test]
    fn test_duplicate_function() {
        let int = Type::signed_integer(32);
        let mut table = FunctionTable::new();
        table.register(signature("f", None), &int).unwrap();
        let err = table.register(signature("f", Some("int")), &int).unwrap_err();
        assert!(matches!(err, Error::DuplicateFunction { ref name, .. } if name == "f"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_main_must_return_int() {
        let int = Type::signed_integer(32);
        for ret in [None, Some("bool"), Some("long")] {
            let mut table = FunctionTable::new();
            let err = table.register(signature("main", ret), &int).unwrap_err();
            assert!(matches!(err, Error::InvalidMainSignature { .. }));
            assert_eq!(table.len(), 0);
        }
    }

    #[test]
    fn test_scope_first_binding_wins() {
        let mut scope = LocalScope::new();
        scope.enter(&[param("x", "int"), param("x", "bool")]);
        assert_eq!(scope.lookup("x").unwrap().ty.name(), "int");

        scope.exit();
        assert!(scope.lookup("x").is_none());
    }

    #[test]
    fn test_enter_replaces_previous_scope() {
        let mut scope = LocalScope::new();
        scope.enter(&[param("a", "int")]);
        scope.enter(&[param("b", "str")]);
        assert!(scope.lookup("a").is_none());
        assert_eq!(scope.lookup("b").unwrap().ty.name(), "str");
    }
}

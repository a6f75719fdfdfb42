//! Call resolution: arity and argument type checks against a registered
//! signature.

use super::SemanticAnalyzer;
use crate::frontend::ast::{Call, FunctionSignature};
use crate::types::{can_implicitly_convert, TypeRef};
use crate::utils::{Error, Location, Result};

/// `name(a: int, b: str)`; the return type is not included
pub(super) fn describe_signature(signature: &FunctionSignature) -> String {
    let params: Vec<String> = signature
        .params
        .iter()
        .map(|p| format!("{}: {}", p.name, p.ty.name()))
        .collect();
    format!("{}({})", signature.name, params.join(", "))
}

impl SemanticAnalyzer {
    /// Check a call and type its arguments.
    /// Returns the callee's return type, or `None` if it returns no value.
    pub(super) fn resolve_call(
        &mut self,
        call: &mut Call,
        location: &Location,
    ) -> Result<Option<TypeRef>> {
        let signature = self
            .functions
            .lookup(&call.name)
            .cloned()
            .ok_or_else(|| Error::UnknownFunction {
                name: call.name.clone(),
                location: location.clone(),
            })?;

        // Arguments are left untyped when the count is wrong
        if call.args.len() != signature.params.len() {
            return Err(Error::ArgumentCountMismatch {
                signature: describe_signature(&signature),
                expected: signature.params.len(),
                got: call.args.len(),
                location: location.clone(),
            });
        }

        let mut all_match = true;
        let mut got = Vec::with_capacity(call.args.len());
        for (arg, param) in call.args.iter_mut().zip(&signature.params) {
            let ty = self.resolve_expr(arg)?;
            if !can_implicitly_convert(&ty, &param.ty) {
                all_match = false;
            }
            got.push(ty.name().to_string());
        }

        if !all_match {
            return Err(Error::ArgumentTypeMismatch {
                signature: describe_signature(&signature),
                got: got.join(", "),
                location: location.clone(),
            });
        }

        Ok(signature.return_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::ast::Param;
    use crate::types::Type;
    use pretty_assertions::assert_eq;
    use std::rc::Rc;

    #[test]
    fn test_describe_signature() {
        let param = |name: &str, ty: &str| Param {
            name: name.to_string(),
            ty: Rc::new(Type::parse(ty).unwrap()),
        };
        let signature = FunctionSignature {
            name: "write".to_string(),
            params: vec![param("fd", "int"), param("buf", "byte*"), param("len", "long")],
            return_type: Some(Rc::new(Type::signed_integer(64))),
            location: Location::unknown(),
        };
        assert_eq!(describe_signature(&signature), "write(fd: int, buf: byte*, len: long)");

        let empty = FunctionSignature { params: vec![], ..signature };
        assert_eq!(describe_signature(&empty), "write()");
    }
}

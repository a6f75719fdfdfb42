//! Expression typing

use std::rc::Rc;

use super::SemanticAnalyzer;
use crate::frontend::ast::{Expr, ExprKind};
use crate::types::{TypeKind, TypeRef};
use crate::utils::{Error, Location, Result};

impl SemanticAnalyzer {
    /// Assign a type to `expr` (and everything under it) and return it
    pub(super) fn resolve_expr(&mut self, expr: &mut Expr) -> Result<TypeRef> {
        let ty = match &mut expr.kind {
            ExprKind::True | ExprKind::False => self.types.bool(),
            ExprKind::Int(_) => self.types.int(),
            ExprKind::Char(_) => self.types.byte(),
            ExprKind::String(_) => self.types.string(),

            ExprKind::GetVariable(name) => self.local_type(name, &expr.location)?,

            ExprKind::AddressOfVariable(name) => {
                let pointee = self.local_type(name, &expr.location)?;
                self.types.pointer_to(&pointee)
            }

            ExprKind::Call(call) => self
                .resolve_call(call, &expr.location)?
                .ok_or_else(|| Error::VoidCallUsedAsValue {
                    name: call.name.clone(),
                    location: expr.location.clone(),
                })?,

            ExprKind::Dereference(inner) => {
                let pointer = self.resolve_expr(inner)?;
                match pointer.kind() {
                    TypeKind::Pointer(pointee) => Rc::clone(pointee),
                    _ => {
                        return Err(Error::NotAPointer {
                            got: pointer.name().to_string(),
                            location: expr.location.clone(),
                        })
                    }
                }
            }
        };

        log::trace!("{}: expression has type {}", expr.location, ty);
        self.stats.typed_expressions += 1;
        expr.ty = Some(Rc::clone(&ty));
        Ok(ty)
    }

    fn local_type(&self, name: &str, location: &Location) -> Result<TypeRef> {
        self.locals
            .lookup(name)
            .map(|var| Rc::clone(&var.ty))
            .ok_or_else(|| Error::UndefinedVariable {
                name: name.to_string(),
                location: location.clone(),
            })
    }
}

//! Statement rules

use super::SemanticAnalyzer;
use crate::frontend::ast::{Body, FunctionSignature, Stmt};
use crate::types::{can_implicitly_convert, TypeKind};
use crate::utils::{Error, Result};

impl SemanticAnalyzer {
    /// Check every statement of a body belonging to `function`
    pub(super) fn check_body(&mut self, body: &mut Body, function: &FunctionSignature) -> Result<()> {
        for stmt in &mut body.stmts {
            self.check_stmt(stmt, function)?;
        }
        Ok(())
    }

    fn check_stmt(&mut self, stmt: &mut Stmt, function: &FunctionSignature) -> Result<()> {
        match stmt {
            Stmt::Call { call, location } => {
                self.resolve_call(call, location)?;
            }

            Stmt::If { condition, body, .. } => {
                let ty = self.resolve_expr(condition)?;
                if !matches!(ty.kind(), TypeKind::Bool) {
                    return Err(Error::ConditionNotBoolean {
                        got: ty.name().to_string(),
                        location: condition.location.clone(),
                    });
                }
                self.check_body(body, function)?;
            }

            Stmt::ReturnValue { value, location } => {
                let Some(expected) = &function.return_type else {
                    return Err(Error::VoidFunctionReturnsValue {
                        function: function.name.clone(),
                        location: location.clone(),
                    });
                };
                let got = self.resolve_expr(value)?;
                if !can_implicitly_convert(&got, expected) {
                    return Err(Error::ReturnTypeMismatch {
                        function: function.name.clone(),
                        expected: expected.name().to_string(),
                        got: got.name().to_string(),
                        location: location.clone(),
                    });
                }
            }

            Stmt::Return { location } => {
                if let Some(expected) = &function.return_type {
                    return Err(Error::MissingReturnValue {
                        function: function.name.clone(),
                        expected: expected.name().to_string(),
                        location: location.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

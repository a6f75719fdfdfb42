//! Abstract Syntax Tree definitions for Typefill
//!
//! The tree arrives already parsed. The semantic pass fills in the `ty`
//! field of every [`Expr`] it checks; nothing else is modified.
#![allow(dead_code)]

use serde::{Deserialize, Serialize};

use crate::types::TypeRef;
use crate::utils::Location;

/// Top-level node, consumed in source order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Toplevel {
    /// Function declared without a body (implemented elsewhere)
    Declare(FunctionSignature),
    /// Function definition
    Define {
        signature: FunctionSignature,
        body: Body,
    },
    /// Terminator; always the last node
    EndOfFile {
        #[serde(default)]
        location: Location,
    },
}

impl Toplevel {
    pub fn location(&self) -> &Location {
        match self {
            Toplevel::Declare(signature) => &signature.location,
            Toplevel::Define { signature, .. } => &signature.location,
            Toplevel::EndOfFile { location } => location,
        }
    }
}

/// Function signature
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionSignature {
    pub name: String,
    #[serde(default)]
    pub params: Vec<Param>,
    /// `None` means the function returns no value
    #[serde(default)]
    pub return_type: Option<TypeRef>,
    #[serde(default)]
    pub location: Location,
}

/// Function parameter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    pub ty: TypeRef,
}

/// Statements of a function or `if` body, in source order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Body {
    pub stmts: Vec<Stmt>,
}

/// Statement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Stmt {
    /// Call whose result (if any) is discarded
    Call {
        call: Call,
        #[serde(default)]
        location: Location,
    },
    /// if cond { body }
    If {
        condition: Expr,
        body: Body,
        #[serde(default)]
        location: Location,
    },
    /// return expr
    ReturnValue {
        value: Expr,
        #[serde(default)]
        location: Location,
    },
    /// return
    Return {
        #[serde(default)]
        location: Location,
    },
}

/// Function call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Call {
    pub name: String,
    #[serde(default)]
    pub args: Vec<Expr>,
}

/// Expression
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expr {
    pub kind: ExprKind,
    #[serde(default)]
    pub location: Location,
    /// Filled in by the semantic pass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeRef>,
}

impl Expr {
    pub fn new(kind: ExprKind, location: Location) -> Self {
        Self { kind, location, ty: None }
    }
}

/// Expression kinds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ExprKind {
    True,
    False,
    Int(i32),
    Char(u8),
    String(String),
    /// name
    GetVariable(String),
    /// &name
    AddressOfVariable(String),
    Call(Call),
    /// *expr
    Dereference(Box<Expr>),
}

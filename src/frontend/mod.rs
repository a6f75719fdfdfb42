//! Frontend module - AST, AST loading, Semantic Analysis

pub mod ast;
pub mod input;
pub mod semantic;

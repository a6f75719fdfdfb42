//! Semantic Analysis for Typefill
//!
//! Performs, in a single pass over the toplevel nodes in source order:
//! - Function registration (unique names, `main` returns int)
//! - Name resolution for calls and local variables
//! - Type assignment for every expression in a checked body
//! - Statement rules (boolean conditions, return types)
//!
//! A function is visible only to bodies checked after its signature was
//! registered. The first error stops the pass.

mod call;
mod expr;
mod stmt;
mod symbols;


pub use symbols::FunctionTable;

use symbols::LocalScope;

use crate::frontend::ast::{Body, FunctionSignature, Toplevel};
use crate::types::TypeStore;
use crate::utils::{Error, Result};

/// Counters describing one run of the pass
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisStats {
    pub declarations: usize,
    pub definitions: usize,
    pub typed_expressions: usize,
}

/// Semantic analyzer: all state of one pass over one AST
pub struct SemanticAnalyzer {
    types: TypeStore,
    functions: FunctionTable,
    locals: LocalScope,
    stats: AnalysisStats,
}

impl SemanticAnalyzer {
    pub fn new() -> Self {
        Self {
            types: TypeStore::new(),
            functions: FunctionTable::new(),
            locals: LocalScope::new(),
            stats: AnalysisStats::default(),
        }
    }

    pub fn types(&self) -> &TypeStore {
        &self.types
    }

    pub fn functions(&self) -> &FunctionTable {
        &self.functions
    }

    pub fn stats(&self) -> AnalysisStats {
        self.stats
    }

    /// Analyze a toplevel sequence terminated by `EndOfFile`, filling in
    /// expression types in place.
    pub fn analyze(&mut self, ast: &mut [Toplevel]) -> Result<()> {
        let mut nodes = ast.iter_mut();
        loop {
            let node = nodes.next().ok_or(Error::MissingEndOfFile)?;
            match node {
                Toplevel::Declare(signature) => {
                    self.register_function(signature)?;
                    self.stats.declarations += 1;
                }
                Toplevel::Define { signature, body } => {
                    self.register_function(signature)?;
                    self.check_function(signature, body)?;
                    self.stats.definitions += 1;
                }
                Toplevel::EndOfFile { .. } => {
                    if let Some(extra) = nodes.next() {
                        return Err(Error::NodeAfterEndOfFile {
                            location: extra.location().clone(),
                        });
                    }
                    return Ok(());
                }
            }
        }
    }

    fn register_function(&mut self, signature: &FunctionSignature) -> Result<()> {
        let int = self.types.int();
        self.functions.register(signature.clone(), &int)?;
        log::debug!(
            "registered function {} ({} parameters)",
            signature.name,
            signature.params.len()
        );
        Ok(())
    }

    fn check_function(&mut self, signature: &FunctionSignature, body: &mut Body) -> Result<()> {
        log::debug!(
            "checking body of {} ({} statements)",
            signature.name,
            body.stmts.len()
        );
        self.locals.enter(&signature.params);
        let result = self.check_body(body, signature);
        self.locals.exit();
        result
    }
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

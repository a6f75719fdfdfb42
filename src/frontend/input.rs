//! Loading a parsed program from its JSON form

use std::fs;
use std::path::Path;

use anyhow::{bail, Context};

use crate::frontend::ast::Toplevel;

/// Parse a toplevel sequence from JSON text
pub fn parse_ast(source: &str) -> anyhow::Result<Vec<Toplevel>> {
    let nodes: Vec<Toplevel> = serde_json::from_str(source).context("malformed AST")?;
    if nodes.is_empty() {
        bail!("AST is empty (expected at least an EndOfFile node)");
    }
    Ok(nodes)
}

/// Read and parse a toplevel sequence from a file
pub fn load_ast(path: &Path) -> anyhow::Result<Vec<Toplevel>> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("could not read {}", path.display()))?;
    parse_ast(&source).with_context(|| format!("in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::ast::{ExprKind, Stmt};
    use crate::frontend::semantic::SemanticAnalyzer;
    use pretty_assertions::assert_eq;

    const HELLO: &str = include_str!("../../demos/hello.json");

    #[test]
    fn test_parse_demo_program() {
        let nodes = parse_ast(HELLO).unwrap();
        assert_eq!(nodes.len(), 4);
        assert!(matches!(nodes.last(), Some(Toplevel::EndOfFile { .. })));
    }

    #[test]
    fn test_demo_program_type_checks() {
        let mut nodes = parse_ast(HELLO).unwrap();
        let mut analyzer = SemanticAnalyzer::new();
        analyzer.analyze(&mut nodes).unwrap();
        assert_eq!(analyzer.functions().len(), 3);

        let Toplevel::Define { body, .. } = &nodes[2] else {
            panic!("expected main to be defined third");
        };
        let Stmt::Call { call, .. } = &body.stmts[0] else {
            panic!("expected a call statement");
        };
        assert!(matches!(call.args[0].kind, ExprKind::String(_)));
        assert_eq!(call.args[0].ty.as_ref().unwrap().name(), "str");
    }

    #[test]
    fn test_typed_ast_serializes_types() {
        let mut nodes = parse_ast(HELLO).unwrap();
        SemanticAnalyzer::new().analyze(&mut nodes).unwrap();
        let json = serde_json::to_string(&nodes).unwrap();
        assert!(json.contains("\"ty\":\"str\""));
        assert!(json.contains("\"ty\":\"bool\""));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(parse_ast("[]").is_err());
        assert!(parse_ast("{").is_err());
        assert!(parse_ast(r#"[{"Declare": {"name": "f", "return_type": "float"}}]"#).is_err());
    }
}

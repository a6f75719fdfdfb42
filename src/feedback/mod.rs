//! Structured Feedback Module
//!
//! Machine-readable output of a check run:
//! - JSON error report with a stable code and fix suggestions
//! - Run statistics

use serde::{Deserialize, Serialize};

use crate::frontend::semantic::SemanticAnalyzer;
use crate::utils::{Error, Location};

// ==================== Structured Error Report ====================

/// A structured error report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Error code (e.g., "E0001")
    pub code: String,

    /// Error severity
    pub severity: Severity,

    /// Human-readable message
    pub message: String,

    /// Location information
    pub location: Option<Location>,

    /// Suggested fixes
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    /// Description of the fix
    pub message: String,

    /// Confidence in this suggestion (0.0 - 1.0)
    pub confidence: f64,
}

impl Suggestion {
    fn new(message: impl Into<String>, confidence: f64) -> Self {
        Self { message: message.into(), confidence }
    }
}

impl ErrorReport {
    /// Create an error report from a semantic error
    pub fn from_error(error: &Error) -> Self {
        Self {
            code: error_code(error).to_string(),
            severity: Severity::Error,
            message: error.to_string(),
            location: error.location().cloned(),
            suggestions: suggestions_for(error),
        }
    }
}

/// Stable code for each error kind
fn error_code(error: &Error) -> &'static str {
    match error {
        Error::DuplicateFunction { .. } => "E0001",
        Error::InvalidMainSignature { .. } => "E0002",
        Error::UnknownFunction { .. } => "E0003",
        Error::ArgumentCountMismatch { .. } => "E0004",
        Error::ArgumentTypeMismatch { .. } => "E0005",
        Error::UndefinedVariable { .. } => "E0006",
        Error::NotAPointer { .. } => "E0007",
        Error::VoidCallUsedAsValue { .. } => "E0008",
        Error::ConditionNotBoolean { .. } => "E0009",
        Error::VoidFunctionReturnsValue { .. } => "E0010",
        Error::MissingReturnValue { .. } => "E0011",
        Error::ReturnTypeMismatch { .. } => "E0012",
        Error::MissingEndOfFile => "E0900",
        Error::NodeAfterEndOfFile { .. } => "E0901",
    }
}

fn suggestions_for(error: &Error) -> Vec<Suggestion> {
    match error {
        Error::DuplicateFunction { name, .. } => vec![
            Suggestion::new(format!("Rename one of the functions named '{}'", name), 0.8),
        ],
        Error::InvalidMainSignature { .. } => vec![
            Suggestion::new("Declare main as returning int", 0.9),
        ],
        Error::UnknownFunction { name, .. } => vec![
            Suggestion::new(format!("Declare or define '{}' before the function that calls it", name), 0.8),
            Suggestion::new("Check the spelling of the function name", 0.5),
        ],
        Error::ArgumentCountMismatch { expected, got, .. } => {
            if got < expected {
                vec![Suggestion::new(format!("Add {} more argument(s)", expected - got), 0.9)]
            } else {
                vec![Suggestion::new(format!("Remove {} extra argument(s)", got - expected), 0.9)]
            }
        }
        Error::ArgumentTypeMismatch { signature, .. } => vec![
            Suggestion::new(format!("Pass arguments matching {}", signature), 0.7),
        ],
        Error::UndefinedVariable { name, .. } => vec![
            Suggestion::new(format!("Add a parameter named '{}'", name), 0.6),
        ],
        Error::NotAPointer { .. } => vec![
            Suggestion::new("Remove the '*' or dereference a pointer value instead", 0.7),
        ],
        Error::VoidCallUsedAsValue { name, .. } => vec![
            Suggestion::new(format!("Call '{}' as a statement, or give it a return type", name), 0.7),
        ],
        Error::ConditionNotBoolean { .. } => vec![
            Suggestion::new("Use a comparison or a bool-returning call as the condition", 0.7),
        ],
        Error::VoidFunctionReturnsValue { .. } => vec![
            Suggestion::new("Use a bare 'return', or declare a return type", 0.8),
        ],
        Error::MissingReturnValue { expected, .. } => vec![
            Suggestion::new(format!("Return a value of type {}", expected), 0.8),
        ],
        Error::ReturnTypeMismatch { expected, .. } => vec![
            Suggestion::new(format!("Return a value convertible to {}", expected), 0.7),
        ],
        Error::MissingEndOfFile | Error::NodeAfterEndOfFile { .. } => vec![],
    }
}

// ==================== Check Feedback ====================

/// Complete feedback for one check run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckFeedback {
    /// Check status
    pub success: bool,

    /// Source file
    pub source_file: String,

    /// At most one entry: the pass stops at the first error
    pub diagnostics: Vec<ErrorReport>,

    /// Run statistics
    pub stats: CheckStats,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckStats {
    /// Time spent in the semantic pass
    pub semantic_time_ms: u64,

    /// Number of registered functions
    pub function_count: usize,

    pub declaration_count: usize,
    pub definition_count: usize,

    /// Expressions that received a type
    pub typed_expression_count: usize,

    /// Distinct pointer types built by `&`
    pub pointer_type_count: usize,
}

impl CheckStats {
    /// Collect statistics from a finished analyzer
    pub fn from_analyzer(analyzer: &SemanticAnalyzer, semantic_time_ms: u64) -> Self {
        let stats = analyzer.stats();
        Self {
            semantic_time_ms,
            function_count: analyzer.functions().len(),
            declaration_count: stats.declarations,
            definition_count: stats.definitions,
            typed_expression_count: stats.typed_expressions,
            pointer_type_count: analyzer.types().pointer_count(),
        }
    }
}

impl CheckFeedback {
    /// Create a successful feedback
    pub fn success(source_file: String, stats: CheckStats) -> Self {
        Self {
            success: true,
            source_file,
            diagnostics: vec![],
            stats,
        }
    }

    /// Create a failed feedback
    pub fn failure(source_file: String, error: &Error, stats: CheckStats) -> Self {
        Self {
            success: false,
            source_file,
            diagnostics: vec![ErrorReport::from_error(error)],
            stats,
        }
    }

    /// Output as JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

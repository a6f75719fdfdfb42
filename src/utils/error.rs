//! Error handling for Typefill

use crate::utils::Location;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Renders "1 argument" / "N arguments"
fn arguments(count: &usize) -> String {
    if *count == 1 {
        "1 argument".to_string()
    } else {
        format!("{} arguments", count)
    }
}

/// Semantic error. Every variant is fatal: the pass stops at the first one.
#[derive(Error, Debug, Clone)]
pub enum Error {
    // ==================== Signature Errors ====================

    #[error("a function named \"{name}\" already exists")]
    DuplicateFunction { name: String, location: Location },

    #[error("the main() function must return int")]
    InvalidMainSignature { location: Location },

    // ==================== Call Errors ====================

    #[error("function \"{name}\" not found")]
    UnknownFunction { name: String, location: Location },

    #[error(
        "function {signature} takes {}, but it was called with {}",
        arguments(.expected),
        arguments(.got)
    )]
    ArgumentCountMismatch {
        signature: String,
        expected: usize,
        got: usize,
        location: Location,
    },

    #[error("function {signature} was called with wrong argument types: {got}")]
    ArgumentTypeMismatch {
        signature: String,
        got: String,
        location: Location,
    },

    // ==================== Expression Errors ====================

    #[error("no local variable named '{name}'")]
    UndefinedVariable { name: String, location: Location },

    #[error("the dereference operator '*' is only for pointers, not for '{got}'")]
    NotAPointer { got: String, location: Location },

    #[error("function '{name}' does not return a value")]
    VoidCallUsedAsValue { name: String, location: Location },

    // ==================== Statement Errors ====================

    #[error("'if' condition must be a boolean, not {got}")]
    ConditionNotBoolean { got: String, location: Location },

    #[error("function '{function}' cannot return a value because it was defined with '-> void'")]
    VoidFunctionReturnsValue { function: String, location: Location },

    #[error("a return value is needed, because the return type of function '{function}' is '{expected}'")]
    MissingReturnValue {
        function: String,
        expected: String,
        location: Location,
    },

    #[error("attempting to return a value of type '{got}' from function '{function}' defined with '-> {expected}'")]
    ReturnTypeMismatch {
        function: String,
        expected: String,
        got: String,
        location: Location,
    },

    // ==================== Internal Errors ====================

    #[error("internal error: toplevel sequence is not terminated by end-of-file")]
    MissingEndOfFile,

    #[error("internal error: toplevel node found after end-of-file")]
    NodeAfterEndOfFile { location: Location },
}

impl Error {
    /// Get the location associated with this error
    pub fn location(&self) -> Option<&Location> {
        match self {
            Self::DuplicateFunction { location, .. }
            | Self::InvalidMainSignature { location }
            | Self::UnknownFunction { location, .. }
            | Self::ArgumentCountMismatch { location, .. }
            | Self::ArgumentTypeMismatch { location, .. }
            | Self::UndefinedVariable { location, .. }
            | Self::NotAPointer { location, .. }
            | Self::VoidCallUsedAsValue { location, .. }
            | Self::ConditionNotBoolean { location, .. }
            | Self::VoidFunctionReturnsValue { location, .. }
            | Self::MissingReturnValue { location, .. }
            | Self::ReturnTypeMismatch { location, .. }
            | Self::NodeAfterEndOfFile { location } => Some(location),
            Self::MissingEndOfFile => None,
        }
    }
}

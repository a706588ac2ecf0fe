//! Error types shared across the query layer.
//!
//! Hand-rolled enums with `Display`/`Error` impls, organized by the
//! failure's origin: argument parsing vs. query execution. Allocation
//! and catalog errors live next to the subsystems that raise them.

use std::error::Error;
use std::fmt;

/// Errors from parsing a single query's arguments.
///
/// A malformed argument invalidates only the instance it belongs to;
/// the rest of the batch proceeds normally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArgumentError {
    /// The argument count does not match the query type's arity.
    WrongCount {
        /// Number of arguments the query type expects.
        expected: usize,
        /// Number of arguments actually supplied.
        got: usize,
    },
    /// An argument value could not be parsed.
    Invalid {
        /// Human-readable description of the problem.
        reason: String,
    },
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongCount { expected, got } => {
                write!(f, "wrong argument count: expected {expected}, got {got}")
            }
            Self::Invalid { reason } => write!(f, "invalid argument: {reason}"),
        }
    }
}

impl Error for ArgumentError {}

/// Errors from executing a single query instance.
///
/// Caught at instance granularity by the dispatcher: the failing
/// instance's output stays empty and the partition continues.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExecuteError {
    /// The instance's arguments or statistics had an unexpected shape.
    ///
    /// Indicates a mismatched registration (e.g. an instance paired
    /// with the wrong query type), not a data problem.
    ArgumentMismatch,
    /// The query's own logic failed.
    Failed {
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl fmt::Display for ExecuteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArgumentMismatch => write!(f, "argument data does not match the query type"),
            Self::Failed { reason } => write!(f, "query execution failed: {reason}"),
        }
    }
}

impl Error for ExecuteError {}

//! Error types and context management for puzzle parsing and solving

use std::fmt;
use std::path::PathBuf;

/// Main error type for all puzzle operations
#[derive(Debug)]
pub enum AdventError {
    /// An input line could not be parsed
    Parse {
        /// The offending input line
        line: String,
        /// What the parser expected
        reason: String,
    },

    /// Input is well formed line by line but structurally unusable
    InvalidInput {
        /// Description of what's wrong with the input
        reason: String,
    },

    /// A logical invariant of the solving algorithm does not hold
    ///
    /// Covers inputs with no solution, more than one solution, or states
    /// the algorithm cannot continue from.
    Invariant {
        /// Name of the operation that failed
        operation: &'static str,
        /// Description of the violated invariant
        reason: String,
    },

    /// No solution is registered for the requested puzzle
    UnknownPuzzle {
        /// Requested year
        year: u16,
        /// Requested day
        day: u8,
    },

    /// Command-line parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A parser regular expression failed to compile
    Pattern {
        /// Underlying regex error
        source: regex::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },
}

impl fmt::Display for AdventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { line, reason } => {
                write!(f, "Could not parse input line '{line}': {reason}")
            }
            Self::InvalidInput { reason } => write!(f, "Invalid input: {reason}"),
            Self::Invariant { operation, reason } => {
                write!(f, "Cannot complete {operation}: {reason}")
            }
            Self::UnknownPuzzle { year, day } => {
                write!(f, "No solution registered for {year} day {day}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Pattern { source } => write!(f, "Invalid parser pattern: {source}"),
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for AdventError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Pattern { source } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, AdventError>;

/// Attaches the offending input line to lower-level parse failures
pub trait WithLine<T> {
    /// Convert any error into [`AdventError::Parse`] naming `line`
    ///
    /// # Errors
    ///
    /// Propagates the original error as a parse error for `line`
    fn with_line(self, line: &str) -> Result<T>;
}

impl<T, E> WithLine<T> for std::result::Result<T, E>
where
    E: fmt::Display,
{
    fn with_line(self, line: &str) -> Result<T> {
        self.map_err(|e| parse_error(line, &e))
    }
}

impl From<regex::Error> for AdventError {
    fn from(err: regex::Error) -> Self {
        Self::Pattern { source: err }
    }
}

impl From<std::io::Error> for AdventError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create a parse error for an input line
pub fn parse_error(line: &str, reason: &impl ToString) -> AdventError {
    AdventError::Parse {
        line: line.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid input error
pub fn invalid_input(reason: &impl ToString) -> AdventError {
    AdventError::InvalidInput {
        reason: reason.to_string(),
    }
}

/// Create an invariant violation error
pub fn invariant_error(operation: &'static str, reason: &impl ToString) -> AdventError {
    AdventError::Invariant {
        operation,
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AdventError {
    AdventError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

//! Error types and context management for board construction and solving

use std::fmt;
use std::path::PathBuf;

/// Main error type for all puzzle operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// Tile count is zero or not a perfect square
    InvalidBoardSize {
        /// Number of tile records supplied
        tile_count: usize,
    },

    /// Tile count is a perfect square but the side is not supported
    UnsupportedBoardSize {
        /// Side length implied by the tile count
        side: usize,
        /// Side lengths accepted by the active board options
        supported: Vec<usize>,
    },

    /// A tile record could not be turned into a tile
    ///
    /// Occurs when the record:
    /// - Does not have exactly five comma-separated fields
    /// - Has an id that is not a non-negative integer
    /// - Names a shape outside the active vocabulary
    MalformedTileRecord {
        /// 1-based position of the record in its input, 0 when unknown
        line: usize,
        /// The offending record text
        record: String,
        /// Explanation of what is wrong with the record
        reason: String,
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Search finished without finding a solution
    Unsolvable {
        /// Number of placement checks performed
        steps: u64,
        /// Description of why the search stopped
        reason: String,
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
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBoardSize { tile_count } => {
                write!(
                    f,
                    "Invalid board size: {tile_count} tiles is not a non-zero perfect square"
                )
            }
            Self::UnsupportedBoardSize { side, supported } => {
                let supported = supported
                    .iter()
                    .map(|s| format!("{s}x{s}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(
                    f,
                    "Unsupported board size {side}x{side} (supported: {supported})"
                )
            }
            Self::MalformedTileRecord {
                line,
                record,
                reason,
            } => {
                if *line == 0 {
                    write!(f, "Malformed tile record '{record}': {reason}")
                } else {
                    write!(f, "Malformed tile record {line} '{record}': {reason}")
                }
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Unsolvable { steps, reason } => {
                write!(f, "No solution found after {steps} steps: {reason}")
            }
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
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// 1-based index of the record being processed
    pub record_index: Option<usize>,
    /// File the records were read from
    pub path: Option<PathBuf>,
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Enriches error messages with input position information
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the record index context
    ///
    /// # Errors
    ///
    /// Propagates the original error with the record index applied
    fn with_record_index(self, record_index: usize) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<AlgorithmError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            match &mut error {
                AlgorithmError::MalformedTileRecord { line, .. } => {
                    if let Some(index) = context.record_index {
                        *line = index;
                    }
                }
                AlgorithmError::FileSystem {
                    path, operation, ..
                } => {
                    if let Some(p) = context.path {
                        *path = p;
                    }
                    if let Some(op) = context.operation {
                        *operation = op;
                    }
                }
                _ => {}
            }
            error
        })
    }

    fn with_record_index(self, record_index: usize) -> Result<T> {
        self.with_context(ErrorContext {
            record_index: Some(record_index),
            ..Default::default()
        })
    }
}

impl From<std::io::Error> for AlgorithmError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a malformed record error without position information
pub fn malformed_record(record: &str, reason: &impl ToString) -> AlgorithmError {
    AlgorithmError::MalformedTileRecord {
        line: 0,
        record: record.to_string(),
        reason: reason.to_string(),
    }
}

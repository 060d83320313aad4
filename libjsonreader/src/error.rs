//! Error types for JSON reading.

use thiserror::Error;

/// Result type for reader operations.
pub type Result<T> = std::result::Result<T, ReadError>;

/// Default bound on how deeply objects and arrays may nest.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Parse context carrying the source name for error reporting and the
/// nesting limit.
#[derive(Clone, Debug)]
pub struct ParseContext {
    pub filename: Option<String>,
    /// Objects and arrays nested deeper than this are rejected with
    /// [`ReadError::NestingTooDeep`]. The root object is depth 1.
    pub max_depth: usize,
}

impl Default for ParseContext {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ParseContext {
    /// Create a new parse context with the default nesting limit.
    pub fn new(filename: Option<&str>) -> Self {
        Self {
            filename: filename.map(String::from),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Replace the nesting limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Format an origin suffix for error messages.
    pub fn origin_suffix(&self) -> String {
        match &self.filename {
            Some(name) => format!(" in <{}>", name),
            None => String::new(),
        }
    }
}

/// Error type for parsing and querying JSON documents.
///
/// Line and column numbers are zero-based.
#[derive(Error, Debug)]
pub enum ReadError {
    /// The scanner ran out of significant characters.
    #[error("Unexpected end of input{0}")]
    UnexpectedEndOfInput(String),

    /// A specific character was required but another one was found.
    #[error(
        "Unexpected symbol: line {line}, column {column}, expected {expected:?}, got {found:?}{origin}"
    )]
    Syntax {
        line: usize,
        column: usize,
        expected: char,
        found: char,
        origin: String,
    },

    /// A field value starts with a character no value production accepts.
    #[error("Unexpected value: line {line}, column {column}, got {found:?}{origin}")]
    UnexpectedValue {
        line: usize,
        column: usize,
        found: char,
        origin: String,
    },

    /// Digits are missing or do not fit a 32-bit signed integer.
    ///
    /// `position` is set for number tokens in a document and empty for
    /// text coerced by [`Value::to_int`](crate::Value::to_int).
    #[error("Invalid number {text:?}{}", location(.position, .origin))]
    NumberFormat {
        text: String,
        position: Option<(usize, usize)>,
        origin: String,
    },

    /// An object or array opens past the context's nesting limit.
    #[error("Nesting too deep: line {line}, column {column}, limit {limit}{origin}")]
    NestingTooDeep {
        line: usize,
        column: usize,
        limit: usize,
        origin: String,
    },

    /// Field lookup on an object that has no such field.
    #[error("Key not found: {0:?}")]
    KeyNotFound(String),

    /// Element lookup past the end of an array.
    #[error("Index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The source could not be loaded.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReadError {
    /// Returns `true` for errors raised while parsing, as opposed to queries
    /// against an already built tree.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            ReadError::UnexpectedEndOfInput(_)
                | ReadError::Syntax { .. }
                | ReadError::UnexpectedValue { .. }
                | ReadError::NumberFormat { .. }
                | ReadError::NestingTooDeep { .. }
        )
    }

    /// Zero-based `(line, column)` of the offending character, when known.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            ReadError::Syntax { line, column, .. }
            | ReadError::UnexpectedValue { line, column, .. }
            | ReadError::NestingTooDeep { line, column, .. } => Some((*line, *column)),
            ReadError::NumberFormat { position, .. } => *position,
            _ => None,
        }
    }
}

fn location(position: &Option<(usize, usize)>, origin: &str) -> String {
    match position {
        Some((line, column)) => format!(" at line {}, column {}{}", line, column, origin),
        None => origin.to_string(),
    }
}

//! Minimal JSON document reader.
//!
//! The reader loads a whole document and parses it into a read-only tree of
//! typed values. The grammar is deliberately small:
//!
//! - the document root is always an object
//! - array elements are always objects
//! - numbers are 32-bit signed integers
//! - strings are taken verbatim, with no escape sequences
//!
//! # Parsing Pipeline
//!
//! 1. **Scanner**: walks the source text, skipping whitespace, control and
//!    separator characters and tracking line and column.
//!
//! 2. **Parser**: recursive-descent productions over the scanner's
//!    significant characters, building [`Value`] trees.

mod error;
mod parser;
mod reader;
mod scanner;
mod value;

pub use error::{ParseContext, ReadError, Result, DEFAULT_MAX_DEPTH};
pub use reader::JsonReader;
pub use scanner::{is_insignificant, Scanner};
pub use value::{Array, Object, Value};

/// Parse a JSON document from a string, returning its root object.
///
/// # Example
///
/// ```
/// use libjsonreader::{parse, Value};
///
/// let root = parse(r#"{"answer": 42}"#).unwrap();
/// assert_eq!(root.get("answer").unwrap(), &Value::Number(42));
/// ```
pub fn parse(input: &str) -> Result<Object> {
    parse_with_filename(input, None)
}

/// Parse a JSON document from a string with a filename for error messages.
pub fn parse_with_filename(input: &str, filename: Option<&str>) -> Result<Object> {
    let ctx = ParseContext::new(filename);
    parser::parse_root(input, &ctx)
}

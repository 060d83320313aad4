//! Document reader: owns the root object of one parsed document.

use crate::error::{ParseContext, Result};
use crate::parser;
use crate::value::{Object, Value};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// A fully parsed JSON document.
///
/// The document is read and parsed in one step; afterwards the tree is only
/// queried.
#[derive(Clone, Debug, PartialEq)]
pub struct JsonReader {
    root: Object,
}

impl JsonReader {
    /// Parse a document held in memory, naming it `filename` in errors.
    pub fn parse_with_filename(source: &str, filename: Option<&str>) -> Result<Self> {
        let ctx = ParseContext::new(filename);
        let root = parser::parse_root(source, &ctx)?;
        Ok(Self { root })
    }

    /// Load the whole file at `path` and parse it.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        let name = path.to_string_lossy();
        Self::parse_with_filename(&source, Some(name.as_ref()))
    }

    /// Look up a field of the root object.
    pub fn get(&self, name: &str) -> Result<&Value> {
        self.root.get(name)
    }

    /// Returns `true` if the root object has a field with this name.
    pub fn contains(&self, name: &str) -> bool {
        self.root.contains(name)
    }

    /// Borrow the root object.
    pub fn root(&self) -> &Object {
        &self.root
    }

    /// Give up the reader and keep the root object.
    pub fn into_root(self) -> Object {
        self.root
    }
}

impl FromStr for JsonReader {
    type Err = crate::ReadError;

    fn from_str(source: &str) -> Result<Self> {
        Self::parse_with_filename(source, None)
    }
}

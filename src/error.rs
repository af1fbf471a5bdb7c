//! Error types for document access, rendering and decoding.
//!
//! Every failure carries an [`ErrorKind`] tag plus a human-readable message:
//!
//! - **Type mismatches**: an accessor needed one kind of node or scalar and found another
//! - **Index out of range**: a bounds-checked lookup missed an array index or object key
//! - **Syntax errors**: the decoder hit malformed text, with line/column information
//!
//! ## Examples
//!
//! ```rust
//! use sjson::{ErrorKind, Node};
//!
//! let node = Node::from(42);
//! let err = node.at(0).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::TypeMismatch);
//! assert!(err.to_string().contains("expected array"));
//! ```

use std::fmt;
use thiserror::Error;

/// Coarse classification of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    TypeMismatch,
    IndexOutOfRange,
    Syntax,
    /// Raised through the serde data model.
    Custom,
    Io,
}

/// Represents all possible errors raised by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An operation required one kind and the node held another.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// A checked accessor missed an array index or object key.
    #[error("Index out of range: {index}")]
    IndexOutOfRange { index: String },

    /// Malformed document text.
    #[error("Syntax error at line {line}, column {col}: {msg}")]
    Syntax { line: usize, col: usize, msg: String },

    #[error("Error: {0}")]
    Custom(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates a type mismatch error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sjson::Error;
    ///
    /// let err = Error::type_mismatch("integer", "string");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an out-of-range error for a missing array index.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange {
            index: format!("{} (length {})", index, len),
        }
    }

    /// Creates an out-of-range error for a missing object key.
    pub fn missing_key(key: &str) -> Self {
        Error::IndexOutOfRange {
            index: format!("key \"{}\" not found", key),
        }
    }

    /// Creates a syntax error with line and column information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sjson::Error;
    ///
    /// let err = Error::syntax(10, 5, "unexpected token");
    /// assert!(err.to_string().contains("line 10"));
    /// ```
    pub fn syntax(line: usize, col: usize, msg: &str) -> Self {
        Error::Syntax {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the kind tag of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Error::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Error::Syntax { .. } => ErrorKind::Syntax,
            Error::Custom(_) => ErrorKind::Custom,
            Error::Io(_) => ErrorKind::Io,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(
            Error::type_mismatch("array", "object").kind(),
            ErrorKind::TypeMismatch
        );
        assert_eq!(
            Error::index_out_of_range(3, 1).kind(),
            ErrorKind::IndexOutOfRange
        );
        assert_eq!(Error::missing_key("k").kind(), ErrorKind::IndexOutOfRange);
        assert_eq!(Error::syntax(1, 1, "bad").kind(), ErrorKind::Syntax);
        assert_eq!(Error::custom("x").kind(), ErrorKind::Custom);
        assert_eq!(Error::io("x").kind(), ErrorKind::Io);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::index_out_of_range(3, 1).to_string(),
            "Index out of range: 3 (length 1)"
        );
        assert_eq!(
            Error::missing_key("name").to_string(),
            "Index out of range: key \"name\" not found"
        );
        assert_eq!(
            Error::syntax(2, 7, "expected ','").to_string(),
            "Syntax error at line 2, column 7: expected ','"
        );
    }
}

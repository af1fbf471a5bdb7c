//! # sjson
//!
//! A dynamic JSON document model with literal construction, auto-promoting
//! accessors and a configurable renderer.
//!
//! ## Key Features
//!
//! - **One node type**: a [`Node`] is a scalar, an array or an object, and can
//!   change shape on assignment
//! - **Literal construction**: nested braced lists become objects when every
//!   element is a `{"key", value}` pair and arrays otherwise, see [`sjson!`]
//! - **Auto-promotion**: indexing an untyped node by position makes it an array,
//!   indexing it by key makes it an object
//! - **Checked accessors**: every wrong-kind or out-of-range read is a
//!   [`Result`], while the `Index` operators panic
//! - **Serde Compatible**: any `T: Serialize` converts to a node and text, and
//!   any `T: Deserialize` reads back from one
//!
//! ## Quick Start
//!
//! ```rust
//! use sjson::{sjson, Node};
//!
//! let mut doc = Node::new();
//! doc["name"] = Node::from("sjson");
//! doc["tags"][1] = Node::from("json");
//! doc["tags"][0] = Node::from("rust");
//!
//! assert!(doc.is_object());
//! assert_eq!(doc["tags"].len(), 2);
//! assert_eq!(doc.render(""), r#"{"name":"sjson","tags":["rust","json"]}"#);
//!
//! let literal = sjson!({ {"a", 1}, {"b", {1, 2}} });
//! assert_eq!(literal, Node::parse(r#"{"b": [1, 2], "a": 1}"#).unwrap());
//! ```
//!
//! ### Serde
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use sjson::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let text = to_string(&Point { x: 1, y: 2 }).unwrap();
//! assert_eq!(text, r#"{"x":1,"y":2}"#);
//!
//! let back: Point = from_str(&text).unwrap();
//! assert_eq!(back, Point { x: 1, y: 2 });
//! ```
//!
//! ## Errors
//!
//! Every fallible operation returns [`Error`], tagged with an [`ErrorKind`]:
//! type mismatches, out-of-range indices and missing keys, and syntax errors
//! from the decoder (with line and column).

pub mod de;
pub mod error;
pub mod literal;
pub mod macros;
pub mod map;
pub mod node;
pub mod options;
pub mod scalar;
pub mod ser;

pub use de::Decoder;
pub use error::{Error, ErrorKind, Result};
pub use literal::{classify, LiteralShape};
pub use map::NodeMap;
pub use node::{Node, NodeKind};
pub use options::{DecodeOptions, RenderOptions};
pub use scalar::{Scalar, ScalarKind};
pub use ser::{NodeSerializer, Renderer};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;

/// Serialize any `T: Serialize` to compact JSON text.
///
/// # Examples
///
/// ```rust
/// use sjson::to_string;
///
/// assert_eq!(to_string(&vec![1, 2, 3]).unwrap(), "[1,2,3]");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized. Documents store
/// integers as `i64`, so a `u64` above `i64::MAX` is an error rather than a
/// silently rounded double.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &RenderOptions::compact())
}

/// Serialize any `T: Serialize` to JSON text indented with two spaces.
///
/// # Examples
///
/// ```rust
/// use sjson::to_string_pretty;
///
/// assert_eq!(to_string_pretty(&vec![1, 2]).unwrap(), "[\n  1,\n  2\n]");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &RenderOptions::pretty())
}

/// Serialize any `T: Serialize` to JSON text with custom options.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: &RenderOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let node = to_value(value)?;
    let mut renderer = Renderer::new(options.clone());
    renderer.render(&node);
    Ok(renderer.into_inner())
}

/// Convert any `T: Serialize` to a [`Node`].
///
/// # Examples
///
/// ```rust
/// use sjson::to_value;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let node = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(node.is_object());
/// assert_eq!(node["y"].to_integer().unwrap(), 2);
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Node>
where
    T: ?Sized + Serialize,
{
    ser::to_node(value)
}

/// Serialize any `T: Serialize` as compact JSON text into a writer.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string(value)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Deserialize an instance of type `T` from a [`Node`].
///
/// # Errors
///
/// Returns an error if the document does not match the shape of `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_node<T>(node: Node) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(node)
}

/// Deserialize an instance of type `T` from JSON text.
///
/// # Examples
///
/// ```rust
/// use sjson::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str(r#"{"x": 1, "y": 2}"#).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid JSON or cannot be deserialized
/// to type `T`. Syntax errors include line and column information.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_node(Node::parse(s)?)
}

/// Deserialize an instance of type `T` from bytes of JSON text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, not valid JSON,
/// or cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}

/// Deserialize an instance of type `T` from an I/O stream of JSON text.
///
/// # Examples
///
/// ```rust
/// use sjson::from_reader;
/// use std::io::Cursor;
///
/// let numbers: Vec<i64> = from_reader(Cursor::new(b"[1, 2, 3]")).unwrap();
/// assert_eq!(numbers, vec![1, 2, 3]);
/// ```
///
/// # Errors
///
/// Returns an error if reading from the reader fails, the input is not valid
/// JSON, or the data cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

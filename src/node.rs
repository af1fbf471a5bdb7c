//! The recursive document value.
//!
//! A [`Node`] is exactly one of a [`Scalar`] leaf, an ordered array of nodes,
//! or an object mapping string keys to nodes. Nodes own their children, so
//! cloning is a deep copy and a document is always a tree.
//!
//! ## Creating Nodes
//!
//! ```rust
//! use sjson::{sjson, Node};
//!
//! let number = Node::from(42);
//! let text = Node::from("hello");
//! let list = Node::from_values([1, 2, 3]);
//!
//! // Braced groups of [string, value] pairs become objects
//! let obj = sjson!({ {"name", "Alice"}, {"age", 30} });
//! assert!(obj.is_object());
//! ```
//!
//! ## Auto-promotion
//!
//! A freshly created node is untyped. Writing through an integer index turns
//! it into an array, writing through a string key turns it into an object:
//!
//! ```rust
//! use sjson::Node;
//!
//! let mut doc = Node::new();
//! doc["title"] = Node::from("Title A");
//! doc["tags"][1] = Node::from("tag2");
//!
//! assert!(doc.is_object());
//! assert_eq!(doc["tags"].len(), 2);
//! assert!(doc["tags"][0].is_untyped());
//! ```
//!
//! Promotion only fires from the untyped state. Indexing an array by key or an
//! object by position is a type mismatch.

use crate::{Error, NodeMap, Result, Scalar, ScalarKind};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Shared untyped node handed out by read-only key lookups that miss.
static UNTYPED: Node = Node::Scalar(Scalar::Untyped);

/// The tag of a [`Node`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Value,
    Array,
    Object,
}

impl NodeKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            NodeKind::Value => "value",
            NodeKind::Array => "array",
            NodeKind::Object => "object",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A document node: a scalar, an array or an object.
///
/// # Examples
///
/// ```rust
/// use sjson::{Node, NodeKind};
///
/// let node = Node::from_values(["a", "b"]);
/// assert_eq!(node.kind(), NodeKind::Array);
/// assert_eq!(node[1].to_str().unwrap(), "b");
/// assert!(node.at(5).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Scalar(Scalar),
    Array(Vec<Node>),
    Object(NodeMap),
}

impl Default for Node {
    fn default() -> Self {
        Node::Scalar(Scalar::Untyped)
    }
}

impl Node {
    /// Creates an untyped node.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn null() -> Self {
        Node::Scalar(Scalar::Null)
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Node::Scalar(_) => NodeKind::Value,
            Node::Array(_) => NodeKind::Array,
            Node::Object(_) => NodeKind::Object,
        }
    }

    /// Name used in type mismatch messages: the scalar kind for leaves.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Node::Scalar(s) => s.kind().name(),
            Node::Array(_) => "array",
            Node::Object(_) => "object",
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self, Node::Scalar(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Node::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Node::Object(_))
    }

    /// Returns `true` if the node was never assigned a concrete value.
    #[inline]
    #[must_use]
    pub const fn is_untyped(&self) -> bool {
        matches!(self, Node::Scalar(Scalar::Untyped))
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Node::Scalar(Scalar::Null))
    }

    pub fn as_scalar(&self) -> Result<&Scalar> {
        match self {
            Node::Scalar(s) => Ok(s),
            other => Err(Error::type_mismatch("value", other.type_name())),
        }
    }

    pub fn as_scalar_mut(&mut self) -> Result<&mut Scalar> {
        match self {
            Node::Scalar(s) => Ok(s),
            other => Err(Error::type_mismatch("value", other.type_name())),
        }
    }

    pub fn as_array(&self) -> Result<&Vec<Node>> {
        match self {
            Node::Array(items) => Ok(items),
            other => Err(Error::type_mismatch("array", other.type_name())),
        }
    }

    pub fn as_array_mut(&mut self) -> Result<&mut Vec<Node>> {
        match self {
            Node::Array(items) => Ok(items),
            other => Err(Error::type_mismatch("array", other.type_name())),
        }
    }

    pub fn as_object(&self) -> Result<&NodeMap> {
        match self {
            Node::Object(map) => Ok(map),
            other => Err(Error::type_mismatch("object", other.type_name())),
        }
    }

    pub fn as_object_mut(&mut self) -> Result<&mut NodeMap> {
        match self {
            Node::Object(map) => Ok(map),
            other => Err(Error::type_mismatch("object", other.type_name())),
        }
    }

    /// Reads a boolean scalar. Null and untyped nodes read as `false`.
    pub fn to_bool(&self) -> Result<bool> {
        self.scalar_for(ScalarKind::Boolean)?.to_bool()
    }

    pub fn to_integer(&self) -> Result<i64> {
        self.scalar_for(ScalarKind::Integer)?.to_integer()
    }

    pub fn to_double(&self) -> Result<f64> {
        self.scalar_for(ScalarKind::Double)?.to_double()
    }

    pub fn to_str(&self) -> Result<&str> {
        self.scalar_for(ScalarKind::String)?.to_str()
    }

    fn scalar_for(&self, kind: ScalarKind) -> Result<&Scalar> {
        match self {
            Node::Scalar(s) => Ok(s),
            other => Err(Error::type_mismatch(kind.name(), other.type_name())),
        }
    }

    /// Replaces this node with `value`.
    pub fn set<T: Into<Node>>(&mut self, value: T) {
        *self = value.into();
    }

    /// Takes the node out, leaving an untyped node in its place.
    pub fn take(&mut self) -> Node {
        std::mem::take(self)
    }

    /// Resets the node to the untyped state, dropping any children.
    pub fn clear(&mut self) {
        *self = Node::default();
    }

    /// Number of elements or members. Scalars have length zero.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Node::Array(items) => items.len(),
            Node::Object(map) => map.len(),
            Node::Scalar(_) => 0,
        }
    }

    /// Whether the node holds nothing: an empty container or an untyped scalar.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Node::Array(items) => items.is_empty(),
            Node::Object(map) => map.is_empty(),
            Node::Scalar(s) => s.is_empty(),
        }
    }

    /// Returns `true` if this is an object holding `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        match self {
            Node::Object(map) => map.contains_key(key),
            _ => false,
        }
    }

    /// Returns `true` if this is an array with an element equal to `value`.
    #[must_use]
    pub fn contains(&self, value: &Node) -> bool {
        match self {
            Node::Array(items) => items.contains(value),
            _ => false,
        }
    }

    /// Appends to an array, promoting an untyped node first.
    pub fn push<T: Into<Node>>(&mut self, value: T) -> Result<()> {
        self.promote_to_array();
        self.as_array_mut()?.push(value.into());
        Ok(())
    }

    /// Inserts an object member, promoting an untyped node first.
    ///
    /// Returns the previous value stored under `key`.
    pub fn insert<T: Into<Node>>(&mut self, key: &str, value: T) -> Result<Option<Node>> {
        self.promote_to_object();
        Ok(self.as_object_mut()?.insert(key.to_string(), value.into()))
    }

    /// Removes an object member.
    pub fn remove(&mut self, key: &str) -> Result<Option<Node>> {
        Ok(self.as_object_mut()?.remove(key))
    }

    /// Bounds-checked element access.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` past the end, `TypeMismatch` if this is not an array.
    pub fn at(&self, idx: usize) -> Result<&Node> {
        let items = self.as_array()?;
        items
            .get(idx)
            .ok_or_else(|| Error::index_out_of_range(idx, items.len()))
    }

    pub fn at_mut(&mut self, idx: usize) -> Result<&mut Node> {
        let items = self.as_array_mut()?;
        let len = items.len();
        items
            .get_mut(idx)
            .ok_or_else(|| Error::index_out_of_range(idx, len))
    }

    /// Bounds-checked member access.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` for a missing key, `TypeMismatch` if this is not an object.
    pub fn at_key(&self, key: &str) -> Result<&Node> {
        self.as_object()?
            .get(key)
            .ok_or_else(|| Error::missing_key(key))
    }

    pub fn at_key_mut(&mut self, key: &str) -> Result<&mut Node> {
        self.as_object_mut()?
            .get_mut(key)
            .ok_or_else(|| Error::missing_key(key))
    }

    /// Read-only member lookup that never inserts.
    ///
    /// A missing key, or an untyped node, yields a shared untyped sentinel. The
    /// sentinel is the same for every lookup; do not rely on its address.
    ///
    /// ```rust
    /// use sjson::Node;
    ///
    /// let node = Node::from_pairs_or_array(vec![Node::from_values(["k", "v"])]);
    /// assert_eq!(node.get("k").unwrap().to_str().unwrap(), "v");
    /// assert!(node.get("missing").unwrap().is_untyped());
    /// assert_eq!(node.len(), 1);
    /// ```
    pub fn get(&self, key: &str) -> Result<&Node> {
        match self {
            Node::Object(map) => Ok(map.get(key).unwrap_or(&UNTYPED)),
            Node::Scalar(Scalar::Untyped) => Ok(&UNTYPED),
            other => Err(Error::type_mismatch("object", other.type_name())),
        }
    }

    /// Member lookup that inserts an untyped node for a missing key.
    ///
    /// An untyped node is promoted to an empty object first.
    pub fn entry(&mut self, key: &str) -> Result<&mut Node> {
        self.promote_to_object();
        match self {
            Node::Object(map) => Ok(map.get_or_insert_default(key)),
            other => Err(Error::type_mismatch("object", other.type_name())),
        }
    }

    /// Element lookup that grows the array with untyped nodes up to `idx`.
    ///
    /// An untyped node is promoted to an empty array first.
    pub fn index_mut_or_promote(&mut self, idx: usize) -> Result<&mut Node> {
        self.promote_to_array();
        match self {
            Node::Array(items) => {
                if idx >= items.len() {
                    items.resize_with(idx + 1, Node::default);
                }
                Ok(&mut items[idx])
            }
            other => Err(Error::type_mismatch("array", other.type_name())),
        }
    }

    fn promote_to_array(&mut self) {
        if self.is_untyped() {
            tracing::trace!("promoting untyped node to array");
            *self = Node::Array(Vec::new());
        }
    }

    fn promote_to_object(&mut self) {
        if self.is_untyped() {
            tracing::trace!("promoting untyped node to object");
            *self = Node::Object(NodeMap::new());
        }
    }
}

/// Unchecked element access.
///
/// An untyped node yields the shared untyped sentinel, the same as a key
/// lookup on an untyped node.
///
/// # Panics
///
/// Panics if the node is neither untyped nor an array, or `idx` is out of
/// range. Use [`Node::at`] for a checked lookup.
impl Index<usize> for Node {
    type Output = Node;

    fn index(&self, idx: usize) -> &Node {
        match self {
            Node::Array(items) => &items[idx],
            Node::Scalar(Scalar::Untyped) => &UNTYPED,
            other => panic!("cannot index {} with an integer", other.type_name()),
        }
    }
}

/// Element access with auto-promotion and growth.
///
/// # Panics
///
/// Panics if the node is neither untyped nor an array. Use
/// [`Node::index_mut_or_promote`] for the fallible form.
impl IndexMut<usize> for Node {
    fn index_mut(&mut self, idx: usize) -> &mut Node {
        match self.index_mut_or_promote(idx) {
            Ok(node) => node,
            Err(err) => panic!("{}", err),
        }
    }
}

/// Read-only member access; see [`Node::get`].
///
/// # Panics
///
/// Panics if the node is neither untyped nor an object.
impl Index<&str> for Node {
    type Output = Node;

    fn index(&self, key: &str) -> &Node {
        match self.get(key) {
            Ok(node) => node,
            Err(err) => panic!("{}", err),
        }
    }
}

/// Member access with auto-promotion and default insertion; see [`Node::entry`].
///
/// # Panics
///
/// Panics if the node is neither untyped nor an object.
impl IndexMut<&str> for Node {
    fn index_mut(&mut self, key: &str) -> &mut Node {
        match self.entry(key) {
            Ok(node) => node,
            Err(err) => panic!("{}", err),
        }
    }
}

impl fmt::Display for Node {
    /// Compact text; the alternate flag (`{:#}`) pretty-prints with two spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(&self.render(crate::options::DEFAULT_INDENT))
        } else {
            f.write_str(&self.render(""))
        }
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Node::Scalar(Scalar::Untyped) | Node::Scalar(Scalar::Null) => {
                serializer.serialize_unit()
            }
            Node::Scalar(Scalar::Boolean(b)) => serializer.serialize_bool(*b),
            Node::Scalar(Scalar::Integer(i)) => serializer.serialize_i64(*i),
            Node::Scalar(Scalar::Double(d)) => serializer.serialize_f64(*d),
            Node::Scalar(Scalar::String(s)) => serializer.serialize_str(s),
            Node::Array(items) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for element in items {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Node::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct NodeVisitor;

        impl<'de> Visitor<'de> for NodeVisitor {
            type Value = Node;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid document value")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Node, E> {
                Ok(Node::from(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Node, E> {
                Ok(Node::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Node, E> {
                if value <= i64::MAX as u64 {
                    Ok(Node::from(value as i64))
                } else {
                    Ok(Node::from(value as f64))
                }
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Node, E> {
                Ok(Node::from(value))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Node, E> {
                Ok(Node::from(value))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Node, E> {
                Ok(Node::from(value))
            }

            fn visit_unit<E>(self) -> std::result::Result<Node, E> {
                Ok(Node::null())
            }

            fn visit_none<E>(self) -> std::result::Result<Node, E> {
                Ok(Node::null())
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Node, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Node, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Node::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Node, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = NodeMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(Node::Object(values))
            }
        }

        deserializer.deserialize_any(NodeVisitor)
    }
}

impl TryFrom<Node> for bool {
    type Error = Error;

    fn try_from(value: Node) -> Result<Self> {
        value.to_bool()
    }
}

impl TryFrom<Node> for i64 {
    type Error = Error;

    fn try_from(value: Node) -> Result<Self> {
        value.to_integer()
    }
}

impl TryFrom<Node> for f64 {
    type Error = Error;

    fn try_from(value: Node) -> Result<Self> {
        value.to_double()
    }
}

impl TryFrom<Node> for String {
    type Error = Error;

    fn try_from(value: Node) -> Result<Self> {
        match value {
            Node::Scalar(s) => String::try_from(s),
            other => Err(Error::type_mismatch("string", other.type_name())),
        }
    }
}

impl From<Scalar> for Node {
    fn from(value: Scalar) -> Self {
        Node::Scalar(value)
    }
}

impl From<()> for Node {
    fn from(_: ()) -> Self {
        Node::null()
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Scalar(Scalar::from(value))
    }
}

impl From<i8> for Node {
    fn from(value: i8) -> Self {
        Node::Scalar(Scalar::from(value))
    }
}

impl From<i16> for Node {
    fn from(value: i16) -> Self {
        Node::Scalar(Scalar::from(value))
    }
}

impl From<i32> for Node {
    fn from(value: i32) -> Self {
        Node::Scalar(Scalar::from(value))
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::Scalar(Scalar::from(value))
    }
}

impl From<u8> for Node {
    fn from(value: u8) -> Self {
        Node::Scalar(Scalar::from(value))
    }
}

impl From<u16> for Node {
    fn from(value: u16) -> Self {
        Node::Scalar(Scalar::from(value))
    }
}

impl From<u32> for Node {
    fn from(value: u32) -> Self {
        Node::Scalar(Scalar::from(value))
    }
}

impl From<f32> for Node {
    fn from(value: f32) -> Self {
        Node::Scalar(Scalar::from(value))
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::Scalar(Scalar::from(value))
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Scalar(Scalar::from(value))
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Scalar(Scalar::from(value))
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Node::null(),
        }
    }
}

impl From<Vec<Node>> for Node {
    fn from(value: Vec<Node>) -> Self {
        Node::Array(value)
    }
}

impl From<NodeMap> for Node {
    fn from(value: NodeMap) -> Self {
        Node::Object(value)
    }
}

impl FromIterator<Node> for Node {
    fn from_iter<T: IntoIterator<Item = Node>>(iter: T) -> Self {
        Node::Array(iter.into_iter().collect())
    }
}

impl FromIterator<(String, Node)> for Node {
    fn from_iter<T: IntoIterator<Item = (String, Node)>>(iter: T) -> Self {
        Node::Object(iter.into_iter().collect())
    }
}

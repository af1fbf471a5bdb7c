//! Map type for document objects.
//!
//! [`NodeMap`] wraps [`IndexMap`]. Keys are unique; inserting an existing key
//! replaces its value. The iteration order is an implementation detail of the
//! backing map and not part of the API contract: code that needs a stable
//! order should sort the keys itself. Equality ignores order.
//!
//! ## Examples
//!
//! ```rust
//! use sjson::{Node, NodeMap};
//!
//! let mut map = NodeMap::new();
//! map.insert("name".to_string(), Node::from("Alice"));
//! map.insert("age".to_string(), Node::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.to_str().ok()), Some("Alice"));
//! ```

use crate::Node;
use indexmap::IndexMap;
use std::collections::HashMap;

/// A map of string keys to document nodes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeMap(IndexMap<String, Node>);

impl NodeMap {
    #[must_use]
    pub fn new() -> Self {
        NodeMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        NodeMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair, returning the previous value for the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sjson::{Node, NodeMap};
    ///
    /// let mut map = NodeMap::new();
    /// assert!(map.insert("key".to_string(), Node::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), Node::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: Node) -> Option<Node> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.0.get_mut(key)
    }

    /// Returns the node for `key`, inserting an untyped node first if absent.
    pub fn get_or_insert_default(&mut self, key: &str) -> &mut Node {
        self.0.entry(key.to_string()).or_default()
    }

    /// Removes `key`, returning its node.
    pub fn remove(&mut self, key: &str) -> Option<Node> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Node> {
        self.0.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, String, Node> {
        self.0.values()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Node> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, Node> {
        self.0.iter_mut()
    }
}

impl From<HashMap<String, Node>> for NodeMap {
    fn from(map: HashMap<String, Node>) -> Self {
        NodeMap(map.into_iter().collect())
    }
}

impl From<NodeMap> for HashMap<String, Node> {
    fn from(map: NodeMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for NodeMap {
    type Item = (String, Node);
    type IntoIter = indexmap::map::IntoIter<String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a NodeMap {
    type Item = (&'a String, &'a Node);
    type IntoIter = indexmap::map::Iter<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Node)> for NodeMap {
    fn from_iter<T: IntoIterator<Item = (String, Node)>>(iter: T) -> Self {
        NodeMap(IndexMap::from_iter(iter))
    }
}

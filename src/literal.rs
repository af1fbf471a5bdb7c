//! Construction of nodes from nested literal lists.
//!
//! A braced literal list does not say whether it means an array or an object.
//! The list is classified by shape, all or nothing: if every element is a
//! two-element array whose first element is a string, the list is an object
//! built from those `[key, value]` pairs. Otherwise it is an array holding the
//! elements unchanged.
//!
//! ```rust
//! use sjson::{sjson, Node};
//!
//! let obj = sjson!({ {"a", 1}, {"b", 2} });
//! assert!(obj.is_object());
//!
//! // One sibling breaks the pattern, so every pair stays an array
//! let arr = sjson!({ {"a", 1}, {"b", 2}, {3, 4} });
//! assert!(arr.is_array());
//! assert_eq!(arr[0], Node::from_values([Node::from("a"), Node::from(1)]));
//! ```
//!
//! A genuine array of `[string, value]` pairs is indistinguishable from an
//! object literal. Use [`Node::from_values`] (or `sjson!([...])`) to build an
//! array without classification.

use crate::{Node, NodeMap, Scalar};

/// Result of classifying a literal list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LiteralShape {
    Array,
    Object,
}

/// Applies the all-or-nothing pair test to `list`.
///
/// An empty list is an array.
#[must_use]
pub fn classify(list: &[Node]) -> LiteralShape {
    if !list.is_empty() && list.iter().all(Node::is_pair) {
        LiteralShape::Object
    } else {
        LiteralShape::Array
    }
}

impl Node {
    /// Builds an array from a flat list of values, with no classification.
    ///
    /// ```rust
    /// use sjson::Node;
    ///
    /// let pair = Node::from_values(["key", "value"]);
    /// assert!(pair.is_array());
    /// assert!(pair.is_pair());
    /// ```
    pub fn from_values<I>(values: I) -> Node
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        Node::Array(values.into_iter().map(Into::into).collect())
    }

    /// Builds an object or an array from a braced literal list.
    ///
    /// Duplicate keys keep the last value.
    pub fn from_pairs_or_array(list: Vec<Node>) -> Node {
        match classify(&list) {
            LiteralShape::Array => Node::Array(list),
            LiteralShape::Object => {
                let mut map = NodeMap::with_capacity(list.len());
                for pair in list {
                    if let Node::Array(items) = pair {
                        let mut items = items.into_iter();
                        if let (Some(Node::Scalar(Scalar::String(key))), Some(value)) =
                            (items.next(), items.next())
                        {
                            map.insert(key, value);
                        }
                    }
                }
                tracing::trace!(members = map.len(), "literal list classified as object");
                Node::Object(map)
            }
        }
    }

    /// Whether this node is a two-element array starting with a string.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        match self {
            Node::Array(items) => {
                items.len() == 2 && matches!(items[0], Node::Scalar(Scalar::String(_)))
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(key: &str, value: impl Into<Node>) -> Node {
        Node::from_values([Node::from(key), value.into()])
    }

    #[test]
    fn test_all_pairs_make_object() {
        let node = Node::from_pairs_or_array(vec![pair("a", 1), pair("b", 2)]);
        let obj = node.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj.get("a"), Some(&Node::from(1)));
        assert_eq!(obj.get("b"), Some(&Node::from(2)));
    }

    #[test]
    fn test_one_non_pair_makes_array() {
        let odd = Node::from_values([3, 4]);
        let node = Node::from_pairs_or_array(vec![pair("a", 1), pair("b", 2), odd.clone()]);
        let items = node.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], pair("a", 1));
        assert_eq!(items[2], odd);
    }

    #[test]
    fn test_empty_list_is_array() {
        assert_eq!(classify(&[]), LiteralShape::Array);
        assert_eq!(Node::from_pairs_or_array(Vec::new()), Node::Array(Vec::new()));
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let node = Node::from_pairs_or_array(vec![pair("k", 1), pair("k", 2)]);
        assert_eq!(node.len(), 1);
        assert_eq!(node["k"], Node::from(2));
    }

    #[test]
    fn test_pair_shape() {
        assert!(pair("a", Node::new()).is_pair());
        assert!(!Node::from_values([1, 2]).is_pair());
        assert!(!Node::from_values(["a", "b", "c"]).is_pair());
        assert!(!Node::from_values(["a"]).is_pair());
        assert!(!Node::from("a").is_pair());
    }

    #[test]
    fn test_single_pair_list_is_object() {
        let node = Node::from_pairs_or_array(vec![pair("only", true)]);
        assert!(node.is_object());
        assert_eq!(node["only"], Node::from(true));
    }

    #[test]
    fn test_scalars_stay_array() {
        let node = Node::from_pairs_or_array(vec![Node::from(1), Node::from("x")]);
        assert_eq!(node, Node::from_values([Node::from(1), Node::from("x")]));
    }
}

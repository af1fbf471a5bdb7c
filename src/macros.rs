/// Builds a [`Node`](crate::Node) from literal syntax.
///
/// - `sjson!(null)` is a null scalar.
/// - `sjson!(expr)` forwards a single value through `Node::from`.
/// - `sjson!({ a, b, ... })` is a braced group. Each element is itself parsed by
///   this macro, then the list is classified with
///   [`Node::from_pairs_or_array`](crate::Node::from_pairs_or_array): a list
///   made only of `{"key", value}` pairs becomes an object, anything else an
///   array.
/// - `sjson!([a, b, ...])` is always an array.
///
/// ```rust
/// use sjson::sjson;
///
/// let book = sjson!({
///     {"title", "Title A"},
///     {"price", 114.514},
///     {"restricted", false},
///     {"tag", {"tag1", "tag2"}},
/// });
/// assert!(book.is_object());
/// assert!(book["tag"].is_array());
/// ```
#[macro_export]
macro_rules! sjson {
    (null) => {
        $crate::Node::null()
    };

    ({}) => {
        $crate::Node::from_pairs_or_array(::std::vec::Vec::new())
    };

    // Every element a single token tree: one expansion for the whole group.
    ({ $($elem:tt),+ $(,)? }) => {
        $crate::Node::from_pairs_or_array(::std::vec![$($crate::sjson!($elem)),+])
    };

    ({ $($tt:tt)+ }) => {
        $crate::Node::from_pairs_or_array($crate::sjson!(@elems [] $($tt)+))
    };

    ([]) => {
        $crate::Node::Array(::std::vec::Vec::new())
    };

    ([ $($elem:tt),+ $(,)? ]) => {
        $crate::Node::Array(::std::vec![$($crate::sjson!($elem)),+])
    };

    ([ $($tt:tt)+ ]) => {
        $crate::Node::Array($crate::sjson!(@elems [] $($tt)+))
    };

    // Splits a comma-separated element list one element per step. Single
    // token trees go back through this macro so `null` and nested groups keep
    // their meaning; longer elements are parsed as expressions.
    (@elems [$($done:expr,)*] $(,)?) => {
        ::std::vec![$($done,)*]
    };

    (@elems [$($done:expr,)*] $elem:tt , $($rest:tt)*) => {
        $crate::sjson!(@elems [$($done,)* $crate::sjson!($elem),] $($rest)*)
    };

    (@elems [$($done:expr,)*] $elem:tt) => {
        ::std::vec![$($done,)* $crate::sjson!($elem),]
    };

    (@elems [$($done:expr,)*] $elem:expr , $($rest:tt)*) => {
        $crate::sjson!(@elems [$($done,)* $crate::Node::from($elem),] $($rest)*)
    };

    (@elems [$($done:expr,)*] $elem:expr) => {
        ::std::vec![$($done,)* $crate::Node::from($elem),]
    };

    ($value:expr) => {
        $crate::Node::from($value)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Node, NodeMap};

    #[test]
    fn test_sjson_macro_scalars() {
        assert!(sjson!(null).is_null());
        assert_eq!(sjson!(true), Node::from(true));
        assert_eq!(sjson!(42), Node::from(42));
        assert_eq!(sjson!(-3), Node::from(-3));
        assert_eq!(sjson!(3.5), Node::from(3.5));
        assert_eq!(sjson!("hello"), Node::from("hello"));
    }

    #[test]
    fn test_sjson_macro_groups() {
        assert_eq!(sjson!({}), Node::Array(vec![]));
        assert_eq!(sjson!([]), Node::Array(vec![]));
        assert_eq!(sjson!({1, 2, 3}), Node::from_values([1, 2, 3]));
        assert_eq!(sjson!([-1, 2.5]), Node::from_values([Node::from(-1), Node::from(2.5)]));
    }

    #[test]
    fn test_sjson_macro_objects() {
        let obj = sjson!({ {"name", "Alice"}, {"age", 30}, });
        let mut expected = NodeMap::new();
        expected.insert("name".to_string(), Node::from("Alice"));
        expected.insert("age".to_string(), Node::from(30));
        assert_eq!(obj, Node::Object(expected));
    }

    #[test]
    fn test_sjson_macro_explicit_array_skips_classification() {
        let arr = sjson!([{"a", 1}, {"b", 2}]);
        assert!(arr.is_array());
        assert_eq!(arr.len(), 2);
        assert!(arr[0].is_pair());
    }

    #[test]
    fn test_sjson_macro_expressions() {
        let d = 0.114;
        let s = String::from("str");
        let node = sjson!({1, d, s.clone(), {"k", s.len() as i64}});
        assert_eq!(node.len(), 4);
        assert_eq!(node[1], Node::from(0.114));
        assert_eq!(node[2], Node::from("str"));
        assert!(node[3].is_pair());
    }
}

//! Rendering documents as text.
//!
//! This module provides the [`Renderer`], which walks a [`Node`] depth-first
//! and writes JSON text, and the [`NodeSerializer`], which turns any
//! `T: Serialize` into a [`Node`].
//!
//! ## Layout
//!
//! The indent unit decides the layout:
//!
//! - **Empty unit**: compact, a single line with no inserted whitespace
//! - **Non-empty unit**: one element per line, the unit repeated per nesting level
//!
//! ```rust
//! use sjson::sjson;
//!
//! let doc = sjson!({ {"a", 1}, {"b", [1, 2]} });
//!
//! assert_eq!(doc.render(""), r#"{"a":1,"b":[1,2]}"#);
//! assert_eq!(
//!     doc.render("  "),
//!     "{\n  \"a\": 1,\n  \"b\": [\n    1,\n    2\n  ]\n}"
//! );
//! ```
//!
//! Strings and keys are escaped the JSON way. Non-finite doubles have no JSON
//! spelling and render as `null`. An untyped node renders as `unknown`.

use crate::scalar::{format_double, UNTYPED_MARKER};
use crate::{Error, Node, NodeMap, RenderOptions, Result, Scalar};
use serde::{ser, Serialize};

/// Text renderer for documents.
///
/// Created via [`Renderer::new`]; most callers use [`Node::render`] instead.
///
/// ```rust
/// use sjson::{Node, Renderer, RenderOptions};
///
/// let mut renderer = Renderer::new(RenderOptions::compact());
/// renderer.render(&Node::from_values([1, 2]));
/// assert_eq!(renderer.into_inner(), "[1,2]");
/// ```
pub struct Renderer {
    output: String,
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Renderer {
            output: String::with_capacity(256),
            options,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Appends `node` to the output.
    pub fn render(&mut self, node: &Node) {
        self.write_node(node, 0);
    }

    fn write_node(&mut self, node: &Node, depth: usize) {
        match node {
            Node::Scalar(scalar) => self.write_scalar(scalar),
            Node::Array(items) => self.write_array(items, depth),
            Node::Object(map) => self.write_object(map, depth),
        }
    }

    fn write_array(&mut self, items: &[Node], depth: usize) {
        if items.is_empty() {
            self.output.push_str("[]");
            return;
        }
        self.output.push('[');
        self.write_newline();
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.output.push(',');
                self.write_newline();
            }
            self.write_indent(depth + 1);
            self.write_node(item, depth + 1);
        }
        self.write_newline();
        self.write_indent(depth);
        self.output.push(']');
    }

    fn write_object(&mut self, map: &NodeMap, depth: usize) {
        if map.is_empty() {
            self.output.push_str("{}");
            return;
        }
        self.output.push('{');
        self.write_newline();
        for (i, (key, value)) in map.iter().enumerate() {
            if i > 0 {
                self.output.push(',');
                self.write_newline();
            }
            self.write_indent(depth + 1);
            self.write_string(key);
            self.output.push(':');
            if self.options.is_pretty() {
                self.output.push(' ');
            }
            self.write_node(value, depth + 1);
        }
        self.write_newline();
        self.write_indent(depth);
        self.output.push('}');
    }

    fn write_scalar(&mut self, scalar: &Scalar) {
        match scalar {
            Scalar::Untyped => self.output.push_str(UNTYPED_MARKER),
            Scalar::Null => self.output.push_str("null"),
            Scalar::Boolean(b) => self.output.push_str(if *b { "true" } else { "false" }),
            Scalar::Integer(i) => self.output.push_str(&i.to_string()),
            Scalar::Double(d) if d.is_finite() => self.output.push_str(&format_double(*d)),
            Scalar::Double(_) => self.output.push_str("null"),
            Scalar::String(s) => self.write_string(s),
        }
    }

    fn write_newline(&mut self) {
        if self.options.is_pretty() {
            self.output.push('\n');
        }
    }

    fn write_indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.output.push_str(&self.options.indent);
        }
    }

    #[inline]
    fn write_string(&mut self, s: &str) {
        self.output.push('"');
        for ch in s.chars() {
            match ch {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                '\u{0008}' => self.output.push_str("\\b"),
                '\u{000C}' => self.output.push_str("\\f"),
                c if (c as u32) < 0x20 => {
                    self.output.push_str(&format!("\\u{:04x}", c as u32));
                }
                _ => self.output.push(ch),
            }
        }
        self.output.push('"');
    }
}

impl Node {
    /// Renders the document with the given indent unit.
    ///
    /// An empty unit gives compact output.
    #[must_use]
    pub fn render(&self, indent: &str) -> String {
        self.render_with(&RenderOptions::new().with_indent(indent))
    }

    #[must_use]
    pub fn render_with(&self, options: &RenderOptions) -> String {
        let mut renderer = Renderer::new(options.clone());
        renderer.render(self);
        renderer.into_inner()
    }
}

/// Serializer producing a [`Node`] from any `T: Serialize`.
///
/// Enum variants carrying data use the external tagging of the serde data
/// model: `{"Variant": payload}`.
pub struct NodeSerializer;

pub struct SerializeVec {
    vec: Vec<Node>,
}

pub struct SerializeTupleVariant {
    name: String,
    vec: Vec<Node>,
}

pub struct SerializeMap {
    map: NodeMap,
    current_key: Option<String>,
}

pub struct SerializeStructVariant {
    name: String,
    map: NodeMap,
}

impl ser::Serializer for NodeSerializer {
    type Ok = Node;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Node> {
        Ok(Node::from(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Node> {
        Ok(Node::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Node> {
        Ok(Node::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Node> {
        Ok(Node::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Node> {
        Ok(Node::from(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Node> {
        Ok(Node::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Node> {
        Ok(Node::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Node> {
        Ok(Node::from(v))
    }

    /// Integers are stored as `i64`; larger values are rejected.
    fn serialize_u64(self, v: u64) -> Result<Node> {
        i64::try_from(v)
            .map(Node::from)
            .map_err(|_| Error::custom(format!("integer {} does not fit in i64", v)))
    }

    fn serialize_f32(self, v: f32) -> Result<Node> {
        Ok(Node::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Node> {
        Ok(Node::from(v))
    }

    fn serialize_char(self, v: char) -> Result<Node> {
        Ok(Node::from(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Node> {
        Ok(Node::from(v))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Node> {
        Ok(Node::from_values(v.iter().copied()))
    }

    fn serialize_none(self) -> Result<Node> {
        Ok(Node::null())
    }

    fn serialize_some<T>(self, value: &T) -> Result<Node>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Node> {
        Ok(Node::null())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Node> {
        Ok(Node::null())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Node> {
        Ok(Node::from(variant))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Node>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Node>
    where
        T: ?Sized + Serialize,
    {
        let mut map = NodeMap::with_capacity(1);
        map.insert(variant.to_string(), to_node(value)?);
        Ok(Node::Object(map))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            name: variant.to_string(),
            vec: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeStructVariant> {
        Ok(SerializeStructVariant {
            name: variant.to_string(),
            map: NodeMap::new(),
        })
    }
}

impl SerializeVec {
    fn new(capacity: usize) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(capacity),
        }
    }
}

impl SerializeMap {
    fn new() -> Self {
        SerializeMap {
            map: NodeMap::new(),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Node;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_node(value)?);
        Ok(())
    }

    fn end(self) -> Result<Node> {
        Ok(Node::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Node;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Node> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Node;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Node> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Node;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_node(value)?);
        Ok(())
    }

    fn end(self) -> Result<Node> {
        let mut map = NodeMap::with_capacity(1);
        map.insert(self.name, Node::Array(self.vec));
        Ok(Node::Object(map))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Node;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match to_node(key)? {
            Node::Scalar(Scalar::String(s)) => {
                self.current_key = Some(s);
                Ok(())
            }
            // Integer keys are common in maps; spell them the way JSON would.
            Node::Scalar(Scalar::Integer(i)) => {
                self.current_key = Some(i.to_string());
                Ok(())
            }
            _ => Err(Error::custom("Map keys must be strings")),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_node(value)?);
        Ok(())
    }

    fn end(self) -> Result<Node> {
        Ok(Node::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Node;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_node(value)?);
        Ok(())
    }

    fn end(self) -> Result<Node> {
        Ok(Node::Object(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Node;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_node(value)?);
        Ok(())
    }

    fn end(self) -> Result<Node> {
        let mut outer = NodeMap::with_capacity(1);
        outer.insert(self.name, Node::Object(self.map));
        Ok(Node::Object(outer))
    }
}

pub(crate) fn to_node<T: Serialize + ?Sized>(value: &T) -> Result<Node> {
    value.serialize(NodeSerializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sjson;
    use serde::Serialize;

    fn compact(node: &Node) -> String {
        node.render("")
    }

    #[test]
    fn test_render_scalars() {
        assert_eq!(compact(&Node::null()), "null");
        assert_eq!(compact(&Node::from(true)), "true");
        assert_eq!(compact(&Node::from(-12)), "-12");
        assert_eq!(compact(&Node::from(0.5)), "0.5");
        assert_eq!(compact(&Node::from(3.0)), "3.0");
        assert_eq!(compact(&Node::from("hi")), "\"hi\"");
        assert_eq!(compact(&Node::new()), "unknown");
    }

    #[test]
    fn test_render_non_finite_as_null() {
        assert_eq!(compact(&Node::from(f64::NAN)), "null");
        assert_eq!(compact(&Node::from(f64::INFINITY)), "null");
    }

    #[test]
    fn test_render_escapes() {
        let node = Node::from("a\"b\\c\nd\te\u{0001}");
        assert_eq!(compact(&node), r#""a\"b\\c\nd\te\u0001""#);

        let mut obj = Node::new();
        obj.insert("k\"ey", 1).unwrap();
        assert_eq!(compact(&obj), r#"{"k\"ey":1}"#);
    }

    #[test]
    fn test_render_empty_containers() {
        assert_eq!(compact(&sjson!([])), "[]");
        assert_eq!(Node::Object(NodeMap::new()).render("  "), "{}");
        assert_eq!(sjson!([[], 1]).render("  "), "[\n  [],\n  1\n]");
    }

    #[test]
    fn test_render_pretty_nested() {
        let doc = sjson!({ {"a", 1}, {"b", [1, 2]} });
        let expected = "{\n  \"a\": 1,\n  \"b\": [\n    1,\n    2\n  ]\n}";
        assert_eq!(doc.render("  "), expected);
    }

    #[test]
    fn test_render_custom_indent() {
        let doc = sjson!([[1]]);
        assert_eq!(doc.render("\t"), "[\n\t[\n\t\t1\n\t]\n]");
    }

    #[test]
    fn test_display() {
        let doc = sjson!([1, "x"]);
        assert_eq!(format!("{}", doc), r#"[1,"x"]"#);
        assert_eq!(format!("{:#}", doc), "[\n  1,\n  \"x\"\n]");
    }

    #[derive(Serialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize)]
    enum Shape {
        Empty,
        Circle(f64),
        Line(i32, i32),
        Rect { w: u32, h: u32 },
    }

    #[test]
    fn test_node_serializer_struct() {
        let node = to_node(&Point { x: 1, y: 2 }).unwrap();
        assert_eq!(node["x"], Node::from(1));
        assert_eq!(node["y"], Node::from(2));
    }

    #[test]
    fn test_node_serializer_enums() {
        assert_eq!(to_node(&Shape::Empty).unwrap(), Node::from("Empty"));
        assert_eq!(to_node(&Shape::Circle(1.5)).unwrap()["Circle"], Node::from(1.5));
        assert_eq!(
            to_node(&Shape::Line(1, 2)).unwrap()["Line"],
            Node::from_values([1, 2])
        );
        assert_eq!(
            to_node(&Shape::Rect { w: 3, h: 4 }).unwrap()["Rect"]["h"],
            Node::from(4)
        );
    }

    #[test]
    fn test_node_serializer_large_u64() {
        assert_eq!(to_node(&u64::MAX).unwrap(), Node::from(u64::MAX as f64));
        assert_eq!(to_node(&7u64).unwrap(), Node::from(7));
    }
}

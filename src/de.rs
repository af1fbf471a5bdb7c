//! Decoding documents from text.
//!
//! This module provides the [`Decoder`], a recursive-descent parser for JSON
//! text producing a [`Node`], and the serde `Deserializer` implementation on
//! [`Node`] itself so any `T: Deserialize` can be read back from a document.
//!
//! ## Accepted input
//!
//! - literals `true`, `false`, `null`
//! - numbers with optional sign, fraction and exponent; integers that fit in
//!   `i64` decode as integers, everything else as doubles
//! - strings with the escapes `\" \\ \/ \b \f \n \r \t` plus `\' \v \a`
//! - arrays and objects, with duplicate keys keeping the last value
//!
//! `\u` escapes are rejected, as are raw control characters inside strings and
//! anything after the top-level value. Every error reports line and column.
//!
//! ```rust
//! use sjson::{ErrorKind, Node};
//!
//! let doc = Node::parse(r#"{"a": [1, 2.5, "x"], "b": null}"#).unwrap();
//! assert_eq!(doc["a"][0].to_integer().unwrap(), 1);
//! assert_eq!(doc["a"][1].to_double().unwrap(), 2.5);
//! assert!(doc["b"].is_null());
//!
//! let err = Node::parse("[1, 2").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Syntax);
//! ```

use crate::{DecodeOptions, Error, Node, NodeMap, Result, Scalar};
use serde::de::{self, IntoDeserializer};
use serde::forward_to_deserialize_any;

/// The text decoder.
///
/// Created via [`Decoder::new`]; most callers use [`Node::parse`] or
/// [`from_str`](crate::from_str).
pub struct Decoder<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Decoder<'a> {
    pub fn new(input: &'a str, options: &DecodeOptions) -> Self {
        Decoder {
            input,
            position: 0,
            line: 1,
            column: 1,
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    /// Decodes the whole input as a single document.
    pub fn decode(mut self) -> Result<Node> {
        tracing::debug!(bytes = self.input.len(), "decoding document");
        self.skip_whitespace();
        let node = self.parse_value()?;
        self.skip_whitespace();
        if let Some(ch) = self.peek_char() {
            return Err(self.error(&format!("trailing characters starting at '{}'", ch)));
        }
        Ok(node)
    }

    fn error(&self, msg: &str) -> Error {
        tracing::trace!(line = self.line, col = self.column, "decode failed: {}", msg);
        Error::syntax(self.line, self.column, msg)
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if matches!(ch, ' ' | '\t' | '\n' | '\r') {
                self.next_char();
            } else {
                break;
            }
        }
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        match self.next_char() {
            Some(ch) if ch == expected => Ok(()),
            Some(ch) => Err(self.error(&format!("expected '{}', found '{}'", expected, ch))),
            None => Err(self.error(&format!("expected '{}', found end of input", expected))),
        }
    }

    fn parse_value(&mut self) -> Result<Node> {
        match self.peek_char() {
            Some('{') => self.parse_object(),
            Some('[') => self.parse_array(),
            Some('"') => Ok(Node::from(self.parse_string()?)),
            Some('t') => self.parse_literal("true", Node::from(true)),
            Some('f') => self.parse_literal("false", Node::from(false)),
            Some('n') => self.parse_literal("null", Node::null()),
            Some(ch) if ch == '-' || ch.is_ascii_digit() => self.parse_number(),
            Some(ch) => Err(self.error(&format!("expected value, found '{}'", ch))),
            None => Err(self.error("expected value, found end of input")),
        }
    }

    fn parse_literal(&mut self, word: &str, node: Node) -> Result<Node> {
        if self.input[self.position..].starts_with(word) {
            for _ in 0..word.len() {
                self.next_char();
            }
            Ok(node)
        } else {
            Err(self.error(&format!("expected '{}'", word)))
        }
    }

    fn parse_number(&mut self) -> Result<Node> {
        let start = self.position;

        if self.peek_char() == Some('-') {
            self.next_char();
        }

        match self.peek_char() {
            Some('0') => {
                self.next_char();
            }
            Some(ch) if ch.is_ascii_digit() => self.skip_digits(),
            _ => return Err(self.error("expected digit")),
        }

        let mut is_integer = true;
        if self.peek_char() == Some('.') {
            is_integer = false;
            self.next_char();
            self.require_digits("expected digit after decimal point")?;
        }
        if matches!(self.peek_char(), Some('e') | Some('E')) {
            is_integer = false;
            self.next_char();
            if matches!(self.peek_char(), Some('+') | Some('-')) {
                self.next_char();
            }
            self.require_digits("expected digit in exponent")?;
        }

        let text = &self.input[start..self.position];
        if is_integer {
            if let Ok(i) = text.parse::<i64>() {
                return Ok(Node::from(i));
            }
        }
        text.parse::<f64>()
            .map(Node::from)
            .map_err(|_| self.error(&format!("invalid number '{}'", text)))
    }

    fn skip_digits(&mut self) {
        while matches!(self.peek_char(), Some(ch) if ch.is_ascii_digit()) {
            self.next_char();
        }
    }

    fn require_digits(&mut self, msg: &str) -> Result<()> {
        match self.peek_char() {
            Some(ch) if ch.is_ascii_digit() => {
                self.skip_digits();
                Ok(())
            }
            _ => Err(self.error(msg)),
        }
    }

    fn parse_string(&mut self) -> Result<String> {
        self.expect('"')?;
        let mut result = String::new();
        loop {
            match self.next_char() {
                Some('"') => return Ok(result),
                Some('\\') => match self.next_char() {
                    Some(ch @ ('"' | '\\' | '/' | '\'')) => result.push(ch),
                    Some('b') => result.push('\u{0008}'),
                    Some('f') => result.push('\u{000C}'),
                    Some('n') => result.push('\n'),
                    Some('r') => result.push('\r'),
                    Some('t') => result.push('\t'),
                    Some('v') => result.push('\u{000B}'),
                    Some('a') => result.push('\u{0007}'),
                    Some('u') => return Err(self.error("unicode escapes are not supported")),
                    Some(other) => {
                        return Err(self.error(&format!("invalid escape '\\{}'", other)))
                    }
                    None => return Err(self.error("unterminated string")),
                },
                Some(ch) if (ch as u32) < 0x20 => {
                    return Err(self.error("control character in string"))
                }
                Some(ch) => result.push(ch),
                None => return Err(self.error("unterminated string")),
            }
        }
    }

    fn enter_nested(&mut self) -> Result<()> {
        if self.depth >= self.max_depth {
            return Err(self.error("recursion limit exceeded"));
        }
        self.depth += 1;
        Ok(())
    }

    fn parse_array(&mut self) -> Result<Node> {
        self.expect('[')?;
        self.enter_nested()?;
        let mut items = Vec::new();

        self.skip_whitespace();
        if self.peek_char() == Some(']') {
            self.next_char();
            self.depth -= 1;
            return Ok(Node::Array(items));
        }

        loop {
            self.skip_whitespace();
            items.push(self.parse_value()?);
            self.skip_whitespace();
            match self.next_char() {
                Some(',') => continue,
                Some(']') => break,
                Some(ch) => return Err(self.error(&format!("expected ',' or ']', found '{}'", ch))),
                None => return Err(self.error("unterminated array")),
            }
        }

        self.depth -= 1;
        Ok(Node::Array(items))
    }

    fn parse_object(&mut self) -> Result<Node> {
        self.expect('{')?;
        self.enter_nested()?;
        let mut map = NodeMap::new();

        self.skip_whitespace();
        if self.peek_char() == Some('}') {
            self.next_char();
            self.depth -= 1;
            return Ok(Node::Object(map));
        }

        loop {
            self.skip_whitespace();
            if self.peek_char() != Some('"') {
                return Err(self.error("expected string key"));
            }
            let key = self.parse_string()?;
            self.skip_whitespace();
            self.expect(':')?;
            self.skip_whitespace();
            let value = self.parse_value()?;
            map.insert(key, value);
            self.skip_whitespace();
            match self.next_char() {
                Some(',') => continue,
                Some('}') => break,
                Some(ch) => return Err(self.error(&format!("expected ',' or '}}', found '{}'", ch))),
                None => return Err(self.error("unterminated object")),
            }
        }

        self.depth -= 1;
        Ok(Node::Object(map))
    }
}

impl Node {
    /// Decodes a document from text with default options.
    pub fn parse(text: &str) -> Result<Node> {
        Self::parse_with_options(text, &DecodeOptions::default())
    }

    pub fn parse_with_options(text: &str, options: &DecodeOptions) -> Result<Node> {
        Decoder::new(text, options).decode()
    }
}

impl std::str::FromStr for Node {
    type Err = Error;

    fn from_str(s: &str) -> Result<Node> {
        Node::parse(s)
    }
}

impl<'de> de::Deserializer<'de> for Node {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self {
            Node::Scalar(Scalar::Untyped) | Node::Scalar(Scalar::Null) => visitor.visit_unit(),
            Node::Scalar(Scalar::Boolean(b)) => visitor.visit_bool(b),
            Node::Scalar(Scalar::Integer(i)) => visitor.visit_i64(i),
            Node::Scalar(Scalar::Double(d)) => visitor.visit_f64(d),
            Node::Scalar(Scalar::String(s)) => visitor.visit_string(s),
            Node::Array(items) => visitor.visit_seq(SeqDeserializer::new(items)),
            Node::Object(map) => visitor.visit_map(MapDeserializer::new(map)),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self {
            Node::Scalar(Scalar::Untyped) | Node::Scalar(Scalar::Null) => visitor.visit_none(),
            other => visitor.visit_some(other),
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self {
            Node::Scalar(Scalar::String(variant)) => {
                visitor.visit_enum(EnumDeserializer::new(variant, None))
            }
            Node::Object(map) if map.len() == 1 => {
                let mut iter = map.into_iter();
                match iter.next() {
                    Some((variant, value)) => {
                        visitor.visit_enum(EnumDeserializer::new(variant, Some(value)))
                    }
                    None => Err(Error::custom("Expected enum variant")),
                }
            }
            other => Err(Error::type_mismatch("enum", other.type_name())),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}

impl<'de> IntoDeserializer<'de, Error> for Node {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self::Deserializer {
        self
    }
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<Node>,
}

impl SeqDeserializer {
    fn new(vec: Vec<Node>) -> Self {
        SeqDeserializer {
            iter: vec.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(node) => seed.deserialize(node).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct MapDeserializer {
    iter: indexmap::map::IntoIter<String, Node>,
    value: Option<Node>,
}

impl MapDeserializer {
    fn new(map: NodeMap) -> Self {
        MapDeserializer {
            iter: map.into_iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(Node::from(key)).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(node) => seed.deserialize(node),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct EnumDeserializer {
    variant: String,
    value: Option<Node>,
}

impl EnumDeserializer {
    fn new(variant: String, value: Option<Node>) -> Self {
        EnumDeserializer { variant, value }
    }
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(Node::from(self.variant))?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: Option<Node>,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            None => Ok(()),
            Some(node) if node.is_null() => Ok(()),
            Some(_) => Err(Error::custom("Expected unit variant")),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.value {
            Some(node) => seed.deserialize(node),
            None => Err(Error::custom("Expected newtype variant")),
        }
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(Node::Array(items)) => visitor.visit_seq(SeqDeserializer::new(items)),
            _ => Err(Error::custom("Expected tuple variant")),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(Node::Object(map)) => visitor.visit_map(MapDeserializer::new(map)),
            _ => Err(Error::custom("Expected struct variant")),
        }
    }
}

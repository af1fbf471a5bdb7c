//! Leaf values of a document.
//!
//! A [`Scalar`] holds exactly one payload out of a closed set of kinds. Reads
//! are kind-checked: asking an integer for a string fails with
//! [`Error::TypeMismatch`](crate::Error::TypeMismatch). Null and never-assigned
//! scalars are the exception, they satisfy any read and hand back the
//! requested kind's default value.
//!
//! ```rust
//! use sjson::Scalar;
//!
//! let n = Scalar::from(42);
//! assert_eq!(n.to_integer().unwrap(), 42);
//! assert!(n.to_str().is_err());
//!
//! let null = Scalar::Null;
//! assert_eq!(null.to_integer().unwrap(), 0);
//! assert_eq!(null.to_str().unwrap(), "");
//! ```

use crate::{Error, Result};
use std::fmt;

/// Marker rendered for a scalar that was never assigned.
pub const UNTYPED_MARKER: &str = "unknown";

/// The active kind of a [`Scalar`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Untyped,
    Null,
    Boolean,
    Integer,
    Double,
    String,
}

impl ScalarKind {
    /// Short lowercase name used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ScalarKind::Untyped => "untyped",
            ScalarKind::Null => "null",
            ScalarKind::Boolean => "boolean",
            ScalarKind::Integer => "integer",
            ScalarKind::Double => "double",
            ScalarKind::String => "string",
        }
    }

    /// Whether this kind satisfies every kind check.
    #[inline]
    #[must_use]
    pub const fn is_degenerate(self) -> bool {
        matches!(self, ScalarKind::Untyped | ScalarKind::Null)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single leaf value.
///
/// # Examples
///
/// ```rust
/// use sjson::{Scalar, ScalarKind};
///
/// let mut s = Scalar::default();
/// assert!(s.is_empty());
///
/// s.set(3.5);
/// assert_eq!(s.kind(), ScalarKind::Double);
/// assert_eq!(s.to_double().unwrap(), 3.5);
///
/// s.clear();
/// assert_eq!(s.kind(), ScalarKind::Untyped);
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Scalar {
    #[default]
    Untyped,
    Null,
    Boolean(bool),
    Integer(i64),
    Double(f64),
    String(String),
}

impl Scalar {
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Untyped => ScalarKind::Untyped,
            Scalar::Null => ScalarKind::Null,
            Scalar::Boolean(_) => ScalarKind::Boolean,
            Scalar::Integer(_) => ScalarKind::Integer,
            Scalar::Double(_) => ScalarKind::Double,
            Scalar::String(_) => ScalarKind::String,
        }
    }

    /// Returns `true` if no payload was ever stored.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Scalar::Untyped)
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Replaces the payload, switching the active kind.
    pub fn set<T: Into<Scalar>>(&mut self, value: T) {
        *self = value.into();
    }

    /// Resets to the untyped state.
    ///
    /// Both the payload and the kind are dropped, matching
    /// [`Node::clear`](crate::Node::clear).
    pub fn clear(&mut self) {
        *self = Scalar::Untyped;
    }

    /// Fails with a type mismatch unless the active kind is `kind`, null or untyped.
    pub fn ensure_is(&self, kind: ScalarKind) -> Result<()> {
        let active = self.kind();
        if active == kind || active.is_degenerate() {
            Ok(())
        } else {
            Err(Error::type_mismatch(kind.name(), active.name()))
        }
    }

    /// Coarse type name: both numeric kinds report `"number"`.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Scalar::Integer(_) | Scalar::Double(_) => "number",
            Scalar::Boolean(_) => "boolean",
            Scalar::String(_) => "string",
            Scalar::Null => "null",
            Scalar::Untyped => ScalarKind::Untyped.name(),
        }
    }

    pub fn to_bool(&self) -> Result<bool> {
        self.ensure_is(ScalarKind::Boolean)?;
        Ok(match self {
            Scalar::Boolean(b) => *b,
            _ => false,
        })
    }

    pub fn to_integer(&self) -> Result<i64> {
        self.ensure_is(ScalarKind::Integer)?;
        Ok(match self {
            Scalar::Integer(i) => *i,
            _ => 0,
        })
    }

    pub fn to_double(&self) -> Result<f64> {
        self.ensure_is(ScalarKind::Double)?;
        Ok(match self {
            Scalar::Double(d) => *d,
            _ => 0.0,
        })
    }

    pub fn to_str(&self) -> Result<&str> {
        self.ensure_is(ScalarKind::String)?;
        Ok(match self {
            Scalar::String(s) => s.as_str(),
            _ => "",
        })
    }

    /// Mutable access to a boolean payload.
    ///
    /// A null or untyped scalar becomes `Boolean(false)` first.
    pub fn bool_mut(&mut self) -> Result<&mut bool> {
        self.ensure_is(ScalarKind::Boolean)?;
        if self.kind().is_degenerate() {
            *self = Scalar::Boolean(false);
        }
        match self {
            Scalar::Boolean(b) => Ok(b),
            other => Err(Error::type_mismatch("boolean", other.kind().name())),
        }
    }

    /// Mutable access to an integer payload, materializing `0` when degenerate.
    pub fn integer_mut(&mut self) -> Result<&mut i64> {
        self.ensure_is(ScalarKind::Integer)?;
        if self.kind().is_degenerate() {
            *self = Scalar::Integer(0);
        }
        match self {
            Scalar::Integer(i) => Ok(i),
            other => Err(Error::type_mismatch("integer", other.kind().name())),
        }
    }

    /// Mutable access to a double payload, materializing `0.0` when degenerate.
    pub fn double_mut(&mut self) -> Result<&mut f64> {
        self.ensure_is(ScalarKind::Double)?;
        if self.kind().is_degenerate() {
            *self = Scalar::Double(0.0);
        }
        match self {
            Scalar::Double(d) => Ok(d),
            other => Err(Error::type_mismatch("double", other.kind().name())),
        }
    }

    /// Mutable access to a string payload, materializing `""` when degenerate.
    pub fn string_mut(&mut self) -> Result<&mut String> {
        self.ensure_is(ScalarKind::String)?;
        if self.kind().is_degenerate() {
            *self = Scalar::String(String::new());
        }
        match self {
            Scalar::String(s) => Ok(s),
            other => Err(Error::type_mismatch("string", other.kind().name())),
        }
    }

    /// Renders the payload as text.
    ///
    /// Strings come back raw, without quotes or escaping. Doubles always keep a
    /// fractional part or exponent so they never read back as integers.
    ///
    /// ```rust
    /// use sjson::Scalar;
    ///
    /// assert_eq!(Scalar::from(1.0).to_text(), "1.0");
    /// assert_eq!(Scalar::from(7).to_text(), "7");
    /// assert_eq!(Scalar::Untyped.to_text(), "unknown");
    /// ```
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Scalar::Untyped => UNTYPED_MARKER.to_string(),
            Scalar::Null => "null".to_string(),
            Scalar::Boolean(b) => b.to_string(),
            Scalar::Integer(i) => i.to_string(),
            Scalar::Double(d) => format_double(*d),
            Scalar::String(s) => s.clone(),
        }
    }
}

/// `{:?}` on `f64` is the shortest round-trip form and keeps `.0` on whole numbers.
pub(crate) fn format_double(d: f64) -> String {
    if d.is_nan() {
        "NaN".to_string()
    } else if d == f64::INFINITY {
        "Infinity".to_string()
    } else if d == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        format!("{:?}", d)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<()> for Scalar {
    fn from(_: ()) -> Self {
        Scalar::Null
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Boolean(value)
    }
}

impl From<i8> for Scalar {
    fn from(value: i8) -> Self {
        Scalar::Integer(value as i64)
    }
}

impl From<i16> for Scalar {
    fn from(value: i16) -> Self {
        Scalar::Integer(value as i64)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Integer(value as i64)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Integer(value)
    }
}

impl From<u8> for Scalar {
    fn from(value: u8) -> Self {
        Scalar::Integer(value as i64)
    }
}

impl From<u16> for Scalar {
    fn from(value: u16) -> Self {
        Scalar::Integer(value as i64)
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Scalar::Integer(value as i64)
    }
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Scalar::Double(value as f64)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Double(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::String(value)
    }
}

impl TryFrom<Scalar> for bool {
    type Error = Error;

    fn try_from(value: Scalar) -> Result<Self> {
        value.to_bool()
    }
}

impl TryFrom<Scalar> for i64 {
    type Error = Error;

    fn try_from(value: Scalar) -> Result<Self> {
        value.to_integer()
    }
}

impl TryFrom<Scalar> for f64 {
    type Error = Error;

    fn try_from(value: Scalar) -> Result<Self> {
        value.to_double()
    }
}

impl TryFrom<Scalar> for String {
    type Error = Error;

    fn try_from(value: Scalar) -> Result<Self> {
        value.ensure_is(ScalarKind::String)?;
        Ok(match value {
            Scalar::String(s) => s,
            _ => String::new(),
        })
    }
}

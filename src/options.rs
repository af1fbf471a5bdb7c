//! Configuration options for rendering and decoding.
//!
//! - [`RenderOptions`]: the indent unit used by the renderer
//! - [`DecodeOptions`]: limits applied by the decoder
//!
//! ## Examples
//!
//! ```rust
//! use sjson::{sjson, RenderOptions};
//!
//! let doc = sjson!([1, 2]);
//!
//! assert_eq!(doc.render_with(&RenderOptions::compact()), "[1,2]");
//! assert_eq!(
//!     doc.render_with(&RenderOptions::new().with_indent("\t")),
//!     "[\n\t1,\n\t2\n]"
//! );
//! ```

/// Indent unit used when none is given.
pub const DEFAULT_INDENT: &str = "  ";

/// Nesting depth at which the decoder gives up.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Rendering configuration.
///
/// An empty indent unit produces compact single-line output. Any other unit
/// pretty-prints, repeating the unit once per nesting level.
///
/// # Examples
///
/// ```rust
/// use sjson::RenderOptions;
///
/// let options = RenderOptions::new();
/// assert_eq!(options.indent, "  ");
/// assert!(options.is_pretty());
///
/// assert!(!RenderOptions::compact().is_pretty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub indent: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            indent: DEFAULT_INDENT.to_string(),
        }
    }
}

impl RenderOptions {
    /// Pretty output with the default two-space indent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pretty() -> Self {
        Self::default()
    }

    /// Single-line output with no inserted whitespace.
    #[must_use]
    pub fn compact() -> Self {
        RenderOptions {
            indent: String::new(),
        }
    }

    #[must_use]
    pub fn with_indent(mut self, indent: &str) -> Self {
        self.indent = indent.to_string();
        self
    }

    #[inline]
    #[must_use]
    pub fn is_pretty(&self) -> bool {
        !self.indent.is_empty()
    }
}

/// Decoding configuration.
///
/// # Examples
///
/// ```rust
/// use sjson::{DecodeOptions, Node};
///
/// let options = DecodeOptions::new().with_max_depth(2);
/// assert!(Node::parse_with_options("[[1]]", &options).is_ok());
/// assert!(Node::parse_with_options("[[[1]]]", &options).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeOptions {
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DecodeOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the deepest array/object nesting accepted.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

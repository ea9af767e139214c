//! Path expressions addressing a single node inside a JSON document.
//!
//! Paths are dot-separated object keys with optional bracketed array
//! indices, e.g. `values.pumps[2].limits`. A path resolves to at most one
//! node; a resolution miss is reported to the caller, never skipped.

use serde_json::Value;

/// One step of a parsed path.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Descend into an object member by name.
    Key(String),
    /// Descend into an array element by position.
    Index(usize),
}

/// A parsed path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonPath {
    /// The original expression, kept for display.
    raw: String,
    segments: Vec<Segment>,
}

impl JsonPath {
    /// Parse a path expression into segments.
    ///
    /// # Errors
    ///
    /// Returns [`PathParseError`] when the expression is empty, contains an
    /// empty segment (`a..b`), an unclosed bracket, or a non-numeric index.
    pub fn parse(expression: &str) -> Result<Self, PathParseError> {
        if expression.is_empty() {
            return Err(PathParseError::Empty);
        }

        let mut segments = Vec::new();
        for part in expression.split('.') {
            let (key, indices) = split_indices(part)?;
            if key.is_empty() {
                return Err(PathParseError::EmptySegment {
                    expression: expression.to_string(),
                });
            }
            segments.push(Segment::Key(key.to_string()));
            segments.extend(indices.into_iter().map(Segment::Index));
        }

        Ok(Self {
            raw: expression.to_string(),
            segments,
        })
    }

    /// The original expression text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Resolve the path against a document root.
    ///
    /// Returns `None` when any segment fails to match: a missing member, an
    /// out-of-range index, or descending into a node of the wrong shape.
    #[must_use]
    pub fn resolve<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        let mut node = root;
        for segment in &self.segments {
            node = match segment {
                Segment::Key(key) => node.as_object()?.get(key)?,
                Segment::Index(idx) => node.as_array()?.get(*idx)?,
            };
        }
        Some(node)
    }

    /// Resolve the path against a mutable document root.
    #[must_use]
    pub fn resolve_mut<'a>(&self, root: &'a mut Value) -> Option<&'a mut Value> {
        let mut node = root;
        for segment in &self.segments {
            node = match segment {
                Segment::Key(key) => node.as_object_mut()?.get_mut(key)?,
                Segment::Index(idx) => node.as_array_mut()?.get_mut(*idx)?,
            };
        }
        Some(node)
    }
}

impl std::fmt::Display for JsonPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl std::str::FromStr for JsonPath {
    type Err = PathParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Split `key[i][j]…` into the leading key and its trailing indices.
fn split_indices(part: &str) -> Result<(&str, Vec<usize>), PathParseError> {
    let Some(open) = part.find('[') else {
        return Ok((part, Vec::new()));
    };

    let (key, mut rest) = part.split_at(open);
    let mut indices = Vec::new();
    while !rest.is_empty() {
        let inner = rest
            .strip_prefix('[')
            .ok_or_else(|| PathParseError::UnexpectedCharacter {
                segment: part.to_string(),
            })?;
        let close = inner
            .find(']')
            .ok_or_else(|| PathParseError::UnclosedBracket {
                segment: part.to_string(),
            })?;
        let index = inner[..close]
            .parse::<usize>()
            .map_err(|_| PathParseError::InvalidIndex {
                segment: part.to_string(),
            })?;
        indices.push(index);
        rest = &inner[close + 1..];
    }
    Ok((key, indices))
}

/// Errors raised when parsing a path expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathParseError {
    /// The expression was the empty string.
    #[error("empty path expression")]
    Empty,

    /// Two consecutive dots, or a segment reduced to bare brackets.
    #[error("empty segment in path expression '{expression}'")]
    EmptySegment {
        /// The full offending expression.
        expression: String,
    },

    /// A `[` without a matching `]`.
    #[error("unclosed bracket in path segment '{segment}'")]
    UnclosedBracket {
        /// The offending segment.
        segment: String,
    },

    /// Bracket content that is not a base-10 array index.
    #[error("invalid array index in path segment '{segment}'")]
    InvalidIndex {
        /// The offending segment.
        segment: String,
    },

    /// Text between or after bracket groups.
    #[error("unexpected character after bracket in path segment '{segment}'")]
    UnexpectedCharacter {
        /// The offending segment.
        segment: String,
    },
}

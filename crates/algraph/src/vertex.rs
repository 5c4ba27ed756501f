//! Vertex identity.

use std::borrow::Borrow;
use std::fmt;

/// A graph vertex: an immutable string label compared by value.
///
/// Vertices carry no behavior of their own. Two vertices are the same vertex iff their labels
/// are equal, so a `Vertex` can be rebuilt from its label at any time and still address the
/// same entry of a [`Graph`](crate::Graph).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vertex(String);

impl Vertex {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

// `Hash` is derived over the inner `String`, which hashes like `str`, so `&str` lookups
// against `Vertex` keys are sound.
impl Borrow<str> for Vertex {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Vertex {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Vertex {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<String> for Vertex {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl PartialEq<str> for Vertex {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Vertex {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

//! Graph configuration options.

/// Construction-time behavior switches for a [`Graph`](super::Graph).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphOptions {
    /// Register unknown edge endpoints on demand in `add_edge` instead of rejecting them
    /// with [`Error::UnknownVertex`](crate::Error::UnknownVertex).
    pub implicit_vertices: bool,
}

//! The [`Graph`] container.
//!
//! Storage is one insertion-ordered map from each known vertex to its [`VertexEntry`]: the
//! ordered successor sequence plus the successor → weight map of that vertex. Incoming edges
//! are not indexed, so `remove_vertex` and `predecessors` scan every vertex.

mod entry;
mod options;
mod seq;

use crate::{Error, Result, Vertex};
use entry::VertexEntry;
use indexmap::map::Entry;
use rustc_hash::FxBuildHasher;

pub use options::GraphOptions;

type IndexMap<K, V> = indexmap::IndexMap<K, V, FxBuildHasher>;

/// Weight reported by [`Graph::get_edge_value`] when there is no such edge.
///
/// Stored weights are never equal to it.
pub const ZERO_WEIGHT: f32 = 0.0;

#[derive(Debug, Clone, Default)]
pub struct Graph {
    options: GraphOptions,
    vertices: IndexMap<Vertex, VertexEntry>,
}

fn unknown_vertex(vertex: &str) -> Error {
    tracing::debug!(vertex, "unknown vertex");
    Error::unknown_vertex(vertex)
}

fn check_weight(weight: f32) -> Result<()> {
    if weight == ZERO_WEIGHT {
        tracing::debug!(weight, "rejected reserved edge weight");
        return Err(Error::InvalidWeight);
    }
    Ok(())
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: GraphOptions) -> Self {
        Self {
            options,
            vertices: IndexMap::default(),
        }
    }

    /// Builds a graph from `(from, to, weight)` triples, registering endpoints as they appear.
    ///
    /// The returned graph uses default options. Fails with [`Error::InvalidWeight`] on the
    /// first zero weight.
    pub fn from_edges<I, V>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, V, f32)>,
        V: Into<Vertex>,
    {
        Self::from_edges_with_options(GraphOptions::default(), edges)
    }

    /// Like [`Graph::from_edges`], keeping `options` for later mutations.
    pub fn from_edges_with_options<I, V>(options: GraphOptions, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, V, f32)>,
        V: Into<Vertex>,
    {
        let mut g = Self::with_options(options);
        for (from, to, weight) in edges {
            let (from, to) = (from.into(), to.into());
            g.add_vertex(from.clone()).add_vertex(to.clone());
            g.add_edge(from, to, weight)?;
        }
        Ok(g)
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn is_implicit(&self) -> bool {
        self.options.implicit_vertices
    }

    fn entry(&self, x: &str) -> Result<&VertexEntry> {
        self.vertices.get(x).ok_or_else(|| unknown_vertex(x))
    }

    fn entry_mut(&mut self, x: &str) -> Result<&mut VertexEntry> {
        self.vertices.get_mut(x).ok_or_else(|| unknown_vertex(x))
    }

    pub fn has_vertex(&self, x: &str) -> bool {
        self.vertices.contains_key(x)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of distinct `(from, to)` pairs. Parallel successor entries count once.
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(|e| e.weights.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Known vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.keys()
    }

    /// Every edge as `(from, to, weight)`, grouped by source in vertex insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&Vertex, &Vertex, f32)> {
        self.vertices
            .iter()
            .flat_map(|(from, e)| e.distinct_edges().map(move |(to, w)| (from, to, w)))
    }

    /// Tests whether there is an edge `x -> y`.
    pub fn adjacent(&self, x: &str, y: &str) -> Result<bool> {
        Ok(seq::contains(&self.entry(x)?.successors, y))
    }

    /// Direct successors of `x` in insertion order, including parallel entries.
    pub fn neighbors(&self, x: &str) -> Result<&[Vertex]> {
        Ok(self.entry(x)?.successors.as_slice())
    }

    /// Vertices with an edge into `x`, in vertex insertion order.
    pub fn predecessors(&self, x: &str) -> Result<Vec<&Vertex>> {
        if !self.has_vertex(x) {
            return Err(unknown_vertex(x));
        }
        Ok(self
            .vertices
            .iter()
            .filter(|(_, e)| seq::contains(&e.successors, x))
            .map(|(v, _)| v)
            .collect())
    }

    /// Adds `x` with no edges. A vertex that is already known keeps its edges.
    pub fn add_vertex(&mut self, x: impl Into<Vertex>) -> &mut Self {
        if let Entry::Vacant(slot) = self.vertices.entry(x.into()) {
            tracing::trace!(vertex = %slot.key(), "add vertex");
            slot.insert(VertexEntry::default());
        }
        self
    }

    /// Removes `x` along with every edge leaving or entering it.
    pub fn remove_vertex(&mut self, x: &str) -> Result<()> {
        let Some((vertex, removed)) = self.vertices.shift_remove_entry(x) else {
            return Err(unknown_vertex(x));
        };
        let mut incoming = 0usize;
        for e in self.vertices.values_mut() {
            if e.unlink(x) {
                incoming += 1;
            }
        }
        tracing::trace!(
            vertex = %vertex,
            outgoing = removed.weights.len(),
            incoming,
            "remove vertex"
        );
        Ok(())
    }

    /// Adds the edge `x -> y`, overwriting the weight if the edge already exists.
    ///
    /// Both endpoints must be known unless [`GraphOptions::implicit_vertices`] is set. The
    /// successor sequence of `x` gains one entry per call, so re-adding an edge leaves a
    /// parallel entry behind.
    pub fn add_edge(
        &mut self,
        x: impl Into<Vertex>,
        y: impl Into<Vertex>,
        weight: f32,
    ) -> Result<()> {
        check_weight(weight)?;
        let (x, y) = (x.into(), y.into());
        if self.options.implicit_vertices {
            self.add_vertex(x.clone()).add_vertex(y.clone());
        } else if !self.has_vertex(y.as_str()) {
            // Report the source first when both ends are missing.
            if !self.has_vertex(x.as_str()) {
                return Err(unknown_vertex(x.as_str()));
            }
            return Err(unknown_vertex(y.as_str()));
        }
        let entry = self.entry_mut(x.as_str())?;
        tracing::trace!(from = %x, to = %y, weight, "add edge");
        entry.link(y, weight);
        Ok(())
    }

    /// Removes the edge `x -> y`. Returns `false` when there was no such edge.
    pub fn remove_edge(&mut self, x: &str, y: &str) -> Result<bool> {
        let removed = self.entry_mut(x)?.unlink(y);
        if removed {
            tracing::trace!(from = x, to = y, "remove edge");
        }
        Ok(removed)
    }

    /// Weight of `x -> y`, or [`ZERO_WEIGHT`] when there is no such edge.
    pub fn get_edge_value(&self, x: &str, y: &str) -> Result<f32> {
        Ok(self.edge_value(x, y)?.unwrap_or(ZERO_WEIGHT))
    }

    pub fn edge_value(&self, x: &str, y: &str) -> Result<Option<f32>> {
        Ok(self.entry(x)?.weight(y))
    }

    /// Sets the weight of the existing edge `x -> y`.
    pub fn set_edge_value(&mut self, x: &str, y: &str, weight: f32) -> Result<()> {
        check_weight(weight)?;
        let Some(slot) = self.entry_mut(x)?.weights.get_mut(y) else {
            tracing::debug!(from = x, to = y, "missing edge");
            return Err(Error::EdgeNotFound {
                from: Vertex::from(x),
                to: Vertex::from(y),
            });
        };
        *slot = weight;
        tracing::trace!(from = x, to = y, weight, "set edge value");
        Ok(())
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }
}

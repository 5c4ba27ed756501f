//! Per-vertex storage for [`Graph`](super::Graph).
//!
//! The successor sequence and the weight map of one source vertex live in the same record,
//! so an edge is always added to or removed from both together.

use super::seq;
use crate::Vertex;
use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone, Default)]
pub(in crate::graph) struct VertexEntry {
    /// Direct successors in insertion order. Repeated `add_edge` calls leave parallel entries.
    pub(in crate::graph) successors: Vec<Vertex>,
    /// One weight per distinct successor.
    pub(in crate::graph) weights: HashMap<Vertex, f32>,
}

impl VertexEntry {
    pub(in crate::graph) fn weight(&self, to: &str) -> Option<f32> {
        self.weights.get(to).copied()
    }

    pub(in crate::graph) fn link(&mut self, to: Vertex, weight: f32) {
        self.successors.push(to.clone());
        self.weights.insert(to, weight);
    }

    /// Drops every successor entry for `to` together with its weight.
    pub(in crate::graph) fn unlink(&mut self, to: &str) -> bool {
        let mut removed = false;
        while seq::remove_first(&mut self.successors, to) {
            removed = true;
        }
        self.weights.remove(to).is_some() || removed
    }

    /// Distinct successors in order of first appearance, paired with their weight.
    pub(in crate::graph) fn distinct_edges(&self) -> impl Iterator<Item = (&Vertex, f32)> {
        self.successors
            .iter()
            .enumerate()
            .filter(|&(ix, to)| !seq::contains(&self.successors[..ix], to.as_str()))
            .filter_map(|(_, to)| self.weight(to.as_str()).map(|w| (to, w)))
    }
}

//! Successor sequence helpers.

use crate::Vertex;

pub(in crate::graph) fn contains(seq: &[Vertex], v: &str) -> bool {
    seq.iter().any(|n| n.as_str() == v)
}

/// Removes the first occurrence of `v`, keeping the relative order of the rest.
pub(in crate::graph) fn remove_first(seq: &mut Vec<Vertex>, v: &str) -> bool {
    let Some(ix) = seq.iter().position(|n| n.as_str() == v) else {
        return false;
    };
    seq.remove(ix);
    true
}

#![forbid(unsafe_code)]

//! Directed, weighted graph container.
//!
//! A [`Graph`] holds string-labelled [`Vertex`] values and weighted directed edges between
//! them. It answers adjacency queries (`adjacent`, `neighbors`, `get_edge_value`) and supports
//! incremental mutation (`add_vertex`, `remove_vertex`, `add_edge`, `remove_edge`,
//! `set_edge_value`). Traversals and graph-wide analytics are out of scope.
//!
//! Edge weights are `f32` and never zero: `get_edge_value` reports `0.0` for a missing edge.
//! Use [`Graph::edge_value`] for the `Option` form of the same query.

pub mod error;
pub mod graph;
pub mod vertex;

pub use error::{Error, Result};
pub use graph::{Graph, GraphOptions, ZERO_WEIGHT};
pub use vertex::Vertex;

use crate::Vertex;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("vertex `{vertex}` is not in the graph")]
    UnknownVertex { vertex: Vertex },

    #[error("edge weight must be non-zero (zero is reserved for a missing edge)")]
    InvalidWeight,

    #[error("there is no edge `{from}` -> `{to}` in the graph")]
    EdgeNotFound { from: Vertex, to: Vertex },
}

impl Error {
    pub(crate) fn unknown_vertex(vertex: impl Into<Vertex>) -> Self {
        Self::UnknownVertex {
            vertex: vertex.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

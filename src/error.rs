//! Errors raised while building or coloring a graph.

use crate::graph::VertexId;
use thiserror::Error;

/// Result type of the fallible operations of this crate.
pub type Result<T> = std::result::Result<T, ColorError>;

/// Fatal conditions met while building or coloring a graph.
///
/// None of them can be retried: they indicate either a malformed
/// construction or a graph that is not planar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// An edge was added in one direction only.
    #[error("edge {from} -> {to} has no reverse edge")]
    HalfEdge {
        /// Vertex owning the edge.
        from: VertexId,
        /// Target of the edge.
        to: VertexId,
    },
    /// A vertex handle that does not belong to this graph.
    #[error("{0} does not belong to this graph")]
    ForeignVertex(VertexId),
    /// An edge from a vertex to itself.
    #[error("self loop on {0}")]
    SelfLoop(VertexId),
    /// Two vertices chosen for identification are already adjacent.
    #[error("cannot identify adjacent vertices {a} and {b}")]
    AdjacentContraction {
        /// Surviving vertex.
        a: VertexId,
        /// Vertex merged into `a`.
        b: VertexId,
    },
    /// Both buckets are empty while vertices remain.
    #[error("reduction stalled with {remaining} vertices left, the graph is not planar")]
    Stalled {
        /// Number of vertices neither removed nor merged.
        remaining: usize,
    },
    /// Every color is taken by the neighbors of a restored vertex.
    #[error("no free color for {0}")]
    NoFreeColor(VertexId),
    /// A merge was unwound before its surviving vertex got a color.
    #[error("{from} merged into uncolored {into}")]
    UncoloredPartner {
        /// Surviving vertex.
        into: VertexId,
        /// Vertex that was merged.
        from: VertexId,
    },
    /// The graph was already colored, and the reduction consumed its adjacency.
    #[error("graph already colored")]
    AlreadyColored,
}

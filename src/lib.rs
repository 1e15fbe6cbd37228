//! Constructive five-coloring of planar graphs.
//!
//! The graph is built incrementally, then colored in one pass that
//! follows the proof of the five color theorem: vertices of degree at most
//! 4 are removed one by one, and when none is left a vertex of degree 5 is
//! removed while two of its non-adjacent neighbors are identified. Colors
//! are then given back in the reverse order of the removals.
//!
//! The order in which each vertex lists its neighbors matters: it must be
//! the cyclic order of a planar embedding, all vertices turning the same
//! way. [`FiveColor::add_edge`] puts the new edge at the head of the list,
//! so each vertex should add its edges in clockwise order for its list to
//! be counterclockwise, or the other way around. Planarity is not checked.
//!
//!```
//!use five_color::FiveColor;
//!
//!// A hub linked to a cycle of 5 vertices, given counterclockwise
//!let mut g = FiveColor::new();
//!let hub = g.create_vertex();
//!let rim: Vec<_> = (0..5).map(|_| g.create_vertex()).collect();
//!for i in (0..5).rev() {
//!    g.add_edge(hub, rim[i]).unwrap();
//!}
//!for i in 0..5 {
//!    let (next, prev) = (rim[(i + 1) % 5], rim[(i + 4) % 5]);
//!    for w in [prev, hub, next] {
//!        g.add_edge(rim[i], w).unwrap();
//!    }
//!}
//!g.color().unwrap();
//!
//!let c = g.color_of(hub).unwrap();
//!assert!(rim.iter().all(|&r| g.color_of(r) != Some(c)));
//!assert!(g.is_proper_coloring());
//!
//!// The same graph from its rotation system
//!let mut wheel = FiveColor::from_rotations(&five_color::example::wheel(5)).unwrap();
//!let report = wheel.color().unwrap();
//!assert_eq!(report.removals, 6);
//!```

#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    unused_labels,
    unused_results
)]

mod bucket;
mod config;
mod error;
pub mod example;
mod graph;
mod reduce;
mod unwind;

pub use crate::config::{Options, RotationStart};
pub use crate::error::{ColorError, Result};
pub use crate::graph::VertexId;
pub use crate::unwind::Color;

use crate::graph::Graph;
use crate::reduce::{Op, Reduction};
use tracing::debug;

/// Counts of the steps a coloring took.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Report {
    /// Vertices removed, one per vertex that was not merged.
    pub removals: usize,
    /// Pairs of vertices identified.
    pub merges: usize,
}

/// A planar graph under construction, and then its coloring.
#[derive(Clone, Debug, Default)]
pub struct FiveColor {
    graph: Graph,
    options: Options,
    colored: bool,
}

impl FiveColor {
    /// Empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty graph colored according to `options`.
    pub fn with_options(options: Options) -> Self {
        Self {
            graph: Graph::new(),
            options,
            colored: false,
        }
    }

    /// Graph described by a rotation system.
    ///
    /// Vertex `v` gets the neighbors `rotations[v]`, in this cyclic order.
    /// Every edge has to be listed at both ends.
    pub fn from_rotations(rotations: &[Vec<usize>]) -> Result<Self> {
        let mut g = Self::new();
        let vertices: Vec<_> = rotations.iter().map(|_| g.create_vertex()).collect();
        for (v, rotation) in vertices.iter().zip(rotations) {
            for &w in rotation.iter().rev() {
                let w = vertices
                    .get(w)
                    .copied()
                    .ok_or(ColorError::ForeignVertex(VertexId(w)))?;
                g.add_edge(*v, w)?;
            }
        }
        Ok(g)
    }

    /// Set the options of the coloring.
    pub fn set_options(&mut self, options: Options) {
        self.options = options;
    }

    /// Add a new vertex without any edge.
    pub fn create_vertex(&mut self) -> VertexId {
        self.graph.create_vertex()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.graph.num_vertices()
    }

    fn check_vertex(&self, v: VertexId) -> Result<()> {
        if self.graph.contains(v) {
            Ok(())
        } else {
            Err(ColorError::ForeignVertex(v))
        }
    }

    /// Add the edge from `from` to `to` at the head of the list of `from`.
    ///
    /// An undirected edge needs a call in each direction. Adding an edge
    /// that already exists does nothing.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        if self.colored {
            return Err(ColorError::AlreadyColored);
        }
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if from == to {
            return Err(ColorError::SelfLoop(from));
        }
        let _ = self.graph.add_edge(from, to);
        Ok(())
    }

    /// Number of edges of `v`.
    ///
    /// After coloring, this is the degree `v` had when it was removed.
    pub fn degree(&self, v: VertexId) -> usize {
        self.graph.degree(v)
    }

    /// Neighbors of `v`, in the order of its list.
    ///
    /// After coloring, these are the neighbors `v` had when it was removed.
    pub fn neighbors(&self, v: VertexId) -> Vec<VertexId> {
        self.graph.neighbors(v).collect()
    }

    /// Color every vertex.
    ///
    /// The graph must be planar and its lists must follow a planar
    /// embedding. Its adjacency is consumed: the coloring can be run only once.
    pub fn color(&mut self) -> Result<Report> {
        if self.colored {
            return Err(ColorError::AlreadyColored);
        }
        if let Some((from, to)) = self.graph.half_edge() {
            return Err(ColorError::HalfEdge { from, to });
        }
        if cfg!(debug_assertions) || self.options.validate {
            self.graph.check_consistent();
        }
        self.colored = true;
        debug!(vertices = self.graph.num_vertices(), "color.start");
        let undo = Reduction::new(&mut self.graph, self.options).run()?;
        let merges = undo
            .iter()
            .filter(|op| matches!(op, Op::Merge { .. }))
            .count();
        let report = Report {
            removals: undo.len() - merges,
            merges,
        };
        unwind::unwind(&mut self.graph, undo)?;
        debug!(removals = report.removals, merges = report.merges, "color.done");
        Ok(report)
    }

    /// Color of `v`, once the graph is colored.
    pub fn color_of(&self, v: VertexId) -> Option<Color> {
        if self.graph.contains(v) {
            self.graph.vertex(v).color
        } else {
            None
        }
    }

    /// Colors of all vertices in creation order, once the graph is colored.
    pub fn colors(&self) -> Option<Vec<Color>> {
        self.graph.vertices().map(|v| self.color_of(v)).collect()
    }

    /// First edge of the graph as built whose ends have the same color.
    ///
    /// A vertex without a color conflicts with everything.
    pub fn conflict(&self) -> Option<(VertexId, VertexId)> {
        self.graph.vertices().find_map(|v| {
            let c = self.color_of(v);
            self.graph
                .original_neighbors(v)
                .find(|&w| c.is_none() || self.color_of(w) == c)
                .map(|w| (v, w))
        })
    }

    /// Return `true` if the graph is colored and no edge has
    /// both ends of the same color.
    pub fn is_proper_coloring(&self) -> bool {
        self.colored && self.conflict().is_none()
    }
}

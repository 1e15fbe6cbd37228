//! Arena of vertices and edges.
//!
//! Every vertex owns a circular doubly linked list of outgoing edges,
//! stored as indices into a single edge arena. The cyclic order of this
//! list is the rotation of the vertex in the planar embedding. An
//! undirected connection is a pair of edges that are each other's `mirror`.
//!
//! Nothing is ever freed: removing a vertex only unlinks the mirrors of its
//! edges from the lists of its neighbors, so the list of the removed vertex
//! survives untouched and still describes its neighborhood when the colors
//! are assigned back.

use crate::bucket::Slot;
use crate::error::{ColorError, Result};
use crate::unwind::Color;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// Handle on a vertex of a [`FiveColor`](crate::FiveColor) graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Position of the vertex in creation order.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct EdgeId(usize);

/// Where a vertex stands in the reduction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Status {
    Live,
    Removed,
    Merged(VertexId),
}

#[derive(Clone, Debug)]
pub(crate) struct Vertex {
    degree: usize,
    root: Option<EdgeId>,
    status: Status,
    pub(crate) slot: Slot,
    pub(crate) color: Option<Color>,
    // target -> edge, only maintained while building
    dedup: FxHashMap<VertexId, EdgeId>,
}

impl Vertex {
    fn new() -> Self {
        Self {
            degree: 0,
            root: None,
            status: Status::Live,
            slot: Slot::None,
            color: None,
            dedup: FxHashMap::default(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Edge {
    target: VertexId,
    mirror: Option<EdgeId>,
    prev: EdgeId,
    next: EdgeId,
}

/// Storage of a graph under reduction.
#[derive(Clone, Debug, Default)]
pub(crate) struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    live: usize,
}

impl Graph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn create_vertex(&mut self) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex::new());
        self.live += 1;
        id
    }

    #[inline]
    pub(crate) fn contains(&self, v: VertexId) -> bool {
        v.0 < self.vertices.len()
    }

    #[inline]
    pub(crate) fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of vertices neither removed nor merged.
    #[inline]
    pub(crate) fn num_live(&self) -> usize {
        self.live
    }

    pub(crate) fn vertices(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId)
    }

    #[inline]
    pub(crate) fn vertex(&self, v: VertexId) -> &Vertex {
        &self.vertices[v.0]
    }

    #[inline]
    pub(crate) fn vertex_mut(&mut self, v: VertexId) -> &mut Vertex {
        &mut self.vertices[v.0]
    }

    #[inline]
    pub(crate) fn degree(&self, v: VertexId) -> usize {
        self.vertices[v.0].degree
    }

    #[inline]
    pub(crate) fn status(&self, v: VertexId) -> Status {
        self.vertices[v.0].status
    }

    #[inline]
    pub(crate) fn is_live(&self, v: VertexId) -> bool {
        self.status(v) == Status::Live
    }

    #[inline]
    pub(crate) fn target(&self, e: EdgeId) -> VertexId {
        self.edges[e.0].target
    }

    #[inline]
    pub(crate) fn next(&self, e: EdgeId) -> EdgeId {
        self.edges[e.0].next
    }

    #[inline]
    fn prev(&self, e: EdgeId) -> EdgeId {
        self.edges[e.0].prev
    }

    fn mirror(&self, owner: VertexId, e: EdgeId) -> Result<EdgeId> {
        self.edges[e.0].mirror.ok_or(ColorError::HalfEdge {
            from: owner,
            to: self.target(e),
        })
    }

    /// Add an edge from `from` to `to` at the head of the list of `from`.
    ///
    /// Return `false` if `from` already has an edge to `to`.
    pub(crate) fn add_edge(&mut self, from: VertexId, to: VertexId) -> bool {
        if self.vertices[from.0].dedup.contains_key(&to) {
            return false;
        }
        let id = EdgeId(self.edges.len());
        let mirror = self.vertices[to.0].dedup.get(&from).copied();
        self.edges.push(Edge {
            target: to,
            mirror,
            prev: id,
            next: id,
        });
        if let Some(m) = mirror {
            debug_assert!(self.edges[m.0].mirror.is_none());
            self.edges[m.0].mirror = Some(id);
        }
        self.link_front(from, id);
        let _ = self.vertices[from.0].dedup.insert(to, id);
        true
    }

    /// Insert `e` in front of the root of `v` and make it the new root.
    fn link_front(&mut self, v: VertexId, e: EdgeId) {
        match self.vertices[v.0].root {
            None => {
                self.edges[e.0].prev = e;
                self.edges[e.0].next = e;
            }
            Some(root) => {
                let last = self.prev(root);
                self.edges[e.0].prev = last;
                self.edges[e.0].next = root;
                self.edges[last.0].next = e;
                self.edges[root.0].prev = e;
            }
        }
        let vertex = &mut self.vertices[v.0];
        vertex.root = Some(e);
        vertex.degree += 1;
    }

    /// Take `e` out of the list of `v`.
    fn unlink(&mut self, v: VertexId, e: EdgeId) {
        debug_assert!(self.vertices[v.0].degree > 0);
        let Edge { prev, next, .. } = self.edges[e.0];
        let vertex = &mut self.vertices[v.0];
        vertex.degree -= 1;
        if vertex.degree == 0 {
            vertex.root = None;
        } else {
            if vertex.root == Some(e) {
                vertex.root = Some(next);
            }
            self.edges[prev.0].next = next;
            self.edges[next.0].prev = prev;
        }
    }

    /// Edges of `v` in rotation order, starting at its root.
    pub(crate) fn edges(&self, v: VertexId) -> Edges<'_> {
        let vertex = &self.vertices[v.0];
        Edges {
            graph: self,
            edge: vertex.root,
            remaining: vertex.degree,
        }
    }

    /// Edges of `v` in rotation order, starting at `start`.
    pub(crate) fn edges_from(&self, v: VertexId, start: EdgeId) -> Edges<'_> {
        Edges {
            graph: self,
            edge: Some(start),
            remaining: self.vertices[v.0].degree,
        }
    }

    pub(crate) fn neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.edges(v).map(move |e| self.target(e))
    }

    /// Neighbors of `v` in the graph as it was built.
    pub(crate) fn original_neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices[v.0].dedup.keys().copied()
    }

    pub(crate) fn adjacent(&self, a: VertexId, b: VertexId) -> bool {
        self.neighbors(a).any(|w| w == b)
    }

    /// Return `true` if no two edges of `v` reach the same vertex.
    pub(crate) fn distinct_neighbors(&self, v: VertexId) -> bool {
        let mut seen = FxHashSet::default();
        seen.reserve(self.degree(v));
        self.neighbors(v).all(|w| seen.insert(w))
    }

    /// First edge that has no mirror, as `(owner, target)`.
    pub(crate) fn half_edge(&self) -> Option<(VertexId, VertexId)> {
        self.vertices().find_map(|v| {
            self.edges(v)
                .find(|e| self.edges[e.0].mirror.is_none())
                .map(|e| (v, self.target(e)))
        })
    }

    /// Edge following the mirror of `e` in the list of the target of `e`.
    ///
    /// This is where the target's rotation resumes once `e` is detached;
    /// `None` if `e` is the only edge of its target.
    pub(crate) fn slot_after(&self, owner: VertexId, e: EdgeId) -> Result<Option<EdgeId>> {
        let m = self.mirror(owner, e)?;
        Ok(if self.degree(self.target(e)) > 1 {
            Some(self.next(m))
        } else {
            None
        })
    }

    /// Disconnect `v` from the live graph.
    ///
    /// The list of `v` is left as it is and keeps describing the
    /// neighbors `v` had at removal. Return these neighbors.
    pub(crate) fn detach(&mut self, v: VertexId) -> Result<Vec<VertexId>> {
        debug_assert!(self.is_live(v));
        let edges: Vec<EdgeId> = self.edges(v).collect();
        let mut neighbors = Vec::with_capacity(edges.len());
        for e in edges {
            let m = self.mirror(v, e)?;
            let w = self.target(e);
            self.unlink(w, m);
            neighbors.push(w);
        }
        self.vertices[v.0].status = Status::Removed;
        self.live -= 1;
        Ok(neighbors)
    }

    /// Contract `b` into `a`.
    ///
    /// `slot_a` and `slot_b` are the positions, in the lists of `a` and `b`,
    /// where the edge to the vertex that separated them used to be. The
    /// rotation of `b` is spliced into the rotation of `a` there. Edges of `b`
    /// toward neighbors of `a` are dropped so that the graph stays simple.
    ///
    /// Return the vertices that lost an edge.
    pub(crate) fn identify(
        &mut self,
        a: VertexId,
        b: VertexId,
        slot_a: Option<EdgeId>,
        slot_b: Option<EdgeId>,
    ) -> Result<Vec<VertexId>> {
        if a == b || self.adjacent(a, b) {
            return Err(ColorError::AdjacentContraction { a, b });
        }
        debug_assert!(self.is_live(a) && self.is_live(b));
        let known: FxHashSet<VertexId> = self.neighbors(a).collect();
        let moved: Vec<EdgeId> = self.edges(b).collect();

        match (slot_a, slot_b) {
            (_, None) => debug_assert_eq!(self.degree(b), 0),
            (None, Some(nb)) => {
                debug_assert_eq!(self.degree(a), 0);
                self.vertices[a.0].root = Some(nb);
            }
            (Some(na), Some(nb)) => {
                let pa = self.prev(na);
                let pb = self.prev(nb);
                self.edges[pa.0].next = nb;
                self.edges[nb.0].prev = pa;
                self.edges[pb.0].next = na;
                self.edges[na.0].prev = pb;
            }
        }
        let degree_b = std::mem::replace(&mut self.vertices[b.0].degree, 0);
        self.vertices[b.0].root = None;
        self.vertices[b.0].status = Status::Merged(a);
        self.vertices[a.0].degree += degree_b;
        self.live -= 1;

        let mut touched = Vec::new();
        for e in moved {
            let w = self.target(e);
            let m = self.mirror(b, e)?;
            if known.contains(&w) {
                self.unlink(a, e);
                self.unlink(w, m);
                touched.push(w);
            } else {
                self.edges[m.0].target = a;
            }
        }
        Ok(touched)
    }

    /// Panic if the live part of the graph is not a consistent
    /// set of circular lists with reciprocal mirrors.
    pub(crate) fn check_consistent(&self) {
        let mut live = 0;
        for v in self.vertices() {
            if !self.is_live(v) {
                continue;
            }
            live += 1;
            let vertex = self.vertex(v);
            assert_eq!(vertex.root.is_none(), vertex.degree == 0);
            let mut count = 0;
            for e in self.edges(v) {
                count += 1;
                assert_eq!(self.prev(self.next(e)), e);
                let w = self.target(e);
                assert!(self.is_live(w), "{} points to dead {}", v, w);
                let m = self.edges[e.0].mirror.expect("live edge without mirror");
                assert_eq!(self.target(m), v);
                assert_eq!(self.edges[m.0].mirror, Some(e));
            }
            assert_eq!(count, vertex.degree);
            if let Some(root) = vertex.root {
                let mut e = root;
                for _ in 0..vertex.degree {
                    e = self.next(e);
                }
                assert_eq!(e, root, "list of {} is not circular", v);
            }
        }
        assert_eq!(live, self.live);
    }

    /// Add an edge without deduplication nor mirror, for tests that
    /// need lists the builder refuses to produce.
    #[cfg(test)]
    pub(crate) fn push_raw_edge(&mut self, from: VertexId, to: VertexId) -> EdgeId {
        let id = EdgeId(self.edges.len());
        self.edges.push(Edge {
            target: to,
            mirror: None,
            prev: id,
            next: id,
        });
        self.link_front(from, id);
        id
    }
}

/// Iterator on the edges of a vertex in rotation order.
#[derive(Clone, Debug)]
pub(crate) struct Edges<'a> {
    graph: &'a Graph,
    edge: Option<EdgeId>,
    remaining: usize,
}

impl Iterator for Edges<'_> {
    type Item = EdgeId;
    #[inline]
    fn next(&mut self) -> Option<EdgeId> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let e = self.edge?;
        self.edge = Some(self.graph.next(e));
        Some(e)
    }
}

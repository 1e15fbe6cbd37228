//! Degree buckets feeding the reduction.
//!
//! A vertex of degree at most 4 waits in the low bucket. A vertex of
//! degree 5 waits in the pending-five bucket when its neighbors are pairwise
//! distinct and one of them has degree at most 6. Other vertices are not
//! tracked. Buckets are stacks with removal in constant time: each vertex
//! remembers its position, the way a partition keeps the reverse of its
//! element array.

use crate::graph::{Graph, VertexId};

/// Degree up to which a vertex is always reducible.
pub(crate) const LOW_DEGREE: usize = 4;
/// Degree of the vertices reduced by identification.
pub(crate) const FIVE: usize = 5;
/// A degree-5 vertex needs a neighbor of at most this degree.
pub(crate) const SMALL_NEIGHBOR: usize = 6;

/// Bucket membership of a vertex and its position there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub(crate) enum Slot {
    #[default]
    None,
    Low(usize),
    Five(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Low,
    Five,
}

impl Kind {
    fn slot(self, pos: usize) -> Slot {
        match self {
            Kind::Low => Slot::Low(pos),
            Kind::Five => Slot::Five(pos),
        }
    }
}

/// The two buckets.
#[derive(Clone, Debug, Default)]
pub(crate) struct Buckets {
    low: Vec<VertexId>,
    five: Vec<VertexId>,
}

impl Buckets {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn bucket(&mut self, kind: Kind) -> &mut Vec<VertexId> {
        match kind {
            Kind::Low => &mut self.low,
            Kind::Five => &mut self.five,
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> (usize, usize) {
        (self.low.len(), self.five.len())
    }

    fn insert(&mut self, g: &mut Graph, v: VertexId, kind: Kind) {
        debug_assert_eq!(g.vertex(v).slot, Slot::None);
        let bucket = self.bucket(kind);
        let pos = bucket.len();
        bucket.push(v);
        g.vertex_mut(v).slot = kind.slot(pos);
    }

    /// Remove `v` from the bucket holding it, if any.
    pub(crate) fn declassify(&mut self, g: &mut Graph, v: VertexId) {
        let (kind, pos) = match g.vertex(v).slot {
            Slot::None => return,
            Slot::Low(pos) => (Kind::Low, pos),
            Slot::Five(pos) => (Kind::Five, pos),
        };
        let bucket = self.bucket(kind);
        debug_assert_eq!(bucket[pos], v);
        let _ = bucket.swap_remove(pos);
        if let Some(&moved) = bucket.get(pos) {
            g.vertex_mut(moved).slot = kind.slot(pos);
        }
        g.vertex_mut(v).slot = Slot::None;
    }

    /// Return `true` if `v` can be reduced by identifying two of its neighbors.
    pub(crate) fn qualifies_five(g: &Graph, v: VertexId) -> bool {
        g.is_live(v)
            && g.degree(v) == FIVE
            && g.distinct_neighbors(v)
            && g.neighbors(v).any(|w| g.degree(w) <= SMALL_NEIGHBOR)
    }

    /// Put `v` in the bucket matching its current degree.
    ///
    /// Cheap when `v` is already where it belongs.
    pub(crate) fn classify(&mut self, g: &mut Graph, v: VertexId) {
        let wanted = if !g.is_live(v) {
            None
        } else if g.degree(v) <= LOW_DEGREE {
            Some(Kind::Low)
        } else if Self::qualifies_five(g, v) {
            Some(Kind::Five)
        } else {
            None
        };
        let current = match g.vertex(v).slot {
            Slot::None => None,
            Slot::Low(_) => Some(Kind::Low),
            Slot::Five(_) => Some(Kind::Five),
        };
        if wanted != current {
            self.declassify(g, v);
            if let Some(kind) = wanted {
                self.insert(g, v, kind);
            }
        }
    }

    fn pop(&mut self, g: &mut Graph, kind: Kind) -> Option<VertexId> {
        let v = self.bucket(kind).pop()?;
        g.vertex_mut(v).slot = Slot::None;
        Some(v)
    }

    /// Most recently queued vertex of degree at most 4.
    pub(crate) fn pop_low(&mut self, g: &mut Graph) -> Option<VertexId> {
        self.pop(g, Kind::Low)
    }

    /// Most recently queued degree-5 vertex.
    ///
    /// The caller has to check it still qualifies.
    pub(crate) fn pop_five(&mut self, g: &mut Graph) -> Option<VertexId> {
        self.pop(g, Kind::Five)
    }
}

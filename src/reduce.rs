//! Reduction of the graph to nothing.
//!
//! Vertices of degree at most 4 are removed. When none is left, a
//! degree-5 vertex `v` is removed and two non-adjacent neighbors of `v`
//! are identified. Every step is recorded so that the colors can be given
//! back in reverse order.

use crate::bucket::{Buckets, FIVE};
use crate::config::{Options, RotationStart};
use crate::error::{ColorError, Result};
use crate::graph::{EdgeId, Graph, VertexId};
use tracing::{debug, trace};

/// A recorded reduction step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Op {
    /// The vertex was disconnected from the graph.
    Remove(VertexId),
    /// `from` was identified into `into`.
    Merge { into: VertexId, from: VertexId },
}

/// State of a running reduction.
#[derive(Debug)]
pub(crate) struct Reduction<'g> {
    graph: &'g mut Graph,
    buckets: Buckets,
    undo: Vec<Op>,
    options: Options,
}

impl<'g> Reduction<'g> {
    /// Classify every vertex of `graph`.
    pub(crate) fn new(graph: &'g mut Graph, options: Options) -> Self {
        let mut buckets = Buckets::new();
        for v in graph.vertices().collect::<Vec<_>>() {
            buckets.classify(graph, v);
        }
        let undo = Vec::with_capacity(graph_len_hint(graph));
        Self {
            graph,
            buckets,
            undo,
            options,
        }
    }

    /// Reduce until no vertex is left, and return the recorded steps.
    pub(crate) fn run(mut self) -> Result<Vec<Op>> {
        loop {
            while let Some(v) = self.buckets.pop_low(self.graph) {
                self.remove(v)?;
                self.validate();
            }
            let v = match self.buckets.pop_five(self.graph) {
                Some(v) => v,
                None => break,
            };
            if !Buckets::qualifies_five(self.graph, v) {
                trace!(vertex = %v, degree = self.graph.degree(v), "reduce.requeue");
                self.buckets.classify(self.graph, v);
                continue;
            }
            self.reduce_five(v)?;
            self.validate();
        }
        let remaining = self.graph.num_live();
        if remaining > 0 {
            debug!(remaining, "reduce.stalled");
            return Err(ColorError::Stalled { remaining });
        }
        debug!(steps = self.undo.len(), "reduce.done");
        Ok(self.undo)
    }

    fn validate(&self) {
        if self.options.validate {
            self.graph.check_consistent();
        }
    }

    /// Remove a vertex of degree at most 4.
    fn remove(&mut self, v: VertexId) -> Result<()> {
        debug_assert!(self.graph.degree(v) < FIVE);
        let neighbors = self.graph.detach(v)?;
        trace!(vertex = %v, degree = neighbors.len(), "reduce.remove");
        self.undo.push(Op::Remove(v));
        self.refresh(&neighbors);
        Ok(())
    }

    /// Edge of `v` where the search for a non-adjacent pair starts.
    fn rotation_start(&self, v: VertexId) -> Option<EdgeId> {
        let g = &*self.graph;
        match self.options.rotation_start {
            RotationStart::Root => g.edges(v).next(),
            RotationStart::MinDegree => g.edges(v).min_by_key(|&e| g.degree(g.target(e))),
        }
    }

    /// Remove a qualifying degree-5 vertex and identify two of its neighbors.
    fn reduce_five(&mut self, v: VertexId) -> Result<()> {
        let start = match self.rotation_start(v) {
            Some(e) => e,
            None => return Err(ColorError::Stalled { remaining: self.graph.num_live() }),
        };
        let ring: Vec<EdgeId> = self.graph.edges_from(v, start).collect();
        debug_assert_eq!(ring.len(), FIVE);
        let g = &*self.graph;
        let (ea, eb) = if g.adjacent(g.target(ring[0]), g.target(ring[2])) {
            (ring[1], ring[3])
        } else {
            (ring[0], ring[2])
        };
        let a = g.target(ea);
        let b = g.target(eb);
        let slot_a = g.slot_after(v, ea)?;
        let slot_b = g.slot_after(v, eb)?;

        let mut touched = self.graph.detach(v)?;
        self.undo.push(Op::Remove(v));
        self.buckets.declassify(self.graph, a);
        self.buckets.declassify(self.graph, b);
        touched.extend(self.graph.identify(a, b, slot_a, slot_b)?);
        trace!(vertex = %v, a = %a, b = %b, degree = self.graph.degree(a), "reduce.identify");
        self.undo.push(Op::Merge { into: a, from: b });
        touched.push(a);
        self.refresh(&touched);
        Ok(())
    }

    /// Reclassify vertices whose degree changed, and the degree-5
    /// vertices around them whose eligibility may have changed with it.
    fn refresh(&mut self, touched: &[VertexId]) {
        for &w in touched {
            if !self.graph.is_live(w) {
                continue;
            }
            self.buckets.classify(self.graph, w);
            let around: Vec<VertexId> = self
                .graph
                .neighbors(w)
                .filter(|&u| self.graph.degree(u) == FIVE)
                .collect();
            for u in around {
                self.buckets.classify(self.graph, u);
            }
        }
    }
}

// one removal per vertex plus at most one merge per two vertices
fn graph_len_hint(graph: &Graph) -> usize {
    graph.num_live() + graph.num_live() / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Status;

    fn build(rotations: &[Vec<usize>]) -> (Graph, Vec<VertexId>) {
        let mut g = Graph::new();
        let vs: Vec<_> = rotations.iter().map(|_| g.create_vertex()).collect();
        for (v, rotation) in rotations.iter().enumerate() {
            for &w in rotation.iter().rev() {
                assert!(g.add_edge(vs[v], vs[w]));
            }
        }
        (g, vs)
    }

    #[test]
    fn removals_only() {
        let (mut g, vs) = build(&[vec![1, 2], vec![2, 0], vec![0, 1]]);
        let undo = Reduction::new(&mut g, Options::new().validate(true))
            .run()
            .unwrap();
        assert_eq!(undo.len(), 3);
        assert!(undo.iter().all(|op| matches!(op, Op::Remove(_))));
        assert!(vs.iter().all(|&v| g.status(v) == Status::Removed));
    }

    #[test]
    fn wheel_identification() {
        let (mut g, vs) = build(&crate::example::wheel(5));
        let hub = vs[0];
        let mut reduction = Reduction::new(&mut g, Options::new().validate(true));
        assert_eq!(reduction.buckets.len(), (5, 1));
        reduction.buckets.declassify(reduction.graph, hub);
        reduction.reduce_five(hub).unwrap();
        // all rim vertices have degree 3, the rotation starts at the first one
        assert_eq!(
            reduction.undo,
            vec![
                Op::Remove(hub),
                Op::Merge {
                    into: vs[1],
                    from: vs[3]
                }
            ]
        );
        reduction.graph.check_consistent();
        let graph = &*reduction.graph;
        assert_eq!(graph.status(vs[3]), Status::Merged(vs[1]));
        assert_eq!(graph.degree(vs[1]), 3);
        assert_eq!(graph.degree(vs[2]), 1);
        assert_eq!(graph.degree(vs[4]), 2);
        assert_eq!(graph.degree(vs[5]), 2);
        let undo = reduction.run().unwrap();
        assert_eq!(undo.len(), 6);

        crate::unwind::unwind(&mut g, undo).unwrap();
        let color = |v: VertexId| g.vertex(v).color.unwrap();
        assert_eq!(color(vs[1]), color(vs[3]));
        assert!(vs[1..].iter().all(|&r| color(r) != color(hub)));
    }

    #[test]
    fn opposite_pair_when_first_is_adjacent() {
        // hub 0 with rotation 1..=5, rim cycle, plus the chord 1-3 drawn outside
        let (mut g, vs) = build(&[
            vec![1, 2, 3, 4, 5],
            vec![2, 0, 5, 3],
            vec![3, 0, 1],
            vec![4, 0, 2, 1],
            vec![5, 0, 3],
            vec![1, 0, 4],
        ]);
        let hub = vs[0];
        let mut reduction = Reduction::new(&mut g, Options::new().validate(true));
        reduction.buckets.declassify(reduction.graph, hub);
        reduction.reduce_five(hub).unwrap();
        // vertex 2 has the smallest degree, so the ring is 2 3 4 5 1
        // and 2, 4 are not adjacent
        assert_eq!(
            reduction.undo[1],
            Op::Merge {
                into: vs[2],
                from: vs[4]
            }
        );
    }

    #[test]
    fn root_start() {
        let (mut g, vs) = build(&[
            vec![1, 2, 3, 4, 5],
            vec![2, 0, 5, 3],
            vec![3, 0, 1],
            vec![4, 0, 2, 1],
            vec![5, 0, 3],
            vec![1, 0, 4],
        ]);
        let hub = vs[0];
        let options = Options::new()
            .validate(true)
            .rotation_start(RotationStart::Root);
        let mut reduction = Reduction::new(&mut g, options);
        reduction.buckets.declassify(reduction.graph, hub);
        reduction.reduce_five(hub).unwrap();
        // ring 1 2 3 4 5, 1 and 3 are adjacent so 2 and 4 are identified
        assert_eq!(
            reduction.undo[1],
            Op::Merge {
                into: vs[2],
                from: vs[4]
            }
        );
    }

    #[test]
    fn non_planar() {
        // in K6 every vertex qualifies, but all its neighbors are adjacent
        let rotations: Vec<Vec<usize>> = (0..6)
            .map(|v| (0..6).filter(|&w| w != v).collect())
            .collect();
        let (mut g, _) = build(&rotations);
        let result = Reduction::new(&mut g, Options::new()).run();
        assert!(matches!(
            result,
            Err(ColorError::AdjacentContraction { .. })
        ));
    }
}

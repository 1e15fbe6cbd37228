//! Tuning knobs of a coloring run.

/// Which neighbor of a degree-5 vertex starts the rotation
/// in which the two identified neighbors are looked for.
///
/// Every choice yields a proper coloring, but different ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RotationStart {
    /// First neighbor of minimum degree, in adjacency order.
    #[default]
    MinDegree,
    /// Neighbor reached by the root of the adjacency list.
    Root,
}

/// Options of a [`FiveColor`](crate::FiveColor) graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Options {
    pub(crate) rotation_start: RotationStart,
    pub(crate) validate: bool,
}

impl Options {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the neighbor starting the rotation of degree-5 reductions.
    pub fn rotation_start(mut self, start: RotationStart) -> Self {
        self.rotation_start = start;
        self
    }

    /// Check the whole structure after every reduction step.
    ///
    /// Panics on inconsistency. Slow, meant for debugging.
    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}

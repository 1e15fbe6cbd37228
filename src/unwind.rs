//! Color assignment, replaying the reduction backwards.

use crate::error::{ColorError, Result};
use crate::graph::{Graph, VertexId};
use crate::reduce::Op;
use std::fmt;
use tracing::{debug, trace};

/// One of the five colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(u8);

impl Color {
    /// Number of colors.
    pub const COUNT: usize = 5;

    /// All colors, in the order they are tried.
    pub const ALL: [Color; Color::COUNT] = [Color(0), Color(1), Color(2), Color(3), Color(4)];

    /// Color numbered `index`, if `index < 5`.
    pub fn new(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Number of the color, in `0..5`.
    #[inline]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Smallest color not used by a colored neighbor of `v`.
///
/// The list of a removed vertex still holds the neighbors it had
/// when it was removed.
fn free_color(g: &Graph, v: VertexId) -> Result<Color> {
    let mut used = [false; Color::COUNT];
    for w in g.neighbors(v) {
        if let Some(c) = g.vertex(w).color {
            used[c.index()] = true;
        }
    }
    Color::ALL
        .iter()
        .copied()
        .find(|c| !used[c.index()])
        .ok_or(ColorError::NoFreeColor(v))
}

/// Color every vertex by popping the steps recorded by the reduction.
pub(crate) fn unwind(g: &mut Graph, mut undo: Vec<Op>) -> Result<()> {
    debug!(steps = undo.len(), "unwind.start");
    while let Some(op) = undo.pop() {
        match op {
            Op::Merge { into, from } => {
                let color = g
                    .vertex(into)
                    .color
                    .ok_or(ColorError::UncoloredPartner { into, from })?;
                trace!(vertex = %from, into = %into, color = %color, "unwind.merge");
                g.vertex_mut(from).color = Some(color);
            }
            Op::Remove(v) => {
                let color = free_color(g, v)?;
                trace!(vertex = %v, color = %color, "unwind.restore");
                g.vertex_mut(v).color = Some(color);
            }
        }
    }
    Ok(())
}

//! Road network components - edges and their weights

use crate::{NodeId, Weight};

/// Directed road graph edge (road segment)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Node the segment leads to
    pub target: NodeId,
    /// Segment length in the graph's native unit, never negative
    pub weight: Weight,
}

impl Edge {
    pub fn new(target: NodeId, weight: Weight) -> Self {
        Self { target, weight }
    }
}

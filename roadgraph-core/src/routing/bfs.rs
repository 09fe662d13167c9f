use std::collections::VecDeque;

use fixedbitset::FixedBitSet;
use log::debug;

use super::reconstruct_path;
use crate::{Error, NodeId, RoadGraph};

/// Path with the fewest edges from `start` to `goal`, ignoring weights.
///
/// Returns an empty path when `goal` cannot be reached.
///
/// # Errors
///
/// Returns [`Error::InvalidNodeIndex`] if either endpoint is not in the graph.
pub fn bfs_shortest_hops(
    graph: &RoadGraph,
    start: NodeId,
    goal: NodeId,
) -> Result<Vec<NodeId>, Error> {
    graph.validate_node(start)?;
    graph.validate_node(goal)?;

    let node_count = graph.node_count();
    let mut discovered = FixedBitSet::with_capacity(node_count);
    let mut predecessors: Vec<Option<NodeId>> = vec![None; node_count];
    let mut queue = VecDeque::new();

    discovered.insert(start);
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        if node == goal {
            let path = reconstruct_path(&predecessors, goal);
            debug!("BFS {start} -> {goal}: {} hops", path.len() - 1);
            return Ok(path);
        }

        for next in graph.neighbors(node) {
            // `put` returns the previous state of the bit
            if !discovered.put(next) {
                predecessors[next] = Some(node);
                queue.push_back(next);
            }
        }
    }

    debug!("BFS {start} -> {goal}: unreachable");
    Ok(Vec::new())
}

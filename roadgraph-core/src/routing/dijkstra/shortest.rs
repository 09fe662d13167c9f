use std::collections::BinaryHeap;

use log::debug;

use super::state::State;
use crate::routing::reconstruct_path;
use crate::{Error, NodeId, RoadGraph, Weight};

/// Result of a weighted shortest-path query
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    /// Nodes from start to goal, empty if the goal is unreachable
    pub nodes: Vec<NodeId>,
    /// Sum of edge weights along `nodes`, infinite if unreachable
    pub weight: Weight,
}

impl ShortestPath {
    pub fn unreachable() -> Self {
        Self {
            nodes: Vec::new(),
            weight: Weight::INFINITY,
        }
    }

    pub fn is_reachable(&self) -> bool {
        !self.nodes.is_empty()
    }
}

/// Dijkstra's algorithm for the minimal-weight path between two nodes.
///
/// Stale heap entries are skipped on pop instead of decreasing keys in place.
/// The search ends as soon as the goal is settled. Edge weights must be
/// non-negative.
///
/// # Errors
///
/// Returns [`Error::InvalidNodeIndex`] if either endpoint is not in the graph.
pub fn dijkstra_shortest(
    graph: &RoadGraph,
    start: NodeId,
    goal: NodeId,
) -> Result<ShortestPath, Error> {
    graph.validate_node(start)?;
    graph.validate_node(goal)?;

    let node_count = graph.node_count();
    let mut distances = vec![Weight::INFINITY; node_count];
    let mut predecessors: Vec<Option<NodeId>> = vec![None; node_count];
    let mut heap = BinaryHeap::new();

    // Start node has distance 0
    distances[start] = 0.0;
    heap.push(State {
        cost: 0.0,
        node: start,
    });

    while let Some(State { cost, node }) = heap.pop() {
        // Skip if we've found a better path
        if cost > distances[node] {
            continue;
        }

        if node == goal {
            break;
        }

        for edge in graph.edges(node) {
            let next_cost = cost + edge.weight;
            if next_cost < distances[edge.target] {
                distances[edge.target] = next_cost;
                predecessors[edge.target] = Some(node);
                heap.push(State {
                    cost: next_cost,
                    node: edge.target,
                });
            }
        }
    }

    if distances[goal].is_infinite() {
        debug!("Dijkstra {start} -> {goal}: unreachable");
        return Ok(ShortestPath::unreachable());
    }

    let path = ShortestPath {
        nodes: reconstruct_path(&predecessors, goal),
        weight: distances[goal],
    };
    debug!(
        "Dijkstra {start} -> {goal}: {} nodes, weight {}",
        path.nodes.len(),
        path.weight
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::test_graphs::{graph, undirected};

    #[test]
    fn test_prefers_lighter_detour_over_direct_edge() {
        let graph = graph(3, &[(0, 2, 5.0), (0, 1, 1.0), (1, 2, 1.0)]);
        let path = dijkstra_shortest(&graph, 0, 2).unwrap();
        assert_eq!(path.nodes, vec![0, 1, 2]);
        assert_eq!(path.weight, 2.0);
        assert!(path.is_reachable());
    }

    #[test]
    fn test_stale_entries_are_skipped() {
        // Node 2 is first reached with cost 10, then improved to 3 through node 1
        let graph = graph(
            4,
            &[(0, 2, 10.0), (0, 1, 1.0), (1, 2, 2.0), (2, 3, 1.0), (0, 3, 20.0)],
        );
        let path = dijkstra_shortest(&graph, 0, 3).unwrap();
        assert_eq!(path.nodes, vec![0, 1, 2, 3]);
        assert_eq!(path.weight, 4.0);
    }

    #[test]
    fn test_same_start_and_goal() {
        let graph = graph(2, &undirected(&[(0, 1, 3.0)]));
        let path = dijkstra_shortest(&graph, 1, 1).unwrap();
        assert_eq!(path.nodes, vec![1]);
        assert_eq!(path.weight, 0.0);
    }

    #[test]
    fn test_zero_weight_edges() {
        let graph = graph(3, &undirected(&[(0, 1, 0.0), (1, 2, 0.0)]));
        let path = dijkstra_shortest(&graph, 0, 2).unwrap();
        assert_eq!(path.nodes, vec![0, 1, 2]);
        assert_eq!(path.weight, 0.0);
    }

    #[test]
    fn test_unreachable() {
        let graph = graph(4, &undirected(&[(0, 1, 1.0), (2, 3, 1.0)]));
        let path = dijkstra_shortest(&graph, 0, 3).unwrap();
        assert_eq!(path, ShortestPath::unreachable());
        assert!(path.weight.is_infinite());
        assert!(!path.is_reachable());
    }

    #[test]
    fn test_invalid_endpoint() {
        let graph = graph(1, &[]);
        assert!(matches!(
            dijkstra_shortest(&graph, 5, 0),
            Err(Error::InvalidNodeIndex { index: 5, .. })
        ));
    }
}

//! Path searches over the road graph

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod to_geojson;

pub use bfs::bfs_shortest_hops;
pub use dfs::{DfsLimits, DfsStop, PathEnumeration, dfs_all_paths};
pub use dijkstra::{ShortestPath, dijkstra_shortest};

use crate::NodeId;

/// Walks predecessor links back from `goal` and returns the path start-first.
/// The start node is the one without a predecessor.
pub(crate) fn reconstruct_path(predecessors: &[Option<NodeId>], goal: NodeId) -> Vec<NodeId> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(previous) = predecessors[current] {
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}

#[cfg(test)]
pub(crate) mod test_graphs {
    use geo::Point;

    use crate::RoadGraph;

    /// Graph whose node `i` sits at `(i, 0)`
    pub(crate) fn graph(nodes: usize, edges: &[(usize, usize, f64)]) -> RoadGraph {
        let points = (0..nodes).map(|i| Point::new(i as f64, 0.0)).collect();
        RoadGraph::from_parts(points, edges.iter().copied()).expect("valid test graph")
    }

    pub(crate) fn graph_at(points: &[(f64, f64)], edges: &[(usize, usize, f64)]) -> RoadGraph {
        let points = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
        RoadGraph::from_parts(points, edges.iter().copied()).expect("valid test graph")
    }

    /// Adds both directions of every edge
    pub(crate) fn undirected(edges: &[(usize, usize, f64)]) -> Vec<(usize, usize, f64)> {
        edges
            .iter()
            .flat_map(|&(u, v, w)| [(u, v, w), (v, u, w)])
            .collect()
    }
}

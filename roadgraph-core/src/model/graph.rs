//! Road graph: dense node table plus per-node outgoing adjacency lists

use geo::{Coord, LineString, Point};

use super::components::Edge;
use crate::{Error, NodeId, Weight};

/// Immutable directed road graph.
///
/// Node ids are dense (`0..node_count`), every id has a coordinate and an
/// adjacency entry (possibly empty), and every edge target is a valid id.
/// Graphs are produced by [`crate::GraphBuilder`] or [`RoadGraph::from_parts`]
/// and never change afterwards, so a single instance can be shared by any
/// number of concurrent read-only queries.
#[derive(Debug, Clone, Default)]
pub struct RoadGraph {
    nodes: Vec<Point<f64>>,
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl RoadGraph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Assembles a graph from a node table and a list of `(from, to, weight)`
    /// directed edges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNodeIndex`] if an edge references a node outside
    /// the table and [`Error::InvalidData`] for negative or NaN weights.
    pub fn from_parts<I>(nodes: Vec<Point<f64>>, edges: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (NodeId, NodeId, Weight)>,
    {
        let mut graph = Self {
            adjacency: vec![Vec::new(); nodes.len()],
            nodes,
            edge_count: 0,
        };

        for (from, to, weight) in edges {
            graph.validate_node(from)?;
            graph.validate_node(to)?;
            if weight.is_nan() || weight < 0.0 {
                return Err(Error::InvalidData(format!(
                    "edge {from} -> {to} has invalid weight {weight}"
                )));
            }
            graph.add_edge(from, to, weight);
        }

        Ok(graph)
    }

    pub(crate) fn add_node(&mut self, geometry: Point<f64>) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(geometry);
        self.adjacency.push(Vec::new());
        id
    }

    pub(crate) fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) {
        debug_assert!(to < self.nodes.len(), "edge target {to} is not a node");
        self.adjacency[from].push(Edge::new(to, weight));
        self.edge_count += 1;
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node < self.nodes.len()
    }

    /// Check that `node` belongs to the node table
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNodeIndex`] for ids outside `0..node_count`.
    pub fn validate_node(&self, node: NodeId) -> Result<(), Error> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(Error::InvalidNodeIndex {
                index: node,
                node_count: self.nodes.len(),
            })
        }
    }

    /// Coordinate of a node, `None` for unknown ids
    pub fn coordinate(&self, node: NodeId) -> Option<Point<f64>> {
        self.nodes.get(node).copied()
    }

    /// Coordinate lookup for ids already known to be valid
    pub(crate) fn point(&self, node: NodeId) -> Point<f64> {
        self.nodes[node]
    }

    /// Outgoing edges of a node; unknown ids have none
    pub fn edges(&self, node: NodeId) -> &[Edge] {
        self.adjacency.get(node).map_or(&[], Vec::as_slice)
    }

    /// Targets of the outgoing edges of `node`, in insertion order
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.edges(node).iter().map(|edge| edge.target)
    }

    /// All nodes with their coordinates, in id order
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = (NodeId, Point<f64>)> + '_ {
        self.nodes.iter().copied().enumerate()
    }

    /// Squared planar distance between a node and an arbitrary point
    pub(crate) fn distance_2(&self, node: NodeId, x: f64, y: f64) -> f64 {
        let point = self.nodes[node];
        let dx = point.x() - x;
        let dy = point.y() - y;
        dx * dx + dy * dy
    }

    /// Nearest node by exhaustive scan.
    ///
    /// Picks the lowest id among exact ties. Returns `None` for an empty graph
    /// or a non-finite query point.
    pub fn nearest_node_linear(&self, lon: f64, lat: f64) -> Option<NodeId> {
        if self.nodes.is_empty() || !lon.is_finite() || !lat.is_finite() {
            return None;
        }

        // Seeded with node 0 so overflowing distances still pick a node
        let mut best = 0;
        let mut best_distance = self.distance_2(0, lon, lat);
        for node in 1..self.nodes.len() {
            let distance = self.distance_2(node, lon, lat);
            if distance < best_distance {
                best_distance = distance;
                best = node;
            }
        }
        Some(best)
    }

    /// Coordinates of the nodes along a path
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNodeIndex`] if the path contains an unknown id.
    pub fn path_coordinates(&self, path: &[NodeId]) -> Result<Vec<Coord<f64>>, Error> {
        path.iter()
            .map(|&node| {
                self.validate_node(node)?;
                Ok(self.nodes[node].into())
            })
            .collect()
    }

    /// Path rendered as a polyline through its node coordinates
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNodeIndex`] if the path contains an unknown id.
    pub fn path_geometry(&self, path: &[NodeId]) -> Result<LineString<f64>, Error> {
        Ok(LineString::new(self.path_coordinates(path)?))
    }

    /// Total weight of a path, taking the lightest edge between each pair of
    /// consecutive nodes. `None` if some consecutive pair is not connected.
    pub fn path_weight(&self, path: &[NodeId]) -> Option<Weight> {
        path.windows(2).try_fold(0.0, |total, pair| {
            self.edges(pair[0])
                .iter()
                .filter(|edge| edge.target == pair[1])
                .map(|edge| edge.weight)
                .min_by(f64::total_cmp)
                .map(|weight| total + weight)
        })
    }
}

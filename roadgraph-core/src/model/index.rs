//! Spatial snapping of arbitrary coordinates onto road graph nodes

use geo::Point;
use rayon::prelude::*;
use rstar::{RTree, primitives::GeomWithData};

use super::graph::RoadGraph;
use crate::NodeId;

pub type IndexedNode = GeomWithData<[f64; 2], NodeId>;

/// R-tree over node coordinates.
///
/// Answers exactly like [`RoadGraph::nearest_node_linear`]: minimal squared
/// planar distance, lowest id among exact ties, `None` only for an empty
/// graph (or a non-finite query point).
#[derive(Debug, Clone)]
pub struct NearestNodeIndex {
    rtree: RTree<IndexedNode>,
}

impl NearestNodeIndex {
    pub fn new(graph: &RoadGraph) -> Self {
        let points = graph
            .nodes()
            .map(|(id, point)| GeomWithData::new([point.x(), point.y()], id))
            .collect();

        Self {
            rtree: RTree::bulk_load(points),
        }
    }

    pub fn len(&self) -> usize {
        self.rtree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.rtree.size() == 0
    }

    pub fn nearest_node(&self, lon: f64, lat: f64) -> Option<NodeId> {
        if !lon.is_finite() || !lat.is_finite() {
            return None;
        }

        let mut candidates = self
            .rtree
            .nearest_neighbor_iter_with_distance_2(&[lon, lat]);
        let (first, best_distance) = candidates.next()?;

        // Candidates come in non-decreasing distance order
        let mut best = first.data;
        for (candidate, distance) in candidates {
            if distance > best_distance {
                break;
            }
            best = best.min(candidate.data);
        }
        Some(best)
    }

    pub fn nearest_to_point(&self, point: &Point<f64>) -> Option<NodeId> {
        self.nearest_node(point.x(), point.y())
    }

    /// Snaps a batch of points in parallel
    pub fn nearest_nodes(&self, points: &[Point<f64>]) -> Vec<Option<NodeId>> {
        points
            .par_iter()
            .map(|point| self.nearest_to_point(point))
            .collect()
    }
}

//! Bounded enumeration of simple paths.
//!
//! The search keeps its own stack of frames on the heap instead of recursing,
//! so very long roads cannot overflow the call stack. At every node the
//! neighbours are tried closest-to-goal first (squared planar distance), which
//! makes the order of discovered paths reproducible when a limit cuts the
//! search short.

use fixedbitset::FixedBitSet;
use geo::Point;
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{Error, NodeId, RoadGraph};

/// Safety bounds for [`dfs_all_paths`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DfsLimits {
    /// Stop after this many complete paths
    pub max_paths: usize,
    /// Longest path, in nodes, the search may build
    pub max_depth: usize,
    /// Total forward steps allowed across the whole search
    pub max_expanded: usize,
}

impl Default for DfsLimits {
    fn default() -> Self {
        Self {
            max_paths: 10,
            max_depth: 20_000,
            max_expanded: 200_000,
        }
    }
}

impl DfsLimits {
    pub fn new(max_paths: usize, max_depth: usize, max_expanded: usize) -> Self {
        Self {
            max_paths,
            max_depth,
            max_expanded,
        }
    }
}

/// Why the enumeration ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsStop {
    /// Every simple path within `max_depth` was explored
    Exhausted,
    /// `max_paths` paths were collected
    PathLimit,
    /// `max_expanded` forward steps were taken; the result may be partial
    ExpansionLimit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEnumeration {
    /// Paths in discovery order, each starting at `start` and ending at `goal`
    pub paths: Vec<Vec<NodeId>>,
    /// Forward steps taken
    pub expanded: usize,
    pub stop: DfsStop,
}

impl PathEnumeration {
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn first(&self) -> Option<&[NodeId]> {
        self.paths.first().map(Vec::as_slice)
    }

    /// Whether the expansion budget ran out before the search finished
    pub fn is_truncated(&self) -> bool {
        self.stop == DfsStop::ExpansionLimit
    }

    pub fn into_paths(self) -> Vec<Vec<NodeId>> {
        self.paths
    }
}

/// A node on the current path with the neighbours not tried yet
struct Frame {
    node: NodeId,
    pending: std::vec::IntoIter<NodeId>,
}

impl Frame {
    /// `extendable` is false once the path has reached `max_depth`; such a
    /// frame only backtracks
    fn new(
        graph: &RoadGraph,
        node: NodeId,
        goal: NodeId,
        goal_point: Point<f64>,
        extendable: bool,
    ) -> Self {
        // The goal frame is recorded and popped before its neighbours are read
        let pending = if node == goal || !extendable {
            Vec::new()
        } else {
            graph
                .neighbors(node)
                .map(|next| (graph.distance_2(next, goal_point.x(), goal_point.y()), next))
                .sorted_by(|a, b| a.0.total_cmp(&b.0))
                .map(|(_, next)| next)
                .collect()
        };

        Self {
            node,
            pending: pending.into_iter(),
        }
    }
}

/// Enumerates simple paths from `start` to `goal` within `limits`.
///
/// A node counts as visited only while it is on the current path, so the same
/// node may appear in several returned paths. Hitting a limit is not an error:
/// the paths found so far are returned and [`PathEnumeration::stop`] tells
/// which bound ended the search. `start == goal` yields the single path
/// `[start]`.
///
/// # Errors
///
/// Returns [`Error::InvalidNodeIndex`] if either endpoint is not in the graph.
pub fn dfs_all_paths(
    graph: &RoadGraph,
    start: NodeId,
    goal: NodeId,
    limits: &DfsLimits,
) -> Result<PathEnumeration, Error> {
    graph.validate_node(start)?;
    graph.validate_node(goal)?;

    if start == goal {
        return Ok(PathEnumeration {
            paths: vec![vec![start]],
            expanded: 0,
            stop: DfsStop::Exhausted,
        });
    }
    if limits.max_paths == 0 {
        return Ok(PathEnumeration {
            paths: Vec::new(),
            expanded: 0,
            stop: DfsStop::PathLimit,
        });
    }

    let goal_point = graph.point(goal);
    let mut paths = Vec::new();
    let mut path = vec![start];
    let mut on_path = FixedBitSet::with_capacity(graph.node_count());
    on_path.insert(start);
    let mut stack = vec![Frame::new(
        graph,
        start,
        goal,
        goal_point,
        path.len() < limits.max_depth,
    )];
    let mut expanded = 0;
    let mut stop = DfsStop::Exhausted;

    while let Some(frame) = stack.last_mut() {
        let node = frame.node;

        if node == goal {
            paths.push(path.clone());
            if paths.len() >= limits.max_paths {
                stop = DfsStop::PathLimit;
                break;
            }
            stack.pop();
            on_path.set(node, false);
            path.pop();
            continue;
        }

        let Some(next) = frame.pending.next() else {
            // All neighbours tried, backtrack
            stack.pop();
            on_path.set(node, false);
            path.pop();
            continue;
        };

        if on_path.contains(next) || path.len() >= limits.max_depth {
            continue;
        }

        on_path.insert(next);
        path.push(next);
        stack.push(Frame::new(
            graph,
            next,
            goal,
            goal_point,
            path.len() < limits.max_depth,
        ));

        expanded += 1;
        if expanded >= limits.max_expanded {
            stop = DfsStop::ExpansionLimit;
            break;
        }
    }

    debug!(
        "DFS {start} -> {goal}: {} paths after {expanded} expansions ({stop:?})",
        paths.len()
    );
    Ok(PathEnumeration {
        paths,
        expanded,
        stop,
    })
}

//! Data model for the road network
//!
//! Contains the immutable node/edge graph and the spatial index used to snap
//! arbitrary coordinates onto it.

pub mod components;
pub mod graph;
pub mod index;

pub use components::Edge;
pub use graph::RoadGraph;
pub use index::NearestNodeIndex;

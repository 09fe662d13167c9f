use thiserror::Error;

use crate::NodeId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid node index {index} (graph has {node_count} nodes)")]
    InvalidNodeIndex { index: NodeId, node_count: usize },
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}

use serde::{Deserialize, Serialize};

/// How the weight of each segment of a polyline is derived
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentWeight {
    /// Whole line length divided evenly between its segments
    #[default]
    Uniform,
    /// Planar length of each individual segment
    Exact,
}

/// Road graph construction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphBuilderConfig {
    /// Decimal places kept when merging vertices into nodes
    pub coordinate_precision: u32,
    pub segment_weight: SegmentWeight,
    /// Records whose `access` equals one of these are dropped
    pub excluded_access: Vec<String>,
    /// Records whose functional class equals one of these are dropped
    pub excluded_functional_classes: Vec<String>,
}

impl Default for GraphBuilderConfig {
    fn default() -> Self {
        Self {
            coordinate_precision: 6,
            segment_weight: SegmentWeight::Uniform,
            excluded_access: ["no", "private"].map(String::from).to_vec(),
            excluded_functional_classes: [
                "footway",
                "path",
                "track",
                "pedestrian",
                "steps",
                "cycleway",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

impl GraphBuilderConfig {
    pub(crate) fn is_access_excluded(&self, access: Option<&str>) -> bool {
        access.is_some_and(|value| self.excluded_access.iter().any(|excluded| excluded == value))
    }

    pub(crate) fn is_class_excluded(&self, functional_class: Option<&str>) -> bool {
        functional_class.is_some_and(|value| {
            self.excluded_functional_classes
                .iter()
                .any(|excluded| excluded == value)
        })
    }
}

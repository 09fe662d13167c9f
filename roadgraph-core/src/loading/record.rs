use geo::Geometry;

/// One road record handed over by a geometry reader.
///
/// Attributes are optional; an absent `oneway` means the road is two-way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryRecord {
    /// Expected to be a `LineString` or `MultiLineString`, anything else is skipped
    pub geometry: Option<Geometry<f64>>,
    pub access: Option<String>,
    pub functional_class: Option<String>,
    pub oneway: Option<String>,
}

impl GeometryRecord {
    pub fn new(geometry: impl Into<Geometry<f64>>) -> Self {
        Self {
            geometry: Some(geometry.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_access(mut self, access: impl Into<String>) -> Self {
        self.access = Some(access.into());
        self
    }

    #[must_use]
    pub fn with_functional_class(mut self, functional_class: impl Into<String>) -> Self {
        self.functional_class = Some(functional_class.into());
        self
    }

    #[must_use]
    pub fn with_oneway(mut self, oneway: impl Into<String>) -> Self {
        self.oneway = Some(oneway.into());
        self
    }

    pub fn direction(&self) -> Oneway {
        Oneway::parse(self.oneway.as_deref())
    }
}

/// Which directed edges a road segment `u -> v` produces
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Oneway {
    /// `u -> v` only
    Forward,
    /// `v -> u` only
    Reverse,
    /// Both directions with equal weight
    #[default]
    Both,
}

impl Oneway {
    /// Interprets an OSM-style `oneway` tag, case-insensitive and trimmed.
    /// Unknown values and a missing tag mean two-way.
    pub fn parse(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Self::Both;
        };
        match value.trim().to_ascii_lowercase().as_str() {
            "yes" | "1" | "true" => Self::Forward,
            "-1" | "reverse" => Self::Reverse,
            _ => Self::Both,
        }
    }
}

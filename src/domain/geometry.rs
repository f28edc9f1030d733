/// Geometry envelopes and validity windows
use serde::{Deserialize, Serialize};

/// GeoJSON-like polygon: rings of positions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Aoi {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub coordinates: Option<Vec<Vec<Vec<f64>>>>,
    #[serde(default)]
    pub bbox: Option<Vec<f64>>,
}

/// GeoJSON-like multi-polygon: polygons of rings of positions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Aoi4 {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub coordinates: Option<Vec<Vec<Vec<Vec<f64>>>>>,
    #[serde(default)]
    pub bbox: Option<Vec<f64>>,
}

/// Half-open `[begin, end)` window of strict UTC timestamps
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Validity {
    #[serde(default)]
    pub begin: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

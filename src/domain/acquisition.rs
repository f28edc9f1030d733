/// Acquisition outcomes: dated observations, meshes and orbital positions
use crate::domain::geometry::{Aoi, Validity};
use crate::domain::parameters::MissionBag;
use serde::{Deserialize, Serialize};

/// Orbital position snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pso {
    #[serde(default)]
    pub orbit_number: i32,
    #[serde(default)]
    pub duration_from_start: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PsoHolder {
    #[serde(default)]
    pub pso: Option<Pso>,
}

/// One timed satellite pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatedDto {
    #[serde(default)]
    pub guid: Option<String>,
    #[serde(default)]
    pub satellite: Option<String>,
    #[serde(default)]
    pub orbital_direction: Option<String>,
    #[serde(default)]
    pub access_roll: f64,
    #[serde(default)]
    pub orbit_number: i32,
    #[serde(default)]
    pub pso_start: Option<PsoHolder>,
    #[serde(default)]
    pub pso_middle: Option<PsoHolder>,
    #[serde(default)]
    pub pso_end: Option<PsoHolder>,
    #[serde(default)]
    pub mission_parameters: Option<MissionBag>,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub period: Option<Validity>,
    #[serde(default)]
    pub orbit_cycle_number: i32,
    #[serde(default)]
    pub solar_elevation_angle: f64,
}

/// Spatial tile of a larger area of interest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mesh {
    #[serde(default)]
    pub guid: Option<String>,
    #[serde(default)]
    pub aoi: Option<Aoi>,
    #[serde(default)]
    pub mean_acquisition_duration: f64,
    #[serde(default)]
    pub useful_area: f64,
    #[serde(default)]
    pub grid_cell_ids: Option<Vec<String>>,
    #[serde(default)]
    pub mission_parameters: Option<MissionBag>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Acquisition {
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub dated_dtos: Option<Vec<DatedDto>>,
    #[serde(default)]
    pub meshes: Option<Vec<Mesh>>,
    #[serde(default)]
    pub mission_parameters: Option<MissionBag>,
}

/// Mission, scoring, split, acquisition and download parameter bundles
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Mission-specific extension bag.
///
/// Carried through untouched: the contents are owned by each mission and are
/// not validated by this service.
pub type MissionBag = Map<String, Value>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionParameter {
    #[serde(default)]
    pub constellation: Option<String>,
    #[serde(default)]
    pub satellites: Option<Vec<String>>,
    #[serde(default)]
    pub download_stations: Option<Vec<String>>,
    #[serde(default)]
    pub cloud_cover_notation_mode: Option<String>,
    #[serde(default)]
    pub clear_sky_rejection_selection_threshold: f64,
    #[serde(default)]
    pub clear_sky_rejection_validation_threshold: f64,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub cap: f64,
    #[serde(default)]
    pub monopass: bool,
    #[serde(default)]
    pub acquisition_mode: Option<String>,
    #[serde(default)]
    pub angular_constraints_type: Option<String>,
    #[serde(default)]
    pub bh_min: f64,
    #[serde(default)]
    pub bh_max: f64,
    #[serde(default)]
    pub psi_x_min: f64,
    #[serde(default)]
    pub psi_x_max: f64,
    #[serde(default)]
    pub psi_y_min: f64,
    #[serde(default)]
    pub psi_y_max: f64,
    #[serde(rename = "psyXYMax", default)]
    pub psy_xy_max: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringParameters {
    #[serde(default)]
    pub area_weighting_flag: bool,
    #[serde(default)]
    pub core_weighting_flag: bool,
    #[serde(default)]
    pub catalog_weighting_flag: bool,
    #[serde(default)]
    pub weather_weighting_flag: bool,
    #[serde(default)]
    pub clear_sky_rejection_threshold: i32,
    #[serde(default)]
    pub clear_sky_bonus_threshold: i32,
    #[serde(default)]
    pub mission_parameters: Option<MissionBag>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitParameters {
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub max_mesh_length: f64,
    #[serde(default)]
    pub cap: f64,
    #[serde(default)]
    pub overlap_margin_along_track: f64,
    #[serde(default)]
    pub overlap_margin_across_track: f64,
    #[serde(default)]
    pub mission_parameters: Option<MissionBag>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcquisitionParameters {
    #[serde(default)]
    pub acquisition_type: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub monopass: bool,
    #[serde(default)]
    pub stereo_type: Option<String>,
    #[serde(default)]
    pub luminosity_threshold: i32,
    #[serde(default)]
    pub orbital_phase: Option<String>,
    #[serde(default)]
    pub guidance_mode: Option<String>,
    #[serde(default)]
    pub n_uplet_acquisitions_number: i32,
    #[serde(default)]
    pub mission_parameters: Option<MissionBag>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadBranch {
    #[serde(default)]
    pub inventory_center: Option<String>,
    #[serde(default)]
    pub stations: Option<Vec<String>>,
    #[serde(default)]
    pub validating: bool,
    #[serde(default)]
    pub mission_parameters: Option<MissionBag>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadParameters {
    #[serde(default)]
    pub download_branches: Option<Vec<DownloadBranch>>,
    #[serde(default)]
    pub mission_parameters: Option<MissionBag>,
}

/// Incidence, depointing or forward/backward constraints.
///
/// The discriminator is kept as raw JSON so a non-string value is reported
/// by validation instead of failing deserialization. Variant-specific members
/// stay opaque.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AngularConstraints {
    #[serde(default)]
    pub angular_constraints_type: Option<Value>,
    #[serde(flatten)]
    pub members: MissionBag,
}

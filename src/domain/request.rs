/// Tasking roots: user requests and the programming requests derived from them
use crate::domain::acquisition::Acquisition;
use crate::domain::coverage::CoverageCompletion;
use crate::domain::geometry::{Aoi, Aoi4, Validity};
use crate::domain::parameters::{
    AcquisitionParameters, AngularConstraints, DownloadParameters, MissionBag, MissionParameter,
    ScoringParameters, SplitParameters,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub aoi: Option<Aoi>,
    #[serde(default)]
    pub validity: Option<Validity>,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub user_request_mission_parameters: Option<Vec<MissionParameter>>,
    #[serde(default)]
    pub programming_requests: Option<Vec<ProgrammingRequest>>,
}

impl UserRequest {
    /// True when the request carries no usable external identifier yet
    pub fn needs_external_id(&self) -> bool {
        self.external_id.as_deref().map_or(true, str::is_empty)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgrammingRequest {
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub constellation: Option<String>,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub validity: Option<Validity>,
    #[serde(default)]
    pub activation_date: Option<String>,
    #[serde(default)]
    pub aoi: Option<Aoi4>,
    #[serde(default)]
    pub remaining_to_acquire: Option<Aoi4>,
    #[serde(default)]
    pub satellites: Option<Vec<String>>,
    #[serde(default)]
    pub scoring_parameters: Option<ScoringParameters>,
    #[serde(default)]
    pub split_parameters: Option<SplitParameters>,
    #[serde(default)]
    pub acquisition_parameters: Option<AcquisitionParameters>,
    #[serde(default)]
    pub angular_constraints: Option<AngularConstraints>,
    #[serde(default)]
    pub download_parameters: Option<DownloadParameters>,
    #[serde(default)]
    pub initial_coverage_completion: Option<Vec<CoverageCompletion>>,
    #[serde(default)]
    pub latest_coverage_completion: Option<Vec<CoverageCompletion>>,
    #[serde(default)]
    pub mission_parameters: Option<MissionBag>,
    #[serde(default)]
    pub acquisitions: Option<Vec<Acquisition>>,
}

/// Domain models for satellite tasking requests
pub mod acquisition;
pub mod coverage;
pub mod geometry;
pub mod parameters;
pub mod request;

pub use acquisition::{Acquisition, DatedDto, Mesh, Pso, PsoHolder};
pub use coverage::{CoverageCompletion, Progress};
pub use geometry::{Aoi, Aoi4, Validity};
pub use parameters::{
    AcquisitionParameters, AngularConstraints, DownloadBranch, DownloadParameters,
    MissionParameter, ScoringParameters, SplitParameters,
};
pub use request::{ProgrammingRequest, UserRequest};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub now: DateTime<Utc>,
}

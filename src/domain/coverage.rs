/// Yearly coverage completion tracking
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Progress {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub progress: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageCompletion {
    #[serde(default)]
    pub simulation_year: i32,
    /// Mandatory tri-state: absent/null is reported, not defaulted
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub completion_date: Option<String>,
    #[serde(default)]
    pub progress_at_date: f64,
    #[serde(default)]
    pub progress: Option<Vec<Progress>>,
}

/// Request validation engine
///
/// Walks a deserialized request graph and collects every violation it finds
/// into a [`Report`]. Checks never short-circuit one another: a failure in one
/// field does not hide failures in later fields or nested entities. The walk
/// never mutates its input and never fails.
mod acquisition;
mod coverage;
mod geometry;
mod parameters;
pub mod primitives;
mod request;

use std::fmt;

/// Location of a diagnostic inside the request graph.
///
/// Segments render joined by `": "`, list elements as `"<name> <index>"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Path of a named child field
    pub fn field(&self, name: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(name.to_string());
        Self(segments)
    }

    /// Path of element `index` of a repeated field
    pub fn index(&self, name: &str, index: usize) -> Self {
        self.field(&format!("{} {}", name, index))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(": "))
    }
}

/// Class of a violation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Mandatory entity or field is null
    Missing,
    Enumeration,
    Range,
    Pattern,
    Temporal,
    Geometry,
    /// Validity depends on a sibling field
    CrossField,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub path: FieldPath,
    pub field: &'static str,
    pub violation: Violation,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Ordered collection of diagnostics produced by one traversal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    diagnostics: Vec<Diagnostic>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        path: &FieldPath,
        field: &'static str,
        violation: Violation,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(Diagnostic {
            path: path.clone(),
            field,
            violation,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// True if any diagnostic was raised for `field` with the given class
    #[cfg(test)]
    pub fn has(&self, field: &str, violation: Violation) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.field == field && d.violation == violation)
    }

    /// Flat text form: one newline-terminated line per diagnostic, empty when valid
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for diagnostic in &self.diagnostics {
            writeln!(f, "{}", diagnostic)?;
        }
        Ok(())
    }
}

/// Field-level validation of one entity type
pub trait Validate {
    /// Append this entity's diagnostics, located under `path`
    fn validate_at(&self, path: &FieldPath, report: &mut Report);

    /// Validate as a root entity
    fn validate(&self) -> Report {
        let mut report = Report::new();
        self.validate_at(&FieldPath::root(), &mut report);
        report
    }
}

/// Validate each element of an optional list under `"<name> <index>"`
pub(crate) fn validate_each<T: Validate>(
    items: Option<&[T]>,
    name: &str,
    path: &FieldPath,
    report: &mut Report,
) {
    for (i, item) in items.unwrap_or_default().iter().enumerate() {
        item.validate_at(&path.index(name, i), report);
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use serde_json::{json, Value};

    pub const TS: &str = "2024-01-01T00:00:00.000Z";

    pub fn polygon() -> Value {
        json!({
            "type": "Polygon",
            "coordinates": [[[1.0, 43.0], [2.0, 43.0], [2.0, 44.0], [1.0, 43.0]]],
            "bbox": [1.0, 43.0, 2.0, 44.0]
        })
    }

    pub fn multi_polygon() -> Value {
        json!({
            "type": "MultiPolygon",
            "coordinates": [[[[1.0, 43.0], [2.0, 43.0], [2.0, 44.0], [1.0, 43.0]]]]
        })
    }

    pub fn validity() -> Value {
        json!({ "begin": TS, "end": "2024-12-31T23:59:59.999Z" })
    }

    pub fn coverage_completion() -> Value {
        json!({
            "simulationYear": 2024,
            "completed": true,
            "completionDate": TS,
            "progressAtDate": 100.0,
            "progress": [{ "date": TS, "progress": 42.5 }]
        })
    }

    pub fn acquisition() -> Value {
        json!({
            "externalId": "ACQR_1_2_3",
            "status": "ACTIVATED",
            "datedDtos": [{
                "satellite": "SAT1",
                "orbitalDirection": "ASCENDING",
                "orbitNumber": 1200,
                "psoStart": { "pso": { "orbitNumber": 1200, "durationFromStart": 0.0 } },
                "psoMiddle": { "pso": { "orbitNumber": 1200, "durationFromStart": 4.5 } },
                "psoEnd": { "pso": null },
                "priority": "HIGH",
                "period": validity(),
                "orbitCycleNumber": 3,
                "solarElevationAngle": 45.0
            }],
            "meshes": [{
                "aoi": polygon(),
                "meanAcquisitionDuration": 12.0,
                "usefulArea": 250.0,
                "gridCellIds": ["C1", "C2"]
            }]
        })
    }

    pub fn programming_request() -> Value {
        json!({
            "externalId": "PROGR_1_2",
            "constellation": "PLEIADES",
            "priority": 16,
            "status": "ACTIVATED",
            "validity": validity(),
            "aoi": multi_polygon(),
            "remainingToAcquire": multi_polygon(),
            "satellites": ["SAT1", "SAT2"],
            "scoringParameters": {
                "clearSkyRejectionThreshold": 20,
                "clearSkyBonusThreshold": 80,
                "missionParameters": { "anything": [1, 2, 3] }
            },
            "splitParameters": { "method": "IMPOSED_MESH", "maxMeshLength": 20.0 },
            "acquisitionParameters": {
                "mode": "N_UPLET",
                "stereoType": "FORWARD_BACKWARD",
                "luminosityThreshold": 90,
                "orbitalPhase": "DAY",
                "nUpletAcquisitionsNumber": 4
            },
            "angularConstraints": { "angularConstraintsType": "INCIDENCE", "min": 0, "max": 30 },
            "downloadParameters": {
                "downloadBranches": [{ "inventoryCenter": "TLS1", "stations": ["KIR"] }]
            },
            "initialCoverageCompletion": [coverage_completion()],
            "latestCoverageCompletion": [coverage_completion()],
            "acquisitions": [acquisition()]
        })
    }

    pub fn mission_parameter() -> Value {
        json!({
            "constellation": "PLEIADES",
            "satellites": ["SAT1"],
            "cloudCoverNotationMode": "AUTOMATIC",
            "clearSkyRejectionSelectionThreshold": 100.0,
            "clearSkyRejectionValidationThreshold": 0.0,
            "priority": 16,
            "acquisitionMode": "STEREO",
            "angularConstraintsType": "DEPOINTING"
        })
    }

    pub fn user_request() -> Value {
        json!({
            "externalId": "UR-2024/001",
            "status": "CREATED",
            "aoi": polygon(),
            "validity": validity(),
            "priority": 3,
            "userRequestMissionParameters": [mission_parameter()],
            "programmingRequests": [programming_request()]
        })
    }
}

/// Parameter bundle checks
use super::primitives::{enum_ok, in_range, is_station_code, is_unset};
use super::{validate_each, FieldPath, Report, Validate, Violation};
use crate::domain::{
    AcquisitionParameters, AngularConstraints, DownloadBranch, DownloadParameters,
    MissionParameter, ScoringParameters, SplitParameters,
};
use serde_json::Value;

const CLOUD_COVER_NOTATION_MODES: &[&str] = &["MANUAL", "AUTOMATIC"];
const MISSION_ACQUISITION_MODES: &[&str] = &["MONOSCOPIC", "STEREO", "TRISTEREO", "N_UPLET"];
const MISSION_ANGULAR_CONSTRAINTS_TYPES: &[&str] = &["DEPOINTING"];
const SPLIT_METHODS: &[&str] = &[
    "WORLD_LAYERED_SPLIT",
    "DYNAMIC_FIXED_ORIENTATION",
    "IMPOSED_MESH",
];
const ACQUISITION_MODES: &[&str] = &["MONOSCOPIC", "STEREO", "TRISTEREO", "QUADRISTEREO", "N_UPLET"];
const STEREO_TYPES: &[&str] = &["QUASI_SYMETRICAL", "FORWARD_BACKWARD"];
const ORBITAL_PHASES: &[&str] = &["DAY", "NIGHT"];
const ANGULAR_CONSTRAINTS_TYPES: &[&str] = &["INCIDENCE", "DEPOINTING", "FORWARD_BACKWARD"];

pub const N_UPLET: &str = "N_UPLET";
pub const MAX_PRIORITY: i32 = 16;

impl Validate for MissionParameter {
    fn validate_at(&self, path: &FieldPath, report: &mut Report) {
        if !enum_ok(self.cloud_cover_notation_mode.as_deref(), CLOUD_COVER_NOTATION_MODES) {
            report.push(
                path,
                "cloudCoverNotationMode",
                Violation::Enumeration,
                "cloudCoverNotationMode invalid",
            );
        }
        if !in_range(self.clear_sky_rejection_selection_threshold, 0.0, 100.0) {
            report.push(
                path,
                "clearSkyRejectionSelectionThreshold",
                Violation::Range,
                "clearSkyRejectionSelectionThreshold invalid",
            );
        }
        if !in_range(self.clear_sky_rejection_validation_threshold, 0.0, 100.0) {
            report.push(
                path,
                "clearSkyRejectionValidationThreshold",
                Violation::Range,
                "clearSkyRejectionValidationThreshold invalid",
            );
        }
        if !in_range(self.priority, 0, MAX_PRIORITY) {
            report.push(path, "priority", Violation::Range, "priority invalid");
        }
        if !enum_ok(self.acquisition_mode.as_deref(), MISSION_ACQUISITION_MODES) {
            report.push(
                path,
                "acquisitionMode",
                Violation::Enumeration,
                "acquisitionMode invalid",
            );
        }
        if !enum_ok(
            self.angular_constraints_type.as_deref(),
            MISSION_ANGULAR_CONSTRAINTS_TYPES,
        ) {
            report.push(
                path,
                "angularConstraintsType",
                Violation::Enumeration,
                "angularConstraintsType invalid",
            );
        }
    }
}

impl Validate for ScoringParameters {
    fn validate_at(&self, path: &FieldPath, report: &mut Report) {
        if !in_range(self.clear_sky_bonus_threshold, 0, 100) {
            report.push(
                path,
                "clearSkyBonusThreshold",
                Violation::Range,
                "clearSkyBonusThreshold invalid",
            );
        }
        if !in_range(self.clear_sky_rejection_threshold, 0, 100) {
            report.push(
                path,
                "clearSkyRejectionThreshold",
                Violation::Range,
                "clearSkyRejectionThreshold invalid",
            );
        }
    }
}

impl Validate for SplitParameters {
    fn validate_at(&self, path: &FieldPath, report: &mut Report) {
        if !enum_ok(self.method.as_deref(), SPLIT_METHODS) {
            report.push(path, "method", Violation::Enumeration, "invalid method");
        }
    }
}

impl Validate for AcquisitionParameters {
    fn validate_at(&self, path: &FieldPath, report: &mut Report) {
        if !enum_ok(self.mode.as_deref(), ACQUISITION_MODES) {
            report.push(path, "mode", Violation::Enumeration, "invalid mode");
        }
        if !enum_ok(self.stereo_type.as_deref(), STEREO_TYPES) {
            report.push(path, "stereoType", Violation::Enumeration, "invalid stereoType");
        }
        if !in_range(self.luminosity_threshold, 0, 90) {
            report.push(
                path,
                "luminosityThreshold",
                Violation::Range,
                "luminosityThreshold invalid",
            );
        }
        if !enum_ok(self.orbital_phase.as_deref(), ORBITAL_PHASES) {
            report.push(path, "orbitalPhase", Violation::Enumeration, "invalid orbitalPhase");
        }
        // Only N_UPLET acquisitions may carry a count.
        if self.n_uplet_acquisitions_number > 0 && self.mode.as_deref() != Some(N_UPLET) {
            report.push(
                path,
                "nUpletAcquisitionsNumber",
                Violation::CrossField,
                "invalid nUpletAcquisitionsNumber",
            );
        }
    }
}

impl Validate for DownloadBranch {
    fn validate_at(&self, path: &FieldPath, report: &mut Report) {
        let center = self.inventory_center.as_deref();
        if !is_unset(center) && !center.is_some_and(is_station_code) {
            report.push(
                path,
                "inventoryCenter",
                Violation::Pattern,
                "inventoryCenter invalid",
            );
        }
    }
}

impl Validate for DownloadParameters {
    fn validate_at(&self, path: &FieldPath, report: &mut Report) {
        validate_each(
            self.download_branches.as_deref(),
            "downloadBranches",
            path,
            report,
        );
    }
}

impl Validate for AngularConstraints {
    fn validate_at(&self, path: &FieldPath, report: &mut Report) {
        let kind = self
            .angular_constraints_type
            .as_ref()
            .and_then(Value::as_str)
            .unwrap_or_default();
        if !ANGULAR_CONSTRAINTS_TYPES.contains(&kind) {
            report.push(
                path,
                "angularConstraintsType",
                Violation::Enumeration,
                "angularConstraints type invalid",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::fixtures;
    use serde_json::json;

    fn mission(priority: i32) -> MissionParameter {
        let mut value = fixtures::mission_parameter();
        value["priority"] = json!(priority);
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_mission_parameter_priority_bounds() {
        assert!(mission(16).validate().is_empty());
        assert!(mission(0).validate().is_empty());

        let report = mission(17).validate();
        assert_eq!(report.render(), "priority invalid\n");
        assert!(report.has("priority", Violation::Range));
    }

    #[test]
    fn test_mission_parameter_defaults_are_valid() {
        assert!(MissionParameter::default().validate().is_empty());
    }

    #[test]
    fn test_mission_parameter_collects_every_failure() {
        let parameter: MissionParameter = serde_json::from_value(json!({
            "cloudCoverNotationMode": "SOMETIMES",
            "clearSkyRejectionSelectionThreshold": 101.0,
            "clearSkyRejectionValidationThreshold": -1.0,
            "priority": -1,
            "acquisitionMode": "QUADRISTEREO",
            "angularConstraintsType": "INCIDENCE",
            "missionSpecific": { "ignored": true }
        }))
        .unwrap();
        let report = parameter.validate();
        assert_eq!(report.len(), 6);
        assert!(report.has("acquisitionMode", Violation::Enumeration));
        assert!(report.has("angularConstraintsType", Violation::Enumeration));
    }

    #[test]
    fn test_n_uplet_count_requires_n_uplet_mode() {
        let parameters = AcquisitionParameters {
            mode: Some("MONOSCOPIC".to_string()),
            n_uplet_acquisitions_number: 3,
            ..Default::default()
        };
        let report = parameters.validate();
        assert!(report.has("nUpletAcquisitionsNumber", Violation::CrossField));
        assert_eq!(report.render(), "invalid nUpletAcquisitionsNumber\n");

        let unset_mode = AcquisitionParameters {
            n_uplet_acquisitions_number: 3,
            ..Default::default()
        };
        assert!(unset_mode.validate().has("nUpletAcquisitionsNumber", Violation::CrossField));

        let n_uplet = AcquisitionParameters {
            mode: Some(N_UPLET.to_string()),
            n_uplet_acquisitions_number: 3,
            ..Default::default()
        };
        assert!(n_uplet.validate().is_empty());
    }

    #[test]
    fn test_acquisition_parameters_enums_and_luminosity() {
        let parameters = AcquisitionParameters {
            mode: Some("STEREO".to_string()),
            stereo_type: Some("SIDEWAYS".to_string()),
            luminosity_threshold: 91,
            orbital_phase: Some("DUSK".to_string()),
            ..Default::default()
        };
        assert_eq!(
            parameters.validate().render(),
            "invalid stereoType\nluminosityThreshold invalid\ninvalid orbitalPhase\n"
        );
    }

    #[test]
    fn test_scoring_thresholds() {
        let scoring = ScoringParameters {
            clear_sky_bonus_threshold: 101,
            clear_sky_rejection_threshold: -5,
            ..Default::default()
        };
        assert_eq!(
            scoring.validate().render(),
            "clearSkyBonusThreshold invalid\nclearSkyRejectionThreshold invalid\n"
        );
    }

    #[test]
    fn test_split_method() {
        let split = SplitParameters {
            method: Some("RANDOM".to_string()),
            ..Default::default()
        };
        assert_eq!(split.validate().render(), "invalid method\n");
        assert!(SplitParameters::default().validate().is_empty());
    }

    #[test]
    fn test_download_branches_are_indexed() {
        let download: DownloadParameters = serde_json::from_value(json!({
            "downloadBranches": [
                { "inventoryCenter": "KIR" },
                { "inventoryCenter": "" },
                { "inventoryCenter": "TOULOUSE" }
            ]
        }))
        .unwrap();
        let mut report = Report::new();
        download.validate_at(&FieldPath::root().field("downloadParameters"), &mut report);
        assert_eq!(
            report.render(),
            "downloadParameters: downloadBranches 2: inventoryCenter invalid\n"
        );
    }

    #[test]
    fn test_angular_constraints_discriminator_required() {
        let missing: AngularConstraints = serde_json::from_value(json!({ "min": 10 })).unwrap();
        assert!(missing
            .validate()
            .has("angularConstraintsType", Violation::Enumeration));

        let depointing: AngularConstraints = serde_json::from_value(json!({
            "angularConstraintsType": "DEPOINTING",
            "maxRoll": 30
        }))
        .unwrap();
        assert!(depointing.validate().is_empty());
        assert!(depointing.members.contains_key("maxRoll"));
    }

    #[test]
    fn test_angular_constraints_non_string_discriminator_is_reported() {
        for kind in [json!(5), json!(true), json!({ "name": "INCIDENCE" }), json!(null)] {
            let constraints: AngularConstraints =
                serde_json::from_value(json!({ "angularConstraintsType": kind })).unwrap();
            let report = constraints.validate();
            assert_eq!(report.render(), "angularConstraints type invalid\n");
        }
    }
}

/// Root request checks
use super::geometry::{MULTI_POLYGON, POLYGON};
use super::parameters::MAX_PRIORITY;
use super::primitives::{enum_ok, in_range, is_programming_request_id, is_safe_string, is_unset};
use super::{validate_each, FieldPath, Report, Validate, Violation};
use crate::domain::{ProgrammingRequest, UserRequest};

const USER_REQUEST_STATUSES: &[&str] =
    &["CREATED", "ANALYZED", "ACTIVATED", "COMPLETED", "CANCELLED"];
const PROGRAMMING_REQUEST_STATUSES: &[&str] = &["ACTIVATED", "CANCELLED", "EXPIRED", "COMPLETED"];

impl Validate for UserRequest {
    fn validate_at(&self, path: &FieldPath, report: &mut Report) {
        let external_id = self.external_id.as_deref();
        if !is_unset(external_id) && !external_id.is_some_and(is_safe_string) {
            report.push(path, "externalId", Violation::Pattern, "externalId invalid");
        }
        if !enum_ok(self.status.as_deref(), USER_REQUEST_STATUSES) {
            report.push(path, "status", Violation::Enumeration, "invalid status");
        }

        match &self.aoi {
            None => report.push(path, "aoi", Violation::Missing, "aoi is null"),
            Some(aoi) => aoi.validate_as(POLYGON, &path.field("aoi"), report),
        }
        match &self.validity {
            None => report.push(path, "validity", Violation::Missing, "validity is null"),
            Some(validity) => validity.validate_at(&path.field("validity"), report),
        }
        match &self.user_request_mission_parameters {
            None => report.push(
                path,
                "userRequestMissionParameters",
                Violation::Missing,
                "userRequestMissionParameters is null",
            ),
            Some(parameters) => validate_each(
                Some(parameters.as_slice()),
                "userRequestMissionParameter",
                path,
                report,
            ),
        }

        validate_each(
            self.programming_requests.as_deref(),
            "programmingRequest",
            path,
            report,
        );
    }
}

impl Validate for ProgrammingRequest {
    fn validate_at(&self, path: &FieldPath, report: &mut Report) {
        let external_id = self.external_id.as_deref();
        if !is_unset(external_id) && !external_id.is_some_and(is_programming_request_id) {
            report.push(path, "externalId", Violation::Pattern, "externalId invalid");
        }
        if !self.constellation.as_deref().is_some_and(is_safe_string) {
            report.push(
                path,
                "constellation",
                Violation::Pattern,
                "constellation invalid",
            );
        }
        if !in_range(self.priority, 0, MAX_PRIORITY) {
            report.push(path, "priority", Violation::Range, "priority invalid");
        }
        if !enum_ok(self.status.as_deref(), PROGRAMMING_REQUEST_STATUSES) {
            report.push(path, "status", Violation::Enumeration, "status invalid");
        }
        if let Some(validity) = &self.validity {
            validity.validate_at(&path.field("validity"), report);
        }

        match &self.aoi {
            None => report.push(path, "aoi", Violation::Missing, "aoi is null"),
            Some(aoi) => aoi.validate_as(MULTI_POLYGON, &path.field("aoi"), report),
        }
        if let Some(remaining) = &self.remaining_to_acquire {
            remaining.validate_as(MULTI_POLYGON, &path.field("remainingToAcquire"), report);
        }

        if self.satellites.as_ref().map_or(true, Vec::is_empty) {
            report.push(path, "satellites", Violation::Missing, "satellites invalid");
        }

        if let Some(scoring) = &self.scoring_parameters {
            scoring.validate_at(&path.field("scoringParameters"), report);
        }
        if let Some(split) = &self.split_parameters {
            split.validate_at(&path.field("splitParameters"), report);
        }
        if let Some(acquisition) = &self.acquisition_parameters {
            acquisition.validate_at(&path.field("acquisitionParameters"), report);
        }
        // Only the discriminator is checked; it is reported at this level.
        if let Some(constraints) = &self.angular_constraints {
            constraints.validate_at(path, report);
        }
        if let Some(download) = &self.download_parameters {
            download.validate_at(&path.field("downloadParameters"), report);
        }

        validate_each(
            self.initial_coverage_completion.as_deref(),
            "initialCoverageCompletion",
            path,
            report,
        );
        validate_each(
            self.latest_coverage_completion.as_deref(),
            "latestCoverageCompletion",
            path,
            report,
        );
        validate_each(self.acquisitions.as_deref(), "acquisition", path, report);
    }
}

/// Acquisition result checks
use super::geometry::POLYGON;
use super::primitives::{enum_ok, in_range, is_acquisition_id};
use super::{validate_each, FieldPath, Report, Validate, Violation};
use crate::domain::{Acquisition, DatedDto, Mesh, Pso, PsoHolder};

const ORBITAL_DIRECTIONS: &[&str] = &["ASCENDING", "DESCENDING"];
const DATED_PRIORITIES: &[&str] = &["NONE", "LOW", "NORMAL", "HIGH", "FULL"];
const ACQUISITION_STATUSES: &[&str] = &["ACTIVATED", "CANCELLED", "COMPLETED"];

impl Validate for Pso {
    fn validate_at(&self, path: &FieldPath, report: &mut Report) {
        if self.orbit_number < 0 {
            report.push(path, "orbitNumber", Violation::Range, "orbitNumber invalid");
        }
        if self.duration_from_start < 0.0 {
            report.push(
                path,
                "durationFromStart",
                Violation::Range,
                "durationFromStart invalid",
            );
        }
    }
}

impl Validate for PsoHolder {
    fn validate_at(&self, path: &FieldPath, report: &mut Report) {
        if let Some(pso) = &self.pso {
            pso.validate_at(&path.field("pso"), report);
        }
    }
}

impl Validate for DatedDto {
    fn validate_at(&self, path: &FieldPath, report: &mut Report) {
        if !enum_ok(self.orbital_direction.as_deref(), ORBITAL_DIRECTIONS) {
            report.push(
                path,
                "orbitalDirection",
                Violation::Enumeration,
                "orbitalDirection invalid",
            );
        }
        if self.orbit_number < 0 {
            report.push(path, "orbitNumber", Violation::Range, "orbitNumber invalid");
        }
        if self.orbit_cycle_number < 0 {
            report.push(
                path,
                "orbitCycleNumber",
                Violation::Range,
                "orbitCycleNumber invalid",
            );
        }

        let snapshots = [
            ("psoStart", &self.pso_start),
            ("psoMiddle", &self.pso_middle),
            ("psoEnd", &self.pso_end),
        ];
        for (name, holder) in snapshots {
            if let Some(holder) = holder {
                holder.validate_at(&path.field(name), report);
            }
        }

        if !enum_ok(self.priority.as_deref(), DATED_PRIORITIES) {
            report.push(path, "priority", Violation::Enumeration, "invalid priority");
        }
        if let Some(period) = &self.period {
            period.validate_at(&path.field("period"), report);
        }
        if !in_range(self.solar_elevation_angle, 0.0, 90.0) {
            report.push(
                path,
                "solarElevationAngle",
                Violation::Range,
                "solarElevationAngle invalid",
            );
        }
    }
}

impl Validate for Mesh {
    fn validate_at(&self, path: &FieldPath, report: &mut Report) {
        if let Some(aoi) = &self.aoi {
            aoi.validate_as(POLYGON, &path.field("aoi"), report);
        }
        if self.mean_acquisition_duration < 0.0 {
            report.push(
                path,
                "meanAcquisitionDuration",
                Violation::Range,
                "meanAcquisitionDuration invalid",
            );
        }
        if self.useful_area < 0.0 {
            report.push(path, "usefulArea", Violation::Range, "usefulArea invalid");
        }
    }
}

impl Validate for Acquisition {
    fn validate_at(&self, path: &FieldPath, report: &mut Report) {
        if self
            .external_id
            .as_deref()
            .is_some_and(|id| !is_acquisition_id(id))
        {
            report.push(path, "externalId", Violation::Pattern, "invalid externalid");
        }
        if !enum_ok(self.status.as_deref(), ACQUISITION_STATUSES) {
            report.push(path, "status", Violation::Enumeration, "invalid status");
        }
        validate_each(self.dated_dtos.as_deref(), "dateDtos", path, report);
        validate_each(self.meshes.as_deref(), "meshes", path, report);
    }
}

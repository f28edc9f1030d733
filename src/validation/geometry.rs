/// Geometry envelope and validity window checks
use super::primitives::is_strict_timestamp;
use super::{FieldPath, Report, Validate, Violation};
use crate::domain::{Aoi, Aoi4, Validity};

pub const POLYGON: &str = "Polygon";
pub const MULTI_POLYGON: &str = "MultiPolygon";

const MIN_BBOX_LEN: usize = 4;

impl Aoi {
    /// Check declared type, three non-empty nesting levels and bbox length
    pub fn validate_as(&self, expected_type: &str, path: &FieldPath, report: &mut Report) {
        check_type(self.kind.as_deref(), expected_type, path, report);

        let populated = self
            .coordinates
            .as_ref()
            .and_then(|polygon| polygon.first())
            .and_then(|ring| ring.first())
            .is_some_and(|position| !position.is_empty());
        if !populated {
            report.push(path, "coordinates", Violation::Geometry, "Empty coordinates");
        }

        check_bbox(self.bbox.as_deref(), path, report);
    }
}

impl Aoi4 {
    /// Same checks as [`Aoi::validate_as`] over four nesting levels
    pub fn validate_as(&self, expected_type: &str, path: &FieldPath, report: &mut Report) {
        check_type(self.kind.as_deref(), expected_type, path, report);

        let populated = self
            .coordinates
            .as_ref()
            .and_then(|multi| multi.first())
            .and_then(|polygon| polygon.first())
            .and_then(|ring| ring.first())
            .is_some_and(|position| !position.is_empty());
        if !populated {
            report.push(path, "coordinates", Violation::Geometry, "Empty coordinates");
        }

        check_bbox(self.bbox.as_deref(), path, report);
    }
}

fn check_type(kind: Option<&str>, expected_type: &str, path: &FieldPath, report: &mut Report) {
    if kind != Some(expected_type) {
        report.push(path, "type", Violation::Geometry, "Invalid type");
    }
}

fn check_bbox(bbox: Option<&[f64]>, path: &FieldPath, report: &mut Report) {
    if bbox.is_some_and(|b| b.len() < MIN_BBOX_LEN) {
        report.push(path, "bbox", Violation::Geometry, "bbox not enough numbers");
    }
}

impl Validate for Validity {
    // Each bound is parsed on its own so both failures are reported.
    fn validate_at(&self, path: &FieldPath, report: &mut Report) {
        if !is_strict_timestamp(self.begin.as_deref()) {
            report.push(path, "begin", Violation::Temporal, "failed to parse begin");
        }
        if !is_strict_timestamp(self.end.as_deref()) {
            report.push(path, "end", Violation::Temporal, "failed to parse end");
        }
    }
}

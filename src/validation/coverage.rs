/// Coverage completion checks
use super::primitives::{in_range, is_strict_timestamp, is_unset};
use super::{validate_each, FieldPath, Report, Validate, Violation};
use crate::domain::{CoverageCompletion, Progress};

impl Validate for Progress {
    fn validate_at(&self, path: &FieldPath, report: &mut Report) {
        if !is_strict_timestamp(self.date.as_deref()) {
            report.push(path, "date", Violation::Temporal, "failed to parse date");
        }
        if !in_range(self.progress, 0.0, 100.0) {
            report.push(path, "progress", Violation::Range, "invalid progress");
        }
    }
}

impl Validate for CoverageCompletion {
    fn validate_at(&self, path: &FieldPath, report: &mut Report) {
        match self.completed {
            None => report.push(path, "completed", Violation::Missing, "invalid completed"),
            Some(true) => {
                let date = self.completion_date.as_deref();
                if is_unset(date) {
                    report.push(
                        path,
                        "completionDate",
                        Violation::Missing,
                        "invalid completion date",
                    );
                } else if !is_strict_timestamp(date) {
                    report.push(
                        path,
                        "completionDate",
                        Violation::Temporal,
                        "failed to parse completionDate",
                    );
                }
            }
            Some(false) => {}
        }

        if !in_range(self.progress_at_date, 0.0, 100.0) {
            report.push(
                path,
                "progressAtDate",
                Violation::Range,
                "invalid progressAtDate",
            );
        }

        match &self.progress {
            None => report.push(path, "progress", Violation::Missing, "missing progress"),
            Some(series) => validate_each(Some(series.as_slice()), "progress", path, report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::fixtures;
    use serde_json::json;

    fn completion(value: serde_json::Value) -> CoverageCompletion {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_completion() {
        assert!(completion(fixtures::coverage_completion()).validate().is_empty());
    }

    #[test]
    fn test_completed_requires_completion_date() {
        let report = completion(json!({ "completed": true, "progress": [] })).validate();
        assert_eq!(report.render(), "invalid completion date\n");
        assert!(report.has("completionDate", Violation::Missing));
    }

    #[test]
    fn test_not_completed_ignores_completion_date() {
        let report = completion(json!({ "completed": false, "progress": [] })).validate();
        assert!(report.is_empty());

        let report = completion(json!({
            "completed": false,
            "completionDate": "not a date",
            "progress": []
        }))
        .validate();
        assert!(report.is_empty());
    }

    #[test]
    fn test_completion_date_must_be_strict() {
        let report = completion(json!({
            "completed": true,
            "completionDate": "2024-06-01T12:00:00Z",
            "progress": []
        }))
        .validate();
        assert!(report.has("completionDate", Violation::Temporal));
    }

    #[test]
    fn test_null_completed_and_missing_progress() {
        let report = completion(json!({ "completed": null, "progressAtDate": 120.0 })).validate();
        assert_eq!(
            report.render(),
            "invalid completed\ninvalid progressAtDate\nmissing progress\n"
        );
    }

    #[test]
    fn test_progress_series_elements_indexed() {
        let report = completion(json!({
            "completed": false,
            "progress": [
                { "date": fixtures::TS, "progress": 10.0 },
                { "date": "2024-01-01", "progress": 101.0 }
            ]
        }))
        .validate();
        assert_eq!(
            report.render(),
            "progress 1: failed to parse date\nprogress 1: invalid progress\n"
        );
    }
}

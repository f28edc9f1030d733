/// Reusable field checks
use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::LazyLock;

static SAFE_STRING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r##"^[A-Za-z0-9 !"#$%&'*+,\-./:;<=>?@^_`(|)~]{1,500}$"##).unwrap()
});

static PROGRAMMING_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^PROGR_[0-9]+_[0-9]+$").unwrap());

static ACQUISITION_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ACQR_[0-9]+_[0-9]+_[0-9]+$").unwrap());

static STATION_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{3,4}$").unwrap());

// Shape gate for `yyyy-MM-ddTHH:mm:ss.fffZ`; chrono then checks the calendar.
static TIMESTAMP_SHAPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}\.[0-9]{3}Z$").unwrap()
});

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Empty or absent strings count as unset and always pass
pub fn is_unset(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

/// Enum membership; unset values pass
pub fn enum_ok(value: Option<&str>, allowed: &[&str]) -> bool {
    match value {
        Some(v) if !v.is_empty() => allowed.contains(&v),
        _ => true,
    }
}

/// Inclusive range check
pub fn in_range<T: PartialOrd>(value: T, min: T, max: T) -> bool {
    value >= min && value <= max
}

/// Printable ASCII subset, 1 to 500 characters
pub fn is_safe_string(value: &str) -> bool {
    SAFE_STRING_RE.is_match(value)
}

/// `PROGR_<digits>_<digits>`
pub fn is_programming_request_id(value: &str) -> bool {
    PROGRAMMING_ID_RE.is_match(value)
}

/// `ACQR_<digits>_<digits>_<digits>`
pub fn is_acquisition_id(value: &str) -> bool {
    ACQUISITION_ID_RE.is_match(value)
}

/// Three or four alphanumeric characters
pub fn is_station_code(value: &str) -> bool {
    STATION_CODE_RE.is_match(value)
}

/// Parse a strict `yyyy-MM-ddTHH:mm:ss.fffZ` UTC timestamp.
///
/// Any other ISO-8601 rendition (no millis, other precision, numeric offset)
/// is rejected.
pub fn parse_strict_timestamp(value: &str) -> Option<NaiveDateTime> {
    if !TIMESTAMP_SHAPE_RE.is_match(value) {
        return None;
    }
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).ok()
}

pub fn is_strict_timestamp(value: Option<&str>) -> bool {
    value.and_then(parse_strict_timestamp).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_timestamp_accepts_millis_utc() {
        assert!(is_strict_timestamp(Some("2024-01-01T00:00:00.000Z")));
        assert!(is_strict_timestamp(Some("2024-02-29T23:59:59.999Z")));
    }

    #[test]
    fn test_strict_timestamp_rejects_other_iso_forms() {
        assert!(!is_strict_timestamp(Some("2024-01-01T00:00:00Z")));
        assert!(!is_strict_timestamp(Some("2024-01-01")));
        assert!(!is_strict_timestamp(Some("2024-01-01T00:00:00.000000Z")));
        assert!(!is_strict_timestamp(Some("2024-01-01T00:00:00.000+02:00")));
        assert!(!is_strict_timestamp(Some("2024-01-01 00:00:00.000Z")));
        assert!(!is_strict_timestamp(Some("")));
        assert!(!is_strict_timestamp(None));
    }

    #[test]
    fn test_strict_timestamp_rejects_impossible_dates() {
        assert!(!is_strict_timestamp(Some("2023-02-29T00:00:00.000Z")));
        assert!(!is_strict_timestamp(Some("2024-13-01T00:00:00.000Z")));
        assert!(!is_strict_timestamp(Some("2024-01-01T25:00:00.000Z")));
    }

    #[test]
    fn test_enum_unset_always_passes() {
        let allowed = ["DAY", "NIGHT"];
        assert!(enum_ok(None, &allowed));
        assert!(enum_ok(Some(""), &allowed));
        assert!(enum_ok(Some("DAY"), &allowed));
        assert!(!enum_ok(Some("day"), &allowed));
        assert!(!enum_ok(Some("DUSK"), &allowed));
    }

    #[test]
    fn test_in_range_is_inclusive() {
        assert!(in_range(0, 0, 16));
        assert!(in_range(16, 0, 16));
        assert!(!in_range(17, 0, 16));
        assert!(!in_range(-0.5, 0.0, 100.0));
    }

    #[test]
    fn test_safe_string() {
        assert!(is_safe_string("UR-2024/001 (test) #1"));
        assert!(is_safe_string("550e8400-e29b-41d4-a716-446655440000"));
        assert!(!is_safe_string(""));
        assert!(!is_safe_string("tab\there"));
        assert!(!is_safe_string("brace{"));
        assert!(!is_safe_string("é"));
        assert!(is_safe_string(&"a".repeat(500)));
        assert!(!is_safe_string(&"a".repeat(501)));
    }

    #[test]
    fn test_identifiers() {
        assert!(is_programming_request_id("PROGR_12_3"));
        assert!(!is_programming_request_id("PROGR_12"));
        assert!(!is_programming_request_id("progr_1_2"));
        assert!(is_acquisition_id("ACQR_1_22_333"));
        assert!(!is_acquisition_id("ACQR_1_2"));
        assert!(is_station_code("KIR"));
        assert!(is_station_code("TLS1"));
        assert!(!is_station_code("TOULOUSE"));
        assert!(!is_station_code("K_R"));
    }
}

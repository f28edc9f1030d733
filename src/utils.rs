/// Utility functions
use serde_json::Value;
use uuid::Uuid;

/// Fresh identifier for requests submitted without one
pub fn new_external_id() -> String {
    Uuid::new_v4().to_string()
}

/// Write a string member into a JSON object; no-op on non-objects
pub fn set_str_field(v: &mut Value, key: &str, value: &str) {
    if let Some(obj) = v.as_object_mut() {
        obj.insert(key.to_string(), Value::String(value.to_string()));
    }
}

// Providers layer: reqwest adapters for the remote data sources. Each one
// validates the response shape strictly; a missing or wrong-kind field is a
// MalformedResponse, never a default value.

pub mod geoip;
pub mod price;
pub mod repos;
pub mod weather;

use crate::utils::error::{DashError, Result};
use serde_json::Value;

pub(crate) fn require_f64(obj: &Value, field: &str) -> Result<f64> {
    obj.get(field)
        .and_then(Value::as_f64)
        .ok_or_else(|| DashError::MalformedResponse {
            message: format!("missing or non-numeric field '{}'", field),
        })
}

pub(crate) fn require_u64(obj: &Value, field: &str) -> Result<u64> {
    obj.get(field)
        .and_then(Value::as_u64)
        .ok_or_else(|| DashError::MalformedResponse {
            message: format!("missing or non-integer field '{}'", field),
        })
}

pub(crate) fn require_str<'a>(obj: &'a Value, field: &str) -> Result<&'a str> {
    obj.get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| DashError::MalformedResponse {
            message: format!("missing or non-string field '{}'", field),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn require_helpers_reject_missing_and_wrong_kind() {
        let obj = json!({"n": 1.5, "s": "x", "i": 3});
        assert_eq!(require_f64(&obj, "n").unwrap(), 1.5);
        assert_eq!(require_str(&obj, "s").unwrap(), "x");
        assert_eq!(require_u64(&obj, "i").unwrap(), 3);

        assert!(require_f64(&obj, "missing").is_err());
        assert!(require_f64(&obj, "s").is_err());
        assert!(require_str(&obj, "n").is_err());
    }
}

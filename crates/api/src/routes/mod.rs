//! Route Handlers

pub mod credentials;
pub mod decode;
pub mod listings;
pub mod valuation;

use serde_json::Value;

use crate::error::ApiError;

/// Require a non-empty, trimmed VIN from the request body
pub(crate) fn require_vin(vin: Option<&str>) -> Result<String, ApiError> {
    let vin = vin.unwrap_or("").trim();
    if vin.is_empty() {
        return Err(ApiError::BadRequest("VIN is required".to_string()));
    }
    Ok(vin.to_string())
}

/// Require an integer field, accepting numeric strings the way lenient
/// clients send them ("88000"). Fractional numbers truncate; anything
/// else rejects.
pub(crate) fn integer_field(value: Option<&Value>, name: &str) -> Result<i64, ApiError> {
    let value = value
        .filter(|v| !v.is_null())
        .ok_or_else(|| ApiError::BadRequest(format!("{name} is required")))?;
    let parsed = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| ApiError::BadRequest(format!("{name} must be a valid number")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_require_vin() {
        assert!(require_vin(None).is_err());
        assert!(require_vin(Some("   ")).is_err());
        assert_eq!(require_vin(Some(" 1HGBH41JXMN109186 ")).unwrap(), "1HGBH41JXMN109186");
    }

    #[test]
    fn test_integer_field_accepts_numbers_and_numeric_strings() {
        assert_eq!(integer_field(Some(&json!(88000)), "Odometer").unwrap(), 88000);
        assert_eq!(integer_field(Some(&json!("88000")), "Odometer").unwrap(), 88000);
        assert_eq!(integer_field(Some(&json!(88000.7)), "Odometer").unwrap(), 88000);
    }

    #[test]
    fn test_integer_field_rejections() {
        assert!(integer_field(None, "Odometer").is_err());
        assert!(integer_field(Some(&json!(null)), "Odometer").is_err());
        assert!(integer_field(Some(&json!("not a number")), "Odometer").is_err());
        assert!(integer_field(Some(&json!([1, 2])), "Odometer").is_err());
    }
}

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::server::error::validation::ValidationError;

/// Parses a path identifier into an `i32` id.
///
/// # Arguments
/// - `value` - The raw path segment
/// - `resource` - Name used in the error message, e.g. `"article"`
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed id
/// - `Err(ValidationError::InvalidId)` - The segment is not a 32-bit integer
pub fn parse_id(value: &str, resource: &'static str) -> Result<i32, ValidationError> {
    value
        .parse::<i32>()
        .map_err(|_| ValidationError::InvalidId { resource })
}

/// Decodes a JSON object request body, falling back to `T::default()`.
///
/// Empty bodies, malformed JSON, non-object JSON and type mismatches all yield the
/// default value, leaving the validation pipeline to report which required field is
/// missing.
pub fn parse_body_or_default<T: DeserializeOwned + Default>(body: &[u8]) -> T {
    match serde_json::from_slice::<Value>(body) {
        Ok(value @ Value::Object(_)) => serde_json::from_value(value).unwrap_or_default(),
        _ => T::default(),
    }
}

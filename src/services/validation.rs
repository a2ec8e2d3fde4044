use serde_json::Value;

use crate::error::{ApiError, FieldErrors};

/// Read `fields` from a JSON object as non-empty strings.
///
/// Collects every failing field before returning, so one response names
/// all of them. A body that is not an object fails on every field.
pub fn required_strings<const N: usize>(
    body: &Value,
    fields: [&str; N],
    message: &str,
) -> Result<[String; N], ApiError> {
    let mut errors = FieldErrors::new();
    let values = fields.map(|field| match body.get(field) {
        None | Some(Value::Null) => {
            errors.insert(field.to_string(), "This field is required".to_string());
            String::new()
        }
        Some(Value::String(s)) if s.trim().is_empty() => {
            errors.insert(field.to_string(), "This field must not be empty".to_string());
            String::new()
        }
        Some(Value::String(s)) => s.clone(),
        Some(_) => {
            errors.insert(field.to_string(), "This field must be a string".to_string());
            String::new()
        }
    });

    if errors.is_empty() {
        Ok(values)
    } else {
        Err(ApiError::validation_error(message, errors))
    }
}

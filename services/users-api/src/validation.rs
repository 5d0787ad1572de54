//! Input validation utilities
//!
//! Request bodies are bound field by field so that every structural problem
//! is reported at once, keyed by the lowerCamelCase field name.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Field-level validation errors, accumulated across a whole request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` against `field`
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for `field`, if any
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// `Ok(value)` when nothing was recorded, the errors otherwise
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

/// Parse a request body into a JSON object.
///
/// Returns `None` for an empty body, malformed JSON, `null` or any other
/// non-object document.
pub fn parse_document(body: &[u8]) -> Option<Map<String, Value>> {
    match serde_json::from_slice::<Value>(body).ok()? {
        Value::Object(document) => Some(document),
        _ => None,
    }
}

/// Bind one field of `document`.
///
/// Absent and `null` fields yield `None`. A value of the wrong type yields
/// `None` and records an error against the field.
pub fn bind_field<T: DeserializeOwned>(
    document: &Map<String, Value>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<T> {
    let value = document.get(field).filter(|value| !value.is_null())?;

    match serde_json::from_value::<T>(value.clone()) {
        Ok(bound) => Some(bound),
        Err(_) => {
            let shown = match value {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            errors.add(field, format!("The value '{shown}' is not valid for {field}."));
            None
        }
    }
}

/// Required-field rule: absent, empty and whitespace-only text is rejected
pub fn require_text(
    value: Option<String>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Some(text),
        _ => {
            errors.add(field, format!("The {field} field is required."));
            None
        }
    }
}

/// Validate login: letters and digits only
pub fn validate_login(login: &str) -> Result<(), String> {
    static LOGIN_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = LOGIN_REGEX
        .get_or_init(|| Regex::new(r"^[\p{L}\p{Nd}]*$").expect("Failed to compile login regex"));

    if regex.is_match(login) {
        Ok(())
    } else {
        Err("Login must contain only letters and digits.".to_string())
    }
}

//! Applying JSON Patch documents to the update model
//!
//! A patch never sees the stored record. It is applied to a blank,
//! default-valued `UpdateUserDto`, so every field the patch leaves alone
//! goes back to its default when the result is persisted.

use json_patch::Patch;
use serde_json::Value;

use crate::models::dto::UpdateUserDto;
use crate::validation::ValidationErrors;

/// Field key under which patch application failures are reported
pub const PATCH_FIELD: &str = "patch";

/// Parse a request body as an RFC 6902 operation list.
///
/// Path segments naming a field in any letter case are rewritten to the
/// field's wire name, so `/FirstName` targets `firstName`.
pub fn parse_patch(body: &[u8]) -> Option<Patch> {
    let mut operations: Value = serde_json::from_slice(body).ok()?;

    for operation in operations.as_array_mut()? {
        let Some(operation) = operation.as_object_mut() else {
            continue;
        };
        for key in ["path", "from"] {
            if let Some(Value::String(pointer)) = operation.get_mut(key) {
                *pointer = canonical_pointer(pointer);
            }
        }
    }

    serde_json::from_value(operations).ok()
}

fn canonical_pointer(pointer: &str) -> String {
    pointer
        .split('/')
        .map(|segment| {
            UpdateUserDto::FIELDS
                .iter()
                .find(|field| field.eq_ignore_ascii_case(segment))
                .copied()
                .unwrap_or(segment)
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Apply `patch` to a blank update model.
///
/// Failing operations and badly typed values are recorded in the returned
/// errors; the model holds whatever could be bound.
pub fn apply_to_blank(patch: &Patch) -> (UpdateUserDto, ValidationErrors) {
    let mut errors = ValidationErrors::new();
    let mut document = serde_json::to_value(UpdateUserDto::default()).unwrap_or(Value::Null);

    if let Err(e) = json_patch::patch(&mut document, &patch.0) {
        errors.add(PATCH_FIELD, e.to_string());
    }

    let draft = match &document {
        Value::Object(fields) => {
            for unknown in fields
                .keys()
                .filter(|key| !UpdateUserDto::FIELDS.contains(&key.as_str()))
            {
                errors.add(
                    PATCH_FIELD,
                    format!("The target location '/{unknown}' was not found."),
                );
            }
            UpdateUserDto::bind(fields, &mut errors)
        }
        _ => {
            errors.add(PATCH_FIELD, "The patch must leave the user an object.");
            UpdateUserDto::default()
        }
    };

    (draft, errors)
}

use serde_json::json;

use crate::store::StoreError;

pub fn ok(id: &str, result: serde_json::Value) -> serde_json::Value {
    json!({
        "id": id,
        "ok": true,
        "result": result
    })
}

pub fn err(
    id: &str,
    code: &str,
    message: impl Into<String>,
    details: Option<serde_json::Value>,
) -> serde_json::Value {
    let mut error = json!({
        "code": code,
        "message": message.into(),
    });
    if let Some(d) = details {
        error["details"] = d;
    }
    json!({
        "id": id,
        "ok": false,
        "error": error,
    })
}

/// Form-level failure naming the offending field so the UI can surface it
/// inline at that input.
pub fn validation(id: &str, field: &str) -> serde_json::Value {
    err(
        id,
        "validation_error",
        format!("missing or invalid {field}"),
        Some(json!({ "field": field })),
    )
}

pub fn store_err(id: &str, error: StoreError) -> serde_json::Value {
    match error {
        StoreError::Validation { field } => validation(id, field),
        StoreError::NotFound { .. } => err(id, "not_found", error.to_string(), None),
    }
}

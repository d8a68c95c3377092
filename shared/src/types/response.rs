//! API response envelope
//!
//! Every endpoint answers with the same JSON shape: `{"ok": true, ...}` on
//! success, `{"ok": false, "error": "..."}` for single-message failures, or
//! `{"ok": false, "errors": {field: [messages]}}` for field-level validation
//! failures. Payload fields are flattened next to `ok` so clients read
//! `body.listings`, `body.user`, etc. directly.

use serde::Serialize;
use std::collections::HashMap;

/// Field-level validation errors, keyed by field name
pub type FieldErrors = HashMap<String, Vec<String>>;

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful
    pub ok: bool,

    /// Response payload, flattened into the envelope (present on success)
    #[serde(flatten)]
    pub data: Option<T>,

    /// Error message (present on single-message failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Field-level errors (present on validation failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,

    /// Optional human-readable status message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response with a payload
    pub fn success(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
            errors: None,
            message: None,
        }
    }

    /// Attach a human-readable message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Empty payload for responses that carry only `ok` (and maybe a message)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Empty {}

impl ApiResponse<Empty> {
    /// Create a successful response with no payload
    pub fn ok() -> Self {
        Self::success(Empty {})
    }

    /// Create a single-message error response
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error.into()),
            errors: None,
            message: None,
        }
    }

    /// Create a field-level validation error response
    pub fn field_errors(errors: FieldErrors) -> Self {
        Self {
            ok: false,
            data: None,
            error: None,
            errors: Some(errors),
            message: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Payload {
        count: u32,
    }

    #[test]
    fn test_success_flattens_payload() {
        let body = serde_json::to_value(ApiResponse::success(Payload { count: 3 })).unwrap();
        assert_eq!(body["ok"], true);
        assert_eq!(body["count"], 3);
        assert!(body.get("error").is_none());
    }

    #[test]
    fn test_error_shape() {
        let body = serde_json::to_value(ApiResponse::error("Listing not found.")).unwrap();
        assert_eq!(body["ok"], false);
        assert_eq!(body["error"], "Listing not found.");
    }

    #[test]
    fn test_field_errors_shape() {
        let mut errors = FieldErrors::new();
        errors.insert(
            "num_floors".to_string(),
            vec!["num_floors is required for ghorofa.".to_string()],
        );
        let body = serde_json::to_value(ApiResponse::field_errors(errors)).unwrap();
        assert_eq!(body["ok"], false);
        assert_eq!(
            body["errors"]["num_floors"][0],
            "num_floors is required for ghorofa."
        );
    }

    #[test]
    fn test_message_attached() {
        let body =
            serde_json::to_value(ApiResponse::ok().with_message("Logged out successfully."))
                .unwrap();
        assert_eq!(body["ok"], true);
        assert_eq!(body["message"], "Logged out successfully.");
    }
}

//! Error mapping for service error responses
//!
//! The service answers a failed call with a non-2xx status and a JSON body
//! naming the fault in `__type` (optionally namespaced, `ns#Code`, or
//! suffixed, `Code:detail`) with the text in `message` or `Message`. The
//! same code may also arrive in the `x-amzn-ErrorType` header.

use serde_json::Value;

use super::{ErrorContext, PersonalizeError};

/// Strip the namespace and any suffix from a raw error type
pub fn parse_error_type(raw: &str) -> &str {
    let code = raw.rsplit('#').next().unwrap_or(raw);
    code.split(':').next().unwrap_or(code).trim()
}

/// Map a decoded error body to a PersonalizeError
pub fn map_service_error(
    status: u16,
    header_type: Option<&str>,
    json: &Value,
    context: &mut ErrorContext,
) -> PersonalizeError {
    let code = json
        .get("__type")
        .and_then(|t| t.as_str())
        .or(header_type)
        .map(parse_error_type)
        .filter(|code| !code.is_empty());

    let message = json
        .get("message")
        .or_else(|| json.get("Message"))
        .and_then(|m| m.as_str())
        .unwrap_or("No error message provided")
        .to_string();

    context.status_code = Some(status);

    let Some(code) = code else {
        return PersonalizeError::service(classify_status(status), message);
    };
    context.error_code = Some(code.to_string());

    match code {
        "InvalidInputException" => PersonalizeError::InvalidInput(message),
        "InvalidNextTokenException" => PersonalizeError::InvalidNextToken(message),
        "LimitExceededException" => PersonalizeError::LimitExceeded(message),
        "ResourceAlreadyExistsException" => PersonalizeError::ResourceAlreadyExists(message),
        "ResourceInUseException" => PersonalizeError::ResourceInUse(message),
        "ResourceNotFoundException" => PersonalizeError::ResourceNotFound(message),
        other => PersonalizeError::service(other, message),
    }
}

/// Map a raw error response to a PersonalizeError
pub fn map_error_response(
    status: u16,
    header_type: Option<&str>,
    body: &str,
    context: &mut ErrorContext,
) -> PersonalizeError {
    // Try to parse as JSON first
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        if json.is_object() {
            return map_service_error(status, header_type, &json, context);
        }
    }

    // Fallback to status-based mapping
    let message = if body.trim().is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("HTTP {}: {}", status, crate::util::truncate_string(body, 100))
    };

    map_service_error(status, header_type, &serde_json::json!({ "message": message }), context)
}

/// Helper function to classify HTTP errors by category
pub fn classify_status(status: u16) -> &'static str {
    match status {
        400 => "validation",
        401 => "authentication",
        403 => "authorization",
        404 => "not_found",
        408 => "timeout",
        429 => "throttling",
        500..=599 => "server",
        _ => "unknown",
    }
}

/// Determine if an HTTP status code indicates a retryable error
pub fn is_retryable_status(status: u16) -> bool {
    matches!(status, 408 | 429 | 500 | 502 | 503 | 504)
}

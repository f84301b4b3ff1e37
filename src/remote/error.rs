//! Mapping of backend responses onto `PressError`.
//!
//! A 404 on an id-addressed request becomes `NotFound`; every other non-2xx
//! status becomes `Server` carrying the backend's message when it sent one.

use reqwest::{Response, StatusCode};

use crate::error::{PressError, Result};

/// Longest response body echoed back in an error message
const MAX_MESSAGE_LEN: usize = 200;

/// Pass successful responses through; convert failures into errors.
pub async fn check_status(response: Response, resource: &str, id: Option<&str>) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::NOT_FOUND
        && let Some(id) = id
    {
        return Err(PressError::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        });
    }

    // The body is best-effort context; a failed read still yields the status
    let body = response.text().await.unwrap_or_default();
    Err(server_error(status, &body))
}

/// Build a `Server` error from a status and raw response body
pub fn server_error(status: StatusCode, body: &str) -> PressError {
    PressError::Server {
        status: status.as_u16(),
        message: extract_message(status, body),
    }
}

fn extract_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(msg) = value.get(key).and_then(|v| v.as_str())
                && !msg.trim().is_empty()
            {
                return msg.trim().to_string();
            }
        }
    }

    let text = body.trim();
    if text.is_empty() {
        return status.canonical_reason().unwrap_or("request failed").to_string();
    }

    if text.chars().count() > MAX_MESSAGE_LEN {
        let truncated: String = text.chars().take(MAX_MESSAGE_LEN).collect();
        format!("{truncated}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_json_body() {
        let err = server_error(
            StatusCode::BAD_REQUEST,
            r#"{"message":"Title is required"}"#,
        );
        assert_eq!(
            err.to_string(),
            "server error (HTTP 400): Title is required"
        );
    }

    #[test]
    fn test_message_from_error_key() {
        let err = server_error(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error":"boom"}"#);
        assert!(err.to_string().ends_with("boom"));
    }

    #[test]
    fn test_message_falls_back_to_reason() {
        let err = server_error(StatusCode::SERVICE_UNAVAILABLE, "   ");
        assert_eq!(
            err.to_string(),
            "server error (HTTP 503): Service Unavailable"
        );
    }

    #[test]
    fn test_message_truncates_long_bodies() {
        let body = "x".repeat(500);
        let PressError::Server { message, .. } = server_error(StatusCode::BAD_GATEWAY, &body)
        else {
            panic!("expected server error");
        };
        assert_eq!(message.len(), MAX_MESSAGE_LEN + 3);
        assert!(message.ends_with("..."));
    }
}

use actix_web::http::{Method, StatusCode};
use actix_web::{HttpRequest, HttpResponse};
use models::constants::{default_response_message, is_success_code};
use serde_json::{Map, Value};
use services::utils::is_truthy;

/// Methods allowed when a handler does not name its own.
pub const DEFAULT_METHODS: &[Method] = &[Method::GET];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ResponseFormat {
    Json,
    Text,
}

impl ResponseFormat {
    fn from_type(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str) {
            Some("text") => ResponseFormat::Text,
            _ => ResponseFormat::Json,
        }
    }
}

/// Build the standard `{ hasError, message, status, ...other }` response.
///
/// `hasError` is forced on for codes outside the success set. Keys in `other`
/// are written last and win over the generated ones; `other.type` set to
/// `"text"` sends the body as `text/plain`.
pub fn respond(code: u16, message: Option<&str>, other: Option<Map<String, Value>>) -> HttpResponse {
    let other = other.unwrap_or_default();
    let has_error = other.get("hasError").is_some_and(is_truthy) || !is_success_code(code);
    let format = ResponseFormat::from_type(other.get("type"));

    let mut body = Map::new();
    body.insert("hasError".to_string(), Value::Bool(has_error));
    if let Some(message) = message
        .filter(|m| !m.is_empty())
        .or_else(|| default_response_message(code))
    {
        body.insert("message".to_string(), Value::from(message));
    }
    body.insert("status".to_string(), Value::from(code));
    body.extend(other);

    let status = StatusCode::from_u16(code).unwrap_or_else(|e| {
        tracing::error!(code, error = %e, "invalid status code, sending 500");
        StatusCode::INTERNAL_SERVER_ERROR
    });

    let body = Value::Object(body);
    match format {
        ResponseFormat::Json => HttpResponse::build(status).json(body),
        ResponseFormat::Text => HttpResponse::build(status)
            .content_type(mime::TEXT_PLAIN_UTF_8)
            .body(body.to_string()),
    }
}

/// Block requests whose method is not in `methods`.
///
/// Returns the 405 response to send when blocked, `None` when the request may
/// proceed.
pub fn allowed_methods(req: &HttpRequest, methods: &[Method]) -> Option<HttpResponse> {
    if methods.contains(req.method()) {
        return None;
    }

    tracing::debug!(method = %req.method(), path = req.path(), "method not allowed");
    Some(respond(405, Some(format!("{} is not allowed.", req.method()).as_str()), None))
}

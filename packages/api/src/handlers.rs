use actix_web::http::header::AUTHORIZATION;
use actix_web::http::Method;
use actix_web::{web, HttpRequest, HttpResponse};
use models::FieldDescriptor;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use services::authentication::{jwt_sign, SignOptions, Token, VerifyOptions};
use services::validation::{get_error, validate_form};

use crate::config::ApiConfig;
use crate::response::{allowed_methods, respond, DEFAULT_METHODS};

const POST_ONLY: &[Method] = &[Method::POST];

#[derive(Deserialize)]
struct ValidateRequest {
    fields: Vec<FieldDescriptor>,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::route().to(health))
        .route("/validate", web::route().to(validate))
        .route("/tokens", web::route().to(sign_token))
        .route("/tokens/verify", web::route().to(verify_token));
}

fn other(value: Value) -> Option<Map<String, Value>> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

async fn health(req: HttpRequest) -> HttpResponse {
    if let Some(blocked) = allowed_methods(&req, DEFAULT_METHODS) {
        return blocked;
    }
    respond(200, Some("OK"), None)
}

async fn validate(req: HttpRequest, body: web::Bytes) -> HttpResponse {
    if let Some(blocked) = allowed_methods(&req, POST_ONLY) {
        return blocked;
    }

    let request: ValidateRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::debug!(error = %e, "rejecting validate body");
            return respond(400, Some("Request body must be { \"fields\": [...] }"), None);
        }
    };

    let errors = validate_form(&request.fields);
    let first = get_error(&errors);
    let extra = other(json!({ "errors": errors }));

    if first.has_error {
        respond(422, Some(first.message.as_str()), extra)
    } else {
        respond(200, Some("All fields are valid"), extra)
    }
}

async fn sign_token(req: HttpRequest, body: web::Bytes, config: web::Data<ApiConfig>) -> HttpResponse {
    if let Some(blocked) = allowed_methods(&req, POST_ONLY) {
        return blocked;
    }

    let payload: Value = match serde_json::from_slice(&body) {
        Ok(payload @ Value::Object(_)) => payload,
        _ => return respond(400, Some("Token payload must be a JSON object"), None),
    };

    let options = SignOptions {
        expires_in: config.token_ttl_seconds,
        ..Default::default()
    };
    let token = jwt_sign(&payload, config.jwt_secret.as_deref(), &options);
    if token.is_empty() {
        return respond(500, Some("Could not sign token"), None);
    }

    tracing::info!("token issued");
    respond(201, None, other(json!({ "token": token })))
}

async fn verify_token(req: HttpRequest, config: web::Data<ApiConfig>) -> HttpResponse {
    if let Some(blocked) = allowed_methods(&req, POST_ONLY) {
        return blocked;
    }

    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(Token::from_bearer);
    let Some(token) = token else {
        return respond(401, Some("Token not found"), None);
    };

    match token.verify(config.jwt_secret.as_deref(), &VerifyOptions::default()) {
        Some(claims) => respond(200, None, other(json!({ "claims": claims }))),
        None => respond(401, Some("Invalid or expired token"), None),
    }
}

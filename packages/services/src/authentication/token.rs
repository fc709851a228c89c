use std::fmt;

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::options::{SignOptions, VerifyOptions};
use crate::config::jwt_secret;

#[derive(Debug)]
pub struct TokenError {
    pub message: String,
}

impl TokenError {
    fn new(msg: &str) -> Self {
        TokenError { message: msg.to_string() }
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        TokenError { message: e.to_string() }
    }
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

/// A raw compact token, as found in an `Authorization` header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token(pub String);

impl Token {
    pub fn new(token: String) -> Self {
        Token(token)
    }

    /// Parse `Bearer <token>`.
    pub fn from_bearer(header: &str) -> Option<Self> {
        let mut parts = header.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => {
                Some(Token(token.to_string()))
            }
            _ => None,
        }
    }

    pub fn verify(&self, secret: Option<&str>, options: &VerifyOptions) -> Option<Value> {
        jwt_verify(&self.0, secret, options)
    }
}

fn build_claims(payload: &Value, options: &SignOptions) -> Result<Map<String, Value>, TokenError> {
    let Value::Object(payload) = payload else {
        return Err(TokenError::new("payload must be a JSON object"));
    };

    let mut claims = payload.clone();
    let now = Utc::now().timestamp();

    if !options.no_timestamp {
        claims.insert("iat".to_string(), Value::from(now));
    }
    if let Some(expires_in) = options.expires_in {
        claims.insert("exp".to_string(), Value::from(now + expires_in));
    }
    if let Some(not_before) = options.not_before {
        claims.insert("nbf".to_string(), Value::from(now + not_before));
    }
    if let Some(issuer) = &options.issuer {
        claims.insert("iss".to_string(), Value::from(issuer.as_str()));
    }
    if let Some(subject) = &options.subject {
        claims.insert("sub".to_string(), Value::from(subject.as_str()));
    }
    if let Some(audience) = &options.audience {
        claims.insert("aud".to_string(), Value::from(audience.as_str()));
    }
    if let Some(jwt_id) = &options.jwt_id {
        let jti = if jwt_id.is_empty() { Uuid::new_v4().to_string() } else { jwt_id.clone() };
        claims.insert("jti".to_string(), Value::from(jti));
    }

    Ok(claims)
}

pub fn try_sign(payload: &Value, secret: &str, options: &SignOptions) -> Result<String, TokenError> {
    let claims = build_claims(payload, options)?;
    let token = encode(
        &Header::new(options.algorithm),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )?;
    Ok(token)
}

pub fn try_verify(token: &str, secret: &str, options: &VerifyOptions) -> Result<Value, TokenError> {
    let first = options
        .algorithms
        .first()
        .copied()
        .ok_or_else(|| TokenError::new("no algorithms allowed"))?;

    let mut validation = Validation::new(first);
    validation.algorithms = options.algorithms.clone();
    validation.leeway = options.clock_tolerance;
    validation.validate_exp = !options.ignore_expiration;
    validation.validate_nbf = true;
    validation.required_spec_claims.clear();
    validation.sub = options.subject.clone();

    match &options.audience {
        Some(audience) => validation.set_audience(&[audience]),
        None => validation.validate_aud = false,
    }
    if let Some(issuer) = &options.issuer {
        validation.set_issuer(&[issuer]);
    }

    let data = decode::<Value>(token, &DecodingKey::from_secret(secret.as_ref()), &validation)?;
    Ok(data.claims)
}

/// Sign a JSON object payload under `secret`, or `JWT_SECRET` when unset.
/// Returns an empty string on failure.
pub fn jwt_sign(payload: &Value, secret: Option<&str>, options: &SignOptions) -> String {
    let result = jwt_secret(secret)
        .ok_or_else(|| TokenError::new("no JWT secret configured"))
        .and_then(|secret| try_sign(payload, &secret, options));
    match result {
        Ok(token) => token,
        Err(e) => {
            tracing::error!(error = %e, "JWT sign failed");
            String::new()
        }
    }
}

/// Verify a token and return its claims, or `None` when it is invalid,
/// tampered with or expired.
pub fn jwt_verify(token: &str, secret: Option<&str>, options: &VerifyOptions) -> Option<Value> {
    let result = jwt_secret(secret)
        .ok_or_else(|| TokenError::new("no JWT secret configured"))
        .and_then(|secret| try_verify(token, &secret, options));
    match result {
        Ok(claims) => Some(claims),
        Err(e) => {
            tracing::warn!(error = %e, "JWT verify failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SECRET: &str = "jwt-test-secret";

    #[test]
    fn test_sign_and_verify() {
        let token = jwt_sign(&json!({ "userId": 42 }), Some(SECRET), &SignOptions::default());
        assert_eq!(token.split('.').count(), 3);

        let claims = jwt_verify(&token, Some(SECRET), &VerifyOptions::default()).unwrap();
        assert_eq!(claims["userId"], json!(42));
        assert!(claims["iat"].is_i64());
    }

    #[test]
    fn test_registered_claims_from_options() {
        let options = SignOptions {
            expires_in: Some(3600),
            issuer: Some("webtools".to_string()),
            audience: Some("web".to_string()),
            subject: Some("AccessToken".to_string()),
            jwt_id: Some(String::new()),
            no_timestamp: true,
            ..Default::default()
        };
        let token = jwt_sign(&json!({}), Some(SECRET), &options);

        let verify = VerifyOptions {
            issuer: Some("webtools".to_string()),
            audience: Some("web".to_string()),
            ..Default::default()
        };
        let claims = jwt_verify(&token, Some(SECRET), &verify).unwrap();
        assert_eq!(claims["iss"], json!("webtools"));
        assert_eq!(claims["sub"], json!("AccessToken"));
        assert!(claims.get("iat").is_none());
        assert!(Uuid::parse_str(claims["jti"].as_str().unwrap()).is_ok());

        let wrong_audience = VerifyOptions {
            audience: Some("mobile".to_string()),
            ..Default::default()
        };
        assert!(jwt_verify(&token, Some(SECRET), &wrong_audience).is_none());
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = jwt_sign(&json!({ "a": 1 }), Some(SECRET), &SignOptions::default());
        assert!(jwt_verify(&token, Some("wrong_secret"), &VerifyOptions::default()).is_none());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let options = SignOptions {
            expires_in: Some(-3600),
            ..Default::default()
        };
        let token = jwt_sign(&json!({ "a": 1 }), Some(SECRET), &options);
        assert!(jwt_verify(&token, Some(SECRET), &VerifyOptions::default()).is_none());

        let ignoring = VerifyOptions {
            ignore_expiration: true,
            ..Default::default()
        };
        assert!(jwt_verify(&token, Some(SECRET), &ignoring).is_some());
    }

    #[test]
    fn test_malformed_and_tampered_tokens() {
        assert!(jwt_verify("not.a.valid.jwt.token", Some(SECRET), &VerifyOptions::default()).is_none());

        let token = jwt_sign(&json!({ "role": "user" }), Some(SECRET), &SignOptions::default());
        let mut parts: Vec<&str> = token.split('.').collect();
        let forged = jwt_sign(&json!({ "role": "admin" }), Some("other"), &SignOptions::default());
        let forged_payload = forged.split('.').nth(1).unwrap().to_string();
        parts[1] = &forged_payload;
        assert!(jwt_verify(&parts.join("."), Some(SECRET), &VerifyOptions::default()).is_none());
    }

    #[test]
    fn test_non_object_payload_fails_to_sign() {
        assert_eq!(jwt_sign(&json!("plain"), Some(SECRET), &SignOptions::default()), "");
    }

    #[test]
    fn test_bearer_parsing() {
        assert_eq!(Token::from_bearer("Bearer abc.def.ghi"), Some(Token::new("abc.def.ghi".to_string())));
        assert_eq!(Token::from_bearer("bearer abc"), Some(Token::new("abc".to_string())));
        assert_eq!(Token::from_bearer("Basic abc"), None);
        assert_eq!(Token::from_bearer("Bearer"), None);
    }
}

/// Settings the HTTP handlers need, shared through `web::Data`.
#[derive(Clone, Debug, Default)]
pub struct ApiConfig {
    /// Signing secret; when unset the token handlers fall back to `JWT_SECRET`.
    pub jwt_secret: Option<String>,
    /// Lifetime of issued tokens in seconds.
    pub token_ttl_seconds: Option<i64>,
}

use jsonwebtoken::Algorithm;

/// Claims added to a payload when it is signed.
#[derive(Clone, Debug)]
pub struct SignOptions {
    pub algorithm: Algorithm,
    /// Lifetime in seconds, written as `exp`.
    pub expires_in: Option<i64>,
    /// Delay in seconds before the token is valid, written as `nbf`.
    pub not_before: Option<i64>,
    pub issuer: Option<String>,
    pub subject: Option<String>,
    pub audience: Option<String>,
    /// Written as `jti`; an empty id is replaced by a random UUID.
    pub jwt_id: Option<String>,
    /// Leave out `iat`.
    pub no_timestamp: bool,
}

impl Default for SignOptions {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::HS256,
            expires_in: None,
            not_before: None,
            issuer: None,
            subject: None,
            audience: None,
            jwt_id: None,
            no_timestamp: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct VerifyOptions {
    pub algorithms: Vec<Algorithm>,
    pub issuer: Option<String>,
    pub audience: Option<String>,
    pub subject: Option<String>,
    /// Leeway in seconds for `exp` and `nbf`.
    pub clock_tolerance: u64,
    pub ignore_expiration: bool,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            algorithms: vec![Algorithm::HS256],
            issuer: None,
            audience: None,
            subject: None,
            clock_tolerance: 0,
            ignore_expiration: false,
        }
    }
}

use std::env;

pub const SECRET_KEY_VAR: &str = "SECRET_KEY";
pub const JWT_SECRET_VAR: &str = "JWT_SECRET";

/// Use `explicit` when given and non-empty, otherwise the environment variable.
pub fn resolve_secret(explicit: Option<&str>, var: &str) -> Option<String> {
    explicit
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .or_else(|| env::var(var).ok().filter(|s| !s.is_empty()))
}

pub fn secret_key(explicit: Option<&str>) -> Option<String> {
    resolve_secret(explicit, SECRET_KEY_VAR)
}

pub fn jwt_secret(explicit: Option<&str>) -> Option<String> {
    resolve_secret(explicit, JWT_SECRET_VAR)
}

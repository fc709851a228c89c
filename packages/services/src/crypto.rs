//! Symmetric encryption and one-way hashing of strings.
//!
//! Encrypted tokens are base64 of `salt || nonce || ciphertext`. The AES-256-GCM
//! key is derived from the secret and the per-message salt with Argon2, so the
//! same secret never reuses a key.

use std::fmt;

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Nonce};
use argon2::Argon2;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use sha2::{Digest, Sha256};

use crate::config::secret_key;

const SALT_LEN: usize = 16;
const NONCE_LEN: usize = 12;
const KEY_LEN: usize = 32;

#[derive(Debug)]
pub enum CryptoError {
    MissingSecret,
    KeyDerivation(String),
    Cipher,
    MalformedToken(String),
    InvalidUtf8,
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoError::MissingSecret => f.write_str("no secret key configured"),
            CryptoError::KeyDerivation(e) => write!(f, "key derivation failed: {e}"),
            CryptoError::Cipher => f.write_str("cipher operation failed"),
            CryptoError::MalformedToken(e) => write!(f, "malformed token: {e}"),
            CryptoError::InvalidUtf8 => f.write_str("decrypted value is not valid UTF-8"),
        }
    }
}

fn derive_cipher(secret: &str, salt: &[u8]) -> Result<Aes256Gcm, CryptoError> {
    let mut key = [0u8; KEY_LEN];
    Argon2::default()
        .hash_password_into(secret.as_bytes(), salt, &mut key)
        .map_err(|e| CryptoError::KeyDerivation(e.to_string()))?;
    Aes256Gcm::new_from_slice(&key).map_err(|e| CryptoError::KeyDerivation(e.to_string()))
}

pub fn try_encrypt(value: &str, secret: &str) -> Result<String, CryptoError> {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);

    let cipher = derive_cipher(secret, &salt)?;
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
    let ciphertext = cipher
        .encrypt(&nonce, value.as_bytes())
        .map_err(|_| CryptoError::Cipher)?;

    let mut token = Vec::with_capacity(SALT_LEN + NONCE_LEN + ciphertext.len());
    token.extend_from_slice(&salt);
    token.extend_from_slice(nonce.as_slice());
    token.extend_from_slice(&ciphertext);
    Ok(BASE64.encode(token))
}

pub fn try_decrypt(hash: &str, secret: &str) -> Result<String, CryptoError> {
    let bytes = BASE64
        .decode(hash)
        .map_err(|e| CryptoError::MalformedToken(e.to_string()))?;
    if bytes.len() < SALT_LEN + NONCE_LEN {
        return Err(CryptoError::MalformedToken("too short".to_string()));
    }

    let (salt, rest) = bytes.split_at(SALT_LEN);
    let (nonce, ciphertext) = rest.split_at(NONCE_LEN);

    let cipher = derive_cipher(secret, salt)?;
    let plaintext = cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| CryptoError::Cipher)?;
    String::from_utf8(plaintext).map_err(|_| CryptoError::InvalidUtf8)
}

/// Encrypt `value` under `secret`, or under `SECRET_KEY` when no secret is given.
///
/// Returns `None` for empty input or on any failure.
pub fn encrypt(value: &str, secret: Option<&str>) -> Option<String> {
    if value.is_empty() {
        return None;
    }

    let result = secret_key(secret)
        .ok_or(CryptoError::MissingSecret)
        .and_then(|secret| try_encrypt(value, &secret));
    match result {
        Ok(token) => Some(token),
        Err(e) => {
            tracing::error!(error = %e, "encryption failed");
            None
        }
    }
}

/// Reverse [`encrypt`]. An empty input and a failed decryption both give `None`.
pub fn decrypt(hash: &str, secret: Option<&str>) -> Option<String> {
    if hash.is_empty() {
        return None;
    }

    let result = secret_key(secret)
        .ok_or(CryptoError::MissingSecret)
        .and_then(|secret| try_decrypt(hash, &secret));
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::error!(error = %e, "decryption failed");
            None
        }
    }
}

/// Lowercase hex SHA-256 digest of `value`; `None` for empty input.
pub fn encrypt_sha256(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    Some(format!("{:x}", hasher.finalize()))
}

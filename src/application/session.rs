//! Signed bearer tokens for dashboard and storefront sessions.
//!
//! A token is `<payload>.<signature>`: the payload is base64url JSON claims
//! and the signature is base64url HMAC-SHA256 over the encoded payload.
//! Tokens carry their own expiry; nothing is stored server-side.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::error::{AuthError, Error, Result};

type HmacSha256 = Hmac<Sha256>;

const MAX_TOKEN_LEN: usize = 2048;

/// Who a session belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Principal {
    Admin,
    Customer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub kind: Principal,
    /// Account id.
    pub sub: String,
    pub email: String,
    /// Unix seconds.
    pub exp: i64,
}

/// Issues and verifies session tokens with a shared secret.
#[derive(Clone)]
pub struct SessionSigner {
    secret: Vec<u8>,
    ttl: Duration,
}

impl std::fmt::Debug for SessionSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionSigner")
            .field("secret", &"<redacted>")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl SessionSigner {
    pub fn new(secret: impl Into<Vec<u8>>, ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            ttl,
        }
    }

    fn mac(&self, payload: &str) -> Result<Vec<u8>> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| Error::Parse(format!("session key: {e}")))?;
        mac.update(payload.as_bytes());
        Ok(mac.finalize().into_bytes().to_vec())
    }

    /// Issue a token for an account, valid from `now` for the configured TTL.
    ///
    /// # Errors
    /// Returns an error if the claims cannot be encoded.
    pub fn issue(
        &self,
        kind: Principal,
        subject: &str,
        email: &str,
        now: DateTime<Utc>,
    ) -> Result<String> {
        let claims = SessionClaims {
            kind,
            sub: subject.to_string(),
            email: email.to_string(),
            exp: (now + self.ttl).timestamp(),
        };
        let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims)?);
        let signature = URL_SAFE_NO_PAD.encode(self.mac(&payload)?);
        Ok(format!("{payload}.{signature}"))
    }

    /// Verify a token's signature, principal kind and expiry.
    ///
    /// # Errors
    /// Returns [`AuthError::Unauthorized`] for malformed, forged or
    /// wrong-kind tokens and [`AuthError::SessionExpired`] for stale ones.
    pub fn verify(
        &self,
        token: &str,
        expected: Principal,
        now: DateTime<Utc>,
    ) -> Result<SessionClaims> {
        if token.len() > MAX_TOKEN_LEN {
            return Err(AuthError::Unauthorized.into());
        }
        let (payload, signature) = token.split_once('.').ok_or(AuthError::Unauthorized)?;
        let given = URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|_| AuthError::Unauthorized)?;
        let wanted = self.mac(payload)?;
        if !bool::from(wanted.ct_eq(&given)) {
            return Err(AuthError::Unauthorized.into());
        }

        let bytes = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| AuthError::Unauthorized)?;
        let claims: SessionClaims =
            serde_json::from_slice(&bytes).map_err(|_| AuthError::Unauthorized)?;

        if claims.kind != expected {
            return Err(AuthError::Unauthorized.into());
        }
        if claims.exp <= now.timestamp() {
            return Err(AuthError::SessionExpired.into());
        }
        Ok(claims)
    }
}

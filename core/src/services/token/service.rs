//! Stateless JWT access tokens.
//!
//! Tokens carry the user id, phone and role; nothing is stored server-side.
//! There is deliberately no refresh or revocation machinery — a token is
//! valid until its expiry.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::user::{User, UserRole};
use crate::errors::TokenError;
use crate::services::context::Caller;

/// JWT claims carried by an access token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: user id
    pub sub: String,

    /// Phone number of the user
    pub phone: String,

    /// Role at issuance time
    pub role: String,

    /// Issued-at, seconds since epoch
    pub iat: i64,

    /// Expiry, seconds since epoch
    pub exp: i64,

    /// Token id
    pub jti: String,
}

impl Claims {
    /// Parse the subject back into a user id
    pub fn user_id(&self) -> Result<Uuid, TokenError> {
        Uuid::parse_str(&self.sub).map_err(|_| TokenError::Invalid)
    }

    /// Build the caller context these claims represent
    pub fn caller(&self) -> Result<Caller, TokenError> {
        let role = UserRole::parse(&self.role).ok_or(TokenError::Invalid)?;
        Ok(Caller::new(self.user_id()?, role))
    }
}

/// An issued access token and its lifetime
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_in: i64,
}

/// Signs and verifies access tokens (HS256)
pub struct TokenService {
    secret: String,
    ttl_seconds: i64,
}

impl TokenService {
    pub fn new(secret: impl Into<String>, ttl_seconds: i64) -> Self {
        Self {
            secret: secret.into(),
            ttl_seconds,
        }
    }

    /// Issue an access token for a user
    pub fn issue(&self, user: &User) -> Result<IssuedToken, TokenError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user.id.to_string(),
            phone: user.phone.clone(),
            role: user.role.as_str().to_string(),
            iat: now,
            exp: now + self.ttl_seconds,
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|_| TokenError::GenerationFailed)?;

        Ok(IssuedToken {
            token,
            expires_in: self.ttl_seconds,
        })
    }

    /// Verify a token and return its claims
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|err| match err.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid,
        })
    }
}

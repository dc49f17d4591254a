//! Signing and verification of the API's bearer tokens.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{
    model::auth::TokenUserDto,
    server::{config::Config, error::AppError},
};

/// Token payload.
///
/// `permissions` is a snapshot taken at signing time; authorization always re-reads
/// the permissions from the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub user: TokenUserDto,
    pub permissions: Vec<String>,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
    pub aud: String,
    pub sub: String,
}

/// Keys and validation settings for the HMAC-signed JWTs.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    algorithm: Algorithm,
    issuer: String,
    audience: String,
    expires_in: i64,
}

impl JwtKeys {
    pub fn new(
        secret: &str,
        algorithm: Algorithm,
        issuer: &str,
        audience: &str,
        expires_in: i64,
    ) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            algorithm,
            issuer: issuer.to_string(),
            audience: audience.to_string(),
            expires_in,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.jwt_secret,
            config.jwt_algorithm,
            &config.jwt_issuer,
            &config.jwt_audience,
            config.jwt_expires_in,
        )
    }

    /// Issuer, also used as the OpenID realm for Steam logins.
    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Signs a token for `user` carrying the given permissions.
    ///
    /// # Arguments
    /// - `user` - User payload embedded in the token
    /// - `permissions` - Permission strings at signing time
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded token
    /// - `Err(AppError::JwtErr)` - Signing failed
    pub fn issue(&self, user: TokenUserDto, permissions: Vec<String>) -> Result<String, AppError> {
        let iat = Utc::now().timestamp();
        let claims = Claims {
            sub: user.uid.to_string(),
            user,
            permissions,
            iat,
            exp: iat + self.expires_in,
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
        };

        Ok(encode(&Header::new(self.algorithm), &claims, &self.encoding)?)
    }

    /// Verifies signature, expiry, issuer and audience.
    ///
    /// Any failure yields `None`; callers treat that as an absent token.
    pub fn decode(&self, token: &str) -> Option<Claims> {
        let mut validation = Validation::new(self.algorithm);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);

        match decode::<Claims>(token, &self.decoding, &validation) {
            Ok(data) => Some(data.claims),
            Err(e) => {
                tracing::debug!("Rejected token: {}", e);
                None
            }
        }
    }
}

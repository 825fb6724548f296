//! HMAC-signed session tokens
//!
//! Format: `base64url(claims_json).base64url(hmac_sha256(secret, first_part))`.
//! The claims carry the user and, once onboarded, the business they act for.

use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::Utc;
use hmac::{Hmac, Mac};
use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use uuid::Uuid;

use crate::domain::entities::{BusinessId, UserId};
use crate::domain::ports::AuthTokenIssuer;
use crate::error::TokenError;

type HmacSha256 = Hmac<Sha256>;

/// Claims carried by a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User id
    pub sub: Uuid,
    pub business_id: Option<Uuid>,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expires at (unix seconds)
    pub exp: i64,
    /// Random nonce, so two tokens issued in the same second differ
    pub jti: String,
}

impl TokenClaims {
    pub fn user_id(&self) -> UserId {
        UserId(self.sub)
    }

    pub fn business_id(&self) -> Option<BusinessId> {
        self.business_id.map(BusinessId)
    }
}

pub struct HmacTokenIssuer {
    secret: Vec<u8>,
    ttl_secs: i64,
}

impl HmacTokenIssuer {
    pub fn new(secret: impl Into<Vec<u8>>, ttl_secs: i64) -> Self {
        Self {
            secret: secret.into(),
            ttl_secs,
        }
    }

    fn mac(&self) -> Result<HmacSha256, TokenError> {
        HmacSha256::new_from_slice(&self.secret).map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Sign an arbitrary set of claims
    pub fn sign(&self, claims: &TokenClaims) -> Result<String, TokenError> {
        let payload =
            serde_json::to_vec(claims).map_err(|e| TokenError::Signing(e.to_string()))?;
        let encoded = URL_SAFE_NO_PAD.encode(payload);

        let mut mac = self.mac()?;
        mac.update(encoded.as_bytes());
        let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        Ok(format!("{}.{}", encoded, signature))
    }

    fn claims_for(&self, user_id: &UserId, business_id: Option<&BusinessId>) -> TokenClaims {
        let iat = Utc::now().timestamp();
        TokenClaims {
            sub: user_id.0,
            business_id: business_id.map(|b| b.0),
            iat,
            exp: iat + self.ttl_secs,
            jti: generate_jti(),
        }
    }

    /// Verify signature and expiry, returning the claims
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let (encoded, signature) = token.split_once('.').ok_or(TokenError::Malformed)?;
        let signature = URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|_| TokenError::Malformed)?;

        let mut mac = self.mac()?;
        mac.update(encoded.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| TokenError::InvalidSignature)?;

        let payload = URL_SAFE_NO_PAD
            .decode(encoded)
            .map_err(|_| TokenError::Malformed)?;
        let claims: TokenClaims =
            serde_json::from_slice(&payload).map_err(|_| TokenError::Malformed)?;

        if claims.exp <= Utc::now().timestamp() {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

fn generate_jti() -> String {
    let mut rng = rand::thread_rng();
    let bytes: Vec<u8> = (0..16).map(|_| rng.gen()).collect();
    hex::encode(bytes)
}

#[async_trait]
impl AuthTokenIssuer for HmacTokenIssuer {
    async fn issue(
        &self,
        user_id: &UserId,
        business_id: &BusinessId,
    ) -> Result<String, TokenError> {
        self.sign(&self.claims_for(user_id, Some(business_id)))
    }

    async fn issue_for_user(&self, user_id: &UserId) -> Result<String, TokenError> {
        self.sign(&self.claims_for(user_id, None))
    }
}

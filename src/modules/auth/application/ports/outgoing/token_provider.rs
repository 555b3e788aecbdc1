use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const ACCESS_TOKEN_TYPE: &str = "access";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token was issued by {0:?}")]
    UntrustedIssuer(Option<String>),

    #[error("Expected an access token, got {0:?}")]
    WrongTokenType(String),

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// Claims carried by bearer tokens minted by the account service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    pub token_type: String,
    pub is_verified: bool,
    /// Grants template catalog administration.
    #[serde(default)]
    pub is_admin: bool,
}

pub trait TokenProvider: Send + Sync {
    /// Only used by tests and tooling; production tokens come from the
    /// account service.
    fn generate_access_token(
        &self,
        user_id: Uuid,
        is_verified: bool,
        is_admin: bool,
    ) -> Result<String, TokenError>;

    /// Succeeds only for unexpired access tokens from a trusted issuer.
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider, ACCESS_TOKEN_TYPE,
};

use super::jwt_config::JwtConfig;

/// Clock skew tolerated on `exp` and `nbf`, in seconds.
const LEEWAY_SECS: u64 = 30;

/// HS256 verifier sharing its secret with the account service.
#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let secret = config.secret_key.as_bytes();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = LEEWAY_SECS;
        validation.validate_nbf = true;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            config,
        }
    }

    /// Tokens without `iss` are accepted; a present issuer must match ours.
    fn check_claims(&self, claims: &TokenClaims) -> Result<(), TokenError> {
        if let Some(iss) = claims.iss.as_deref() {
            if iss != self.config.issuer {
                warn!(issuer = %iss, "Rejected token from untrusted issuer");
                return Err(TokenError::UntrustedIssuer(Some(iss.to_string())));
            }
        }

        if claims.token_type != ACCESS_TOKEN_TYPE {
            debug!(token_type = %claims.token_type, "Rejected non-access token");
            return Err(TokenError::WrongTokenType(claims.token_type.clone()));
        }

        Ok(())
    }
}

fn classify(kind: &ErrorKind) -> TokenError {
    match kind {
        ErrorKind::ExpiredSignature => TokenError::TokenExpired,
        ErrorKind::ImmatureSignature => TokenError::TokenNotYetValid,
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        _ => TokenError::MalformedToken,
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(
        &self,
        user_id: Uuid,
        is_verified: bool,
        is_admin: bool,
    ) -> Result<String, TokenError> {
        let now = Utc::now();

        let claims = TokenClaims {
            sub: user_id,
            exp: (now + Duration::seconds(self.config.access_token_expiry)).timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            iss: Some(self.config.issuer.clone()),
            token_type: ACCESS_TOKEN_TYPE.to_string(),
            is_verified,
            is_admin,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let claims = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                let err = classify(e.kind());
                if err == TokenError::InvalidSignature {
                    warn!("Token with invalid signature presented");
                } else {
                    debug!(error = %err, "Token verification failed");
                }
                err
            })?
            .claims;

        self.check_claims(&claims)?;
        Ok(claims)
    }
}

use std::fmt;

/// HS256 needs at least 32 bytes of key material.
pub const MIN_SECRET_LEN: usize = 32;
pub const MAX_ACCESS_EXPIRY_SECS: i64 = 86_400;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JwtConfigError {
    #[error("JWT_SECRET must be set")]
    MissingSecret,

    #[error("JWT_SECRET must be at least {} characters long", MIN_SECRET_LEN)]
    WeakSecret,

    #[error("JWT_ACCESS_EXPIRY must be between 1 and {} seconds, got {:?}", MAX_ACCESS_EXPIRY_SECS, .0)]
    InvalidExpiry(String),
}

#[derive(Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    /// Lifetime of tokens minted by `generate_access_token`, in seconds.
    pub access_token_expiry: i64,
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret_key", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("access_token_expiry", &self.access_token_expiry)
            .finish()
    }
}

impl JwtConfig {
    pub const DEFAULT_ISSUER: &'static str = "PortfolioHub";
    pub const DEFAULT_ACCESS_EXPIRY_SECS: i64 = 1800;

    pub fn from_env() -> Result<Self, JwtConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, JwtConfigError> {
        let secret_key = lookup("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or(JwtConfigError::MissingSecret)?;
        if secret_key.len() < MIN_SECRET_LEN {
            return Err(JwtConfigError::WeakSecret);
        }

        let access_token_expiry = match lookup("JWT_ACCESS_EXPIRY") {
            None => Self::DEFAULT_ACCESS_EXPIRY_SECS,
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|secs| (1..=MAX_ACCESS_EXPIRY_SECS).contains(secs))
                .ok_or(JwtConfigError::InvalidExpiry(raw))?,
        };

        let issuer = lookup("JWT_ISSUER")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_ISSUER.to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }
}

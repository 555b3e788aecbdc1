use std::sync::Arc;

use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        issuer: "portfolio-hub-test".to_string(),
        secret_key: "test_secret_key_for_testing_only".to_string(),
        access_token_expiry: 3600,
    }
}

/// Same shape the extractors look up in app data.
pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(JwtTokenService::new(test_jwt_config()))
}

pub fn auth_header(user_id: Uuid, verified: bool, admin: bool) -> (&'static str, String) {
    let token = JwtTokenService::new(test_jwt_config())
        .generate_access_token(user_id, verified, admin)
        .expect("test token");

    ("Authorization", format!("Bearer {token}"))
}

use actix_web::{
    dev::Payload, http::header, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse,
};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::{auth::application::helpers::ResolveUserIdError, shared::api::ApiResponse};
use crate::auth::application::ports::outgoing::token_provider::{TokenError, TokenProvider};
use crate::AppState;

/// Any holder of a valid access token, verified or not.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub is_verified: bool,
    pub is_admin: bool,
}

impl AuthenticatedUser {
    pub fn owner(&self) -> UserId {
        UserId::from(self.user_id)
    }
}

fn reject(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

/// Bearer credentials; the scheme name is case-insensitive.
fn bearer_token(req: &HttpRequest) -> Option<&str> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

fn token_rejection(err: &TokenError) -> HttpResponse {
    match err {
        TokenError::TokenExpired => ApiResponse::unauthorized("TOKEN_EXPIRED", "Token has expired"),
        TokenError::WrongTokenType(_) => {
            ApiResponse::unauthorized("INVALID_TOKEN_TYPE", "Invalid token type")
        }
        _ => ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token"),
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, HttpResponse> {
    let Some(provider) = req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>() else {
        tracing::error!("TokenProvider is not registered as app data");
        return Err(ApiResponse::internal_error());
    };

    let token = bearer_token(req).ok_or_else(|| {
        ApiResponse::unauthorized(
            "MISSING_AUTH_HEADER",
            "Missing or invalid authorization header",
        )
    })?;

    let claims = provider.verify_token(token).map_err(|e| token_rejection(&e))?;

    Ok(AuthenticatedUser {
        user_id: claims.sub,
        is_verified: claims.is_verified,
        is_admin: claims.is_admin,
    })
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req).map_err(reject))
    }
}

/// Access token holder whose email is verified.
#[derive(Debug, Clone)]
pub struct VerifiedUser {
    pub user_id: Uuid,
}

impl VerifiedUser {
    pub fn owner(&self) -> UserId {
        UserId::from(self.user_id)
    }
}

impl FromRequest for VerifiedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = authenticate(req).and_then(|user| {
            if user.is_verified {
                Ok(VerifiedUser {
                    user_id: user.user_id,
                })
            } else {
                Err(ApiResponse::forbidden(
                    "EMAIL_NOT_VERIFIED",
                    "Email verification required",
                ))
            }
        });
        ready(result.map_err(reject))
    }
}

/// Catalog administrator (verified account carrying the admin claim)
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user_id: Uuid,
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = authenticate(req).and_then(|user| match user {
            AuthenticatedUser {
                user_id,
                is_verified: true,
                is_admin: true,
            } => Ok(AdminUser { user_id }),
            _ => Err(ApiResponse::forbidden(
                "FORBIDDEN",
                "Administrator access required",
            )),
        });
        ready(result.map_err(reject))
    }
}

pub async fn resolve_owner_id_or_response(
    data: &web::Data<AppState>,
    username: &str,
) -> Result<UserId, HttpResponse> {
    match data.user_identity_resolver.by_username(username).await {
        Ok(owner_id) => Ok(owner_id),

        Err(ResolveUserIdError::NotFound) => {
            Err(ApiResponse::not_found("USER_NOT_FOUND", "User not found"))
        }

        Err(ResolveUserIdError::RepositoryError(msg)) => {
            tracing::error!(username = %username, error = %msg, "Could not resolve username");
            Err(ApiResponse::internal_error())
        }
    }
}

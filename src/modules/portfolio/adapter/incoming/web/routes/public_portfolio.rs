use actix_web::{get, post, web, HttpRequest, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use super::errors::portfolio_not_found;
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::resolve_owner_id_or_response;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    ContactForm, GetPublicPortfolioError, PublicPortfolioRequest, RecordShareError,
    SubmitContactError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

pub const PASSWORD_HEADER: &str = "X-Portfolio-Password";

/// Address plus agent; the tracker only ever stores a digest of it.
fn visitor_fingerprint(req: &HttpRequest) -> Option<String> {
    let info = req.connection_info();
    let address = info.realip_remote_addr()?;
    let agent = req
        .headers()
        .get("User-Agent")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    Some(format!("{address}|{agent}"))
}

fn password_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(PASSWORD_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

//
// ──────────────────────────────────────────────────────────
// View
// ──────────────────────────────────────────────────────────
//

/// View a published portfolio
///
/// Protected portfolios need the password in the `X-Portfolio-Password` header.
#[utoipa::path(
    get,
    path = "/api/public/portfolios/{username}/{slug}",
    tag = "public",
    params(
        ("username" = String, Path, description = "Owner username"),
        ("slug" = String, Path, description = "Portfolio slug"),
        ("X-Portfolio-Password" = Option<String>, Header, description = "View password"),
    ),
    responses(
        (status = 200, description = "Portfolio, template and view-mode render"),
        (status = 401, description = "Password required", body = ErrorResponse),
        (status = 403, description = "Wrong password", body = ErrorResponse),
        (status = 404, description = "User or portfolio not found", body = ErrorResponse),
    )
)]
#[get("/api/public/portfolios/{username}/{slug}")]
pub async fn get_public_portfolio_handler(
    req: HttpRequest,
    path: web::Path<(String, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (username, slug) = path.into_inner();

    let owner = match resolve_owner_id_or_response(&data, &username).await {
        Ok(owner) => owner,
        Err(resp) => return resp,
    };

    let request = PublicPortfolioRequest {
        owner,
        slug: slug.clone(),
        password: password_header(&req),
        visitor: visitor_fingerprint(&req),
    };

    match data.portfolio.get_public.execute(request).await {
        Ok(view) => ApiResponse::success(view),

        Err(GetPublicPortfolioError::NotFound) => portfolio_not_found(),

        Err(GetPublicPortfolioError::PasswordRequired) => ApiResponse::unauthorized(
            "PASSWORD_REQUIRED",
            "This portfolio is password protected",
        ),

        Err(GetPublicPortfolioError::InvalidPassword) => {
            ApiResponse::forbidden("INVALID_PASSWORD", "Invalid portfolio password")
        }

        Err(GetPublicPortfolioError::QueryError(e)) => {
            error!("Query error loading public portfolio {}/{}: {}", username, slug, e);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Share
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, ToSchema)]
pub struct Acknowledged {
    #[schema(example = true)]
    pub recorded: bool,
}

/// Record a share of a published portfolio
#[utoipa::path(
    post,
    path = "/api/public/portfolios/{username}/{slug}/share",
    tag = "public",
    params(
        ("username" = String, Path, description = "Owner username"),
        ("slug" = String, Path, description = "Portfolio slug"),
    ),
    responses(
        (status = 200, description = "Share recorded", body = Acknowledged),
        (status = 404, description = "User or portfolio not found", body = ErrorResponse),
    )
)]
#[post("/api/public/portfolios/{username}/{slug}/share")]
pub async fn record_share_handler(
    path: web::Path<(String, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (username, slug) = path.into_inner();

    let owner = match resolve_owner_id_or_response(&data, &username).await {
        Ok(owner) => owner,
        Err(resp) => return resp,
    };

    match data.portfolio.record_share.execute(owner, &slug).await {
        Ok(()) => ApiResponse::success(Acknowledged { recorded: true }),
        Err(RecordShareError::NotFound) => portfolio_not_found(),
        Err(RecordShareError::RepositoryError(e)) => {
            error!("Repository error recording share of {}/{}: {}", username, slug, e);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Contact
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactRequest {
    #[schema(example = "Grace Hopper")]
    pub name: String,
    #[schema(example = "grace@example.com")]
    pub email: String,
    #[schema(example = "Loved the compiler project!")]
    pub message: String,
}

impl From<ContactRequest> for ContactForm {
    fn from(req: ContactRequest) -> Self {
        ContactForm {
            name: req.name,
            email: req.email,
            message: req.message,
        }
    }
}

/// Send a message to the portfolio owner
#[utoipa::path(
    post,
    path = "/api/public/portfolios/{username}/{slug}/contact",
    tag = "public",
    params(
        ("username" = String, Path, description = "Owner username"),
        ("slug" = String, Path, description = "Portfolio slug"),
    ),
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Message accepted", body = Acknowledged),
        (status = 400, description = "Invalid contact form", body = ErrorResponse),
        (status = 404, description = "User or portfolio not found", body = ErrorResponse),
    )
)]
#[post("/api/public/portfolios/{username}/{slug}/contact")]
pub async fn submit_contact_handler(
    path: web::Path<(String, String)>,
    req: web::Json<ContactRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (username, slug) = path.into_inner();

    let owner = match resolve_owner_id_or_response(&data, &username).await {
        Ok(owner) => owner,
        Err(resp) => return resp,
    };

    match data
        .portfolio
        .submit_contact
        .execute(owner, &slug, req.into_inner().into())
        .await
    {
        Ok(()) => {
            info!(owner = %owner, slug = %slug, "Contact form accepted");
            ApiResponse::success(Acknowledged { recorded: true })
        }
        Err(SubmitContactError::NotFound) => portfolio_not_found(),
        Err(SubmitContactError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }
        Err(SubmitContactError::RepositoryError(e)) => {
            error!("Repository error recording contact for {}/{}: {}", username, slug, e);
            ApiResponse::internal_error()
        }
    }
}

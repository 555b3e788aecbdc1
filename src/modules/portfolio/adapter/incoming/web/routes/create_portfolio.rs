use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use super::errors::slug_exhausted;
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioError, CreatePortfolioInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreatePortfolioRequest {
    pub template_id: Uuid,

    #[schema(example = "My Work")]
    pub title: String,

    /// Derived from the title when omitted.
    #[serde(default)]
    #[schema(example = "my-work")]
    pub slug: Option<String>,

    /// Seed sections from the account profile instead of template defaults.
    #[serde(default)]
    pub auto_fill: bool,
}

impl From<CreatePortfolioRequest> for CreatePortfolioInput {
    fn from(req: CreatePortfolioRequest) -> Self {
        CreatePortfolioInput {
            template_id: req.template_id,
            title: req.title,
            slug: req.slug,
            auto_fill: req.auto_fill,
        }
    }
}

/// Create a portfolio from a template
#[utoipa::path(
    post,
    path = "/api/portfolios",
    tag = "portfolios",
    request_body = CreatePortfolioRequest,
    responses(
        (status = 201, description = "Portfolio created"),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 403, description = "Premium template requires a pro plan", body = ErrorResponse),
        (status = 404, description = "Template or user not found", body = ErrorResponse),
        (status = 409, description = "No free slug", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/portfolios")]
pub async fn create_portfolio_handler(
    user: VerifiedUser,
    req: web::Json<CreatePortfolioRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let owner = user.owner();

    match data.portfolio.create.execute(owner, req.into_inner().into()).await {
        Ok(portfolio) => {
            info!(
                owner = %owner,
                portfolio_id = %portfolio.id,
                slug = %portfolio.slug,
                "Portfolio created"
            );
            ApiResponse::created(portfolio)
        }

        Err(CreatePortfolioError::TemplateNotFound) => {
            ApiResponse::not_found("TEMPLATE_NOT_FOUND", "Template not found")
        }

        Err(CreatePortfolioError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(CreatePortfolioError::PremiumTemplate) => ApiResponse::forbidden(
            "PREMIUM_TEMPLATE",
            "This template requires a pro plan",
        ),

        Err(CreatePortfolioError::EmptyTitle) => {
            ApiResponse::bad_request("VALIDATION_ERROR", "Title must not be empty")
        }

        Err(CreatePortfolioError::SlugExhausted) => slug_exhausted(),

        Err(CreatePortfolioError::RepositoryError(e)) => {
            error!("Repository error creating portfolio for {}: {}", owner, e);
            ApiResponse::internal_error()
        }
    }
}

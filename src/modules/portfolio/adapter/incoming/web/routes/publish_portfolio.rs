use actix_web::{post, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use super::errors::{forbidden, portfolio_not_found};
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    PublishPortfolioError, UnpublishPortfolioError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Publish a portfolio
///
/// On the free plan every other published portfolio of the owner is
/// unpublished first.
#[utoipa::path(
    post,
    path = "/api/portfolios/{portfolio_id}/publish",
    tag = "portfolios",
    params(("portfolio_id" = Uuid, Path, description = "Portfolio id")),
    responses(
        (status = 200, description = "Portfolio published"),
        (status = 403, description = "Not the owner, or premium template on free plan", body = ErrorResponse),
        (status = 404, description = "Portfolio not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/portfolios/{portfolio_id}/publish")]
pub async fn publish_portfolio_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let portfolio_id = path.into_inner();

    match data.portfolio.publish.execute(user.owner(), portfolio_id).await {
        Ok(portfolio) => {
            info!(owner = %user.user_id, portfolio_id = %portfolio_id, "Portfolio published");
            ApiResponse::success(portfolio)
        }

        Err(PublishPortfolioError::NotFound) => portfolio_not_found(),
        Err(PublishPortfolioError::Forbidden) => forbidden(),

        Err(PublishPortfolioError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(PublishPortfolioError::PremiumTemplate) => ApiResponse::forbidden(
            "PREMIUM_TEMPLATE",
            "This template requires a pro plan",
        ),

        Err(PublishPortfolioError::RepositoryError(e)) => {
            error!("Repository error publishing portfolio {}: {}", portfolio_id, e);
            ApiResponse::internal_error()
        }
    }
}

/// Unpublish a portfolio
#[utoipa::path(
    post,
    path = "/api/portfolios/{portfolio_id}/unpublish",
    tag = "portfolios",
    params(("portfolio_id" = Uuid, Path, description = "Portfolio id")),
    responses(
        (status = 200, description = "Portfolio unpublished"),
        (status = 403, description = "Portfolio belongs to another user", body = ErrorResponse),
        (status = 404, description = "Portfolio not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/portfolios/{portfolio_id}/unpublish")]
pub async fn unpublish_portfolio_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let portfolio_id = path.into_inner();

    match data.portfolio.unpublish.execute(user.owner(), portfolio_id).await {
        Ok(portfolio) => {
            info!(owner = %user.user_id, portfolio_id = %portfolio_id, "Portfolio unpublished");
            ApiResponse::success(portfolio)
        }
        Err(UnpublishPortfolioError::NotFound) => portfolio_not_found(),
        Err(UnpublishPortfolioError::Forbidden) => forbidden(),
        Err(UnpublishPortfolioError::RepositoryError(e)) => {
            error!("Repository error unpublishing portfolio {}: {}", portfolio_id, e);
            ApiResponse::internal_error()
        }
    }
}

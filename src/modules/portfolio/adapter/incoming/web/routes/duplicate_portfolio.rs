use actix_web::{post, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use super::errors::{forbidden, portfolio_not_found, slug_exhausted};
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::modules::portfolio::application::ports::incoming::use_cases::DuplicatePortfolioError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Duplicate a portfolio as an unpublished draft
#[utoipa::path(
    post,
    path = "/api/portfolios/{portfolio_id}/duplicate",
    tag = "portfolios",
    params(("portfolio_id" = Uuid, Path, description = "Portfolio id")),
    responses(
        (status = 201, description = "Copy created"),
        (status = 403, description = "Portfolio belongs to another user", body = ErrorResponse),
        (status = 404, description = "Portfolio not found", body = ErrorResponse),
        (status = 409, description = "No free slug", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/portfolios/{portfolio_id}/duplicate")]
pub async fn duplicate_portfolio_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let portfolio_id = path.into_inner();

    match data.portfolio.duplicate.execute(user.owner(), portfolio_id).await {
        Ok(copy) => {
            info!(source_id = %portfolio_id, copy_id = %copy.id, slug = %copy.slug, "Portfolio duplicated");
            ApiResponse::created(copy)
        }
        Err(DuplicatePortfolioError::NotFound) => portfolio_not_found(),
        Err(DuplicatePortfolioError::Forbidden) => forbidden(),
        Err(DuplicatePortfolioError::SlugExhausted) => slug_exhausted(),
        Err(DuplicatePortfolioError::RepositoryError(e)) => {
            error!("Repository error duplicating portfolio {}: {}", portfolio_id, e);
            ApiResponse::internal_error()
        }
    }
}

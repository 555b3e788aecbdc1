use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use super::errors::{forbidden, portfolio_not_found};
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::modules::portfolio::application::ports::incoming::use_cases::DeletePortfolioError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a portfolio
#[utoipa::path(
    delete,
    path = "/api/portfolios/{portfolio_id}",
    tag = "portfolios",
    params(("portfolio_id" = Uuid, Path, description = "Portfolio id")),
    responses(
        (status = 204, description = "Portfolio deleted"),
        (status = 403, description = "Portfolio belongs to another user", body = ErrorResponse),
        (status = 404, description = "Portfolio not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/portfolios/{portfolio_id}")]
pub async fn delete_portfolio_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let portfolio_id = path.into_inner();

    match data.portfolio.delete.execute(user.owner(), portfolio_id).await {
        Ok(()) => {
            info!(owner = %user.user_id, portfolio_id = %portfolio_id, "Portfolio deleted");
            ApiResponse::no_content()
        }
        Err(DeletePortfolioError::NotFound) => portfolio_not_found(),
        Err(DeletePortfolioError::Forbidden) => forbidden(),
        Err(DeletePortfolioError::RepositoryError(e)) => {
            error!("Repository error deleting portfolio {}: {}", portfolio_id, e);
            ApiResponse::internal_error()
        }
    }
}

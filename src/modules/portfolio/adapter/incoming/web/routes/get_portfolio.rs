use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use super::errors::{forbidden, portfolio_not_found};
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::portfolio::application::ports::incoming::use_cases::GetPortfolioError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get one of the caller's portfolios
#[utoipa::path(
    get,
    path = "/api/portfolios/{portfolio_id}",
    tag = "portfolios",
    params(("portfolio_id" = Uuid, Path, description = "Portfolio id")),
    responses(
        (status = 200, description = "Portfolio found"),
        (status = 403, description = "Portfolio belongs to another user", body = ErrorResponse),
        (status = 404, description = "Portfolio not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/portfolios/{portfolio_id}")]
pub async fn get_portfolio_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let portfolio_id = path.into_inner();

    match data.portfolio.get.execute(user.owner(), portfolio_id).await {
        Ok(portfolio) => ApiResponse::success(portfolio),
        Err(GetPortfolioError::NotFound) => portfolio_not_found(),
        Err(GetPortfolioError::Forbidden) => forbidden(),
        Err(GetPortfolioError::QueryError(e)) => {
            error!("Query error fetching portfolio {}: {}", portfolio_id, e);
            ApiResponse::internal_error()
        }
    }
}

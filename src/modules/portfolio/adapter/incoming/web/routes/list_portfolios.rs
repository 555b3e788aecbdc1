use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::portfolio::application::ports::incoming::use_cases::ListPortfoliosError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List the caller's portfolios, most recently updated first
#[utoipa::path(
    get,
    path = "/api/portfolios",
    tag = "portfolios",
    responses(
        (status = 200, description = "Portfolios of the caller"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/portfolios")]
pub async fn list_portfolios_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.portfolio.list.execute(user.owner()).await {
        Ok(portfolios) => ApiResponse::success(portfolios),

        Err(ListPortfoliosError::QueryError(e)) => {
            error!("Query error listing portfolios for {}: {}", user.user_id, e);
            ApiResponse::internal_error()
        }
    }
}

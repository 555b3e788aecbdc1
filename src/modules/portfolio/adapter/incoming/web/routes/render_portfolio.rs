use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;
use uuid::Uuid;

use super::errors::{forbidden, portfolio_not_found};
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::portfolio::application::domain::render::RenderMode;
use crate::modules::portfolio::application::ports::incoming::use_cases::RenderPortfolioError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct RenderQuery {
    /// `edit` adds placeholders and editable fields; defaults to `view`.
    #[serde(default)]
    #[param(value_type = Option<String>, example = "edit")]
    pub mode: RenderMode,
}

/// Render plan of the caller's portfolio
#[utoipa::path(
    get,
    path = "/api/portfolios/{portfolio_id}/render",
    tag = "portfolios",
    params(
        ("portfolio_id" = Uuid, Path, description = "Portfolio id"),
        RenderQuery,
    ),
    responses(
        (status = 200, description = "Ordered sections with content and styling"),
        (status = 403, description = "Portfolio belongs to another user", body = ErrorResponse),
        (status = 404, description = "Portfolio not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/portfolios/{portfolio_id}/render")]
pub async fn render_portfolio_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    query: web::Query<RenderQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let portfolio_id = path.into_inner();

    match data
        .portfolio
        .render
        .execute(user.owner(), portfolio_id, query.mode)
        .await
    {
        Ok(rendered) => ApiResponse::success(rendered),
        Err(RenderPortfolioError::NotFound) => portfolio_not_found(),
        Err(RenderPortfolioError::Forbidden) => forbidden(),
        Err(RenderPortfolioError::QueryError(e)) => {
            error!("Query error rendering portfolio {}: {}", portfolio_id, e);
            ApiResponse::internal_error()
        }
    }
}

use actix_web::{patch, web, Responder};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use super::errors::{customization_error, forbidden, portfolio_not_found, slug_exhausted};
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::modules::portfolio::application::domain::customization::{
    CustomizationPatch, SeoSettingsPatch, SettingsPatch,
};
use crate::modules::portfolio::application::ports::incoming::use_cases::CustomizePortfolioError;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Every field is optional. `custom_data` keys are section types; list
/// sections are replaced wholesale, object sections are merged.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CustomizePortfolioRequest {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub slug: Option<String>,

    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub seo_settings: Option<SeoSettingsPatch>,

    /// `password` is plain text; an empty string removes protection.
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub settings: Option<SettingsPatch>,

    #[serde(default)]
    pub active_sections: Option<Vec<String>>,

    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub custom_data: Option<Map<String, Value>>,

    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub custom_styling: Option<Map<String, Value>>,
}

impl From<CustomizePortfolioRequest> for CustomizationPatch {
    fn from(req: CustomizePortfolioRequest) -> Self {
        CustomizationPatch {
            title: req.title,
            slug: req.slug,
            seo_settings: req.seo_settings,
            settings: req.settings,
            active_sections: req.active_sections,
            custom_data: req.custom_data,
            custom_styling: req.custom_styling,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Customize a portfolio
///
/// All or nothing: when any part of the patch is invalid nothing is stored.
#[utoipa::path(
    patch,
    path = "/api/portfolios/{portfolio_id}",
    tag = "portfolios",
    params(("portfolio_id" = Uuid, Path, description = "Portfolio id")),
    request_body = CustomizePortfolioRequest,
    responses(
        (status = 200, description = "Portfolio updated"),
        (status = 400, description = "Invalid sections or content", body = ErrorResponse),
        (status = 403, description = "Portfolio belongs to another user", body = ErrorResponse),
        (status = 404, description = "Portfolio or template not found", body = ErrorResponse),
        (status = 409, description = "No free slug", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[patch("/api/portfolios/{portfolio_id}")]
pub async fn customize_portfolio_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    req: web::Json<CustomizePortfolioRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let portfolio_id = path.into_inner();

    match data
        .portfolio
        .customize
        .execute(user.owner(), portfolio_id, req.into_inner().into())
        .await
    {
        Ok(portfolio) => {
            info!(portfolio_id = %portfolio_id, slug = %portfolio.slug, "Portfolio customized");
            ApiResponse::success(portfolio)
        }

        Err(CustomizePortfolioError::NotFound) => portfolio_not_found(),
        Err(CustomizePortfolioError::Forbidden) => forbidden(),

        Err(CustomizePortfolioError::TemplateNotFound) => {
            ApiResponse::not_found("TEMPLATE_NOT_FOUND", "Template not found")
        }

        Err(CustomizePortfolioError::Invalid(e)) => customization_error(&e),
        Err(CustomizePortfolioError::SlugExhausted) => slug_exhausted(),

        Err(CustomizePortfolioError::RepositoryError(e)) => {
            error!("Repository error customizing portfolio {}: {}", portfolio_id, e);
            ApiResponse::internal_error()
        }
    }
}

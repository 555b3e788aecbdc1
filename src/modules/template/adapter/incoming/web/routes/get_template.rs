use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::template::application::ports::incoming::use_cases::GetTemplateError;
use crate::shared::api::ApiResponse;
use crate::AppState;

async fn fetch(data: &web::Data<AppState>, template_id: Uuid, include_inactive: bool) -> HttpResponse {
    match data.template.get.execute(template_id, include_inactive).await {
        Ok(template) => ApiResponse::success(template),

        Err(GetTemplateError::NotFound) => {
            ApiResponse::not_found("TEMPLATE_NOT_FOUND", "Template not found")
        }

        Err(GetTemplateError::QueryError(e)) => {
            error!("Query error fetching template {}: {}", template_id, e);
            ApiResponse::internal_error()
        }
    }
}

/// Get an active template
#[utoipa::path(
    get,
    path = "/api/templates/{template_id}",
    tag = "templates",
    params(("template_id" = Uuid, Path, description = "Template id")),
    responses(
        (status = 200, description = "Template found"),
        (status = 404, description = "Template not found or inactive", body = ErrorResponse),
    )
)]
#[get("/api/templates/{template_id}")]
pub async fn get_template_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    fetch(&data, path.into_inner(), false).await
}

/// Get any template, including inactive ones (admin only)
#[get("/api/admin/templates/{template_id}")]
pub async fn admin_get_template_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    fetch(&data, path.into_inner(), true).await
}

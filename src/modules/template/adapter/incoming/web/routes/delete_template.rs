use actix_web::{delete, web, Responder};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::template::application::ports::incoming::use_cases::DeleteTemplateError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a template
///
/// Rejected with 409 while any portfolio still uses the template.
#[utoipa::path(
    delete,
    path = "/api/admin/templates/{template_id}",
    tag = "templates",
    params(("template_id" = Uuid, Path, description = "Template id")),
    responses(
        (status = 204, description = "Template deleted"),
        (status = 404, description = "Template not found", body = ErrorResponse),
        (status = 409, description = "Template in use", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/admin/templates/{template_id}")]
pub async fn delete_template_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let template_id = path.into_inner();

    match data.template.delete.execute(template_id).await {
        Ok(()) => {
            info!(admin_id = %admin.user_id, template_id = %template_id, "Template deleted");
            ApiResponse::no_content()
        }

        Err(DeleteTemplateError::NotFound) => {
            ApiResponse::not_found("TEMPLATE_NOT_FOUND", "Template not found")
        }

        Err(DeleteTemplateError::InUse) => {
            warn!(template_id = %template_id, "Refusing to delete template in use");
            ApiResponse::conflict(
                "TEMPLATE_IN_USE",
                "Template is used by existing portfolios",
            )
        }

        Err(DeleteTemplateError::RepositoryError(e)) => {
            error!("Repository error deleting template {}: {}", template_id, e);
            ApiResponse::internal_error()
        }
    }
}

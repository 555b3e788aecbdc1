use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::modules::media::application::ports::incoming::use_cases::DeleteImageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete one of the caller's images from the CDN
#[utoipa::path(
    delete,
    path = "/api/media/images/{public_id}",
    tag = "media",
    params(("public_id" = String, Path, description = "CDN public id, slashes included")),
    responses(
        (status = 204, description = "Image deleted"),
        (status = 403, description = "Image belongs to another user", body = ErrorResponse),
        (status = 404, description = "Image not found", body = ErrorResponse),
        (status = 500, description = "CDN failure", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/images/{public_id:.*}")]
pub async fn delete_image_handler(
    user: VerifiedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let public_id = path.into_inner();

    match data.media.delete.execute(user.owner(), &public_id).await {
        Ok(()) => {
            info!(owner = %user.user_id, public_id = %public_id, "Image deleted");
            ApiResponse::no_content()
        }
        Err(DeleteImageError::NotFound) => {
            ApiResponse::not_found("IMAGE_NOT_FOUND", "Image not found")
        }
        Err(DeleteImageError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "You do not own this image")
        }
        Err(DeleteImageError::StorageError(e)) => {
            error!("Storage error deleting image {}: {}", public_id, e);
            ApiResponse::internal_error()
        }
    }
}

use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::modules::media::application::domain::entities::ImageTransform;
use crate::modules::media::application::ports::incoming::use_cases::{
    EncodedImage, UploadImagesCommand, UploadImagesError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UploadFile {
    /// Declared type; may be empty when `data` is a data URI.
    #[serde(default)]
    pub mime_type: String,
    /// Base64 payload or `data:<mime>;base64,<payload>`.
    pub data: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UploadImagesRequest {
    pub files: Vec<UploadFile>,
    /// Subfolder below the caller's own media folder.
    #[serde(default)]
    pub folder: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub transform: Option<ImageTransform>,
}

impl From<UploadImagesRequest> for UploadImagesCommand {
    fn from(req: UploadImagesRequest) -> Self {
        Self {
            files: req
                .files
                .into_iter()
                .map(|f| EncodedImage {
                    mime_type: f.mime_type,
                    data: f.data,
                })
                .collect(),
            folder: req.folder,
            transform: req.transform.unwrap_or_default(),
        }
    }
}

/// Upload up to ten images to the CDN
#[utoipa::path(
    post,
    path = "/api/media/images",
    tag = "media",
    request_body = UploadImagesRequest,
    responses(
        (status = 201, description = "Images stored, in request order"),
        (status = 400, description = "Request rejected before upload", body = ErrorResponse),
        (status = 403, description = "Email not verified", body = ErrorResponse),
        (status = 500, description = "CDN failure", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/images")]
pub async fn upload_images_handler(
    user: VerifiedUser,
    req: web::Json<UploadImagesRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command: UploadImagesCommand = req.into_inner().into();

    match data.media.upload.execute(user.owner(), command).await {
        Ok(assets) => {
            info!(owner = %user.user_id, count = assets.len(), "Upload request completed");
            ApiResponse::created(assets)
        }
        Err(UploadImagesError::Rejected(reason)) => {
            warn!(owner = %user.user_id, reason = %reason, "Upload rejected");
            ApiResponse::bad_request("VALIDATION_ERROR", &reason.to_string())
        }
        Err(UploadImagesError::StorageError(e)) => {
            error!("Storage error uploading images for {}: {}", user.user_id, e);
            ApiResponse::internal_error()
        }
    }
}

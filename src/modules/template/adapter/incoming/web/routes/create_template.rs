use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::template::application::domain::entities::{
    CustomizationOptions, TemplateCategory, TemplateSection,
};
use crate::modules::template::application::ports::incoming::use_cases::CreateTemplateError;
use crate::modules::template::application::ports::outgoing::CreateTemplateData;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

fn default_active() -> bool {
    true
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateTemplateRequest {
    #[schema(example = "Minimal Developer")]
    pub name: String,

    /// Derived from the name when omitted.
    #[serde(default)]
    #[schema(example = "minimal-developer")]
    pub slug: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    #[schema(value_type = String, example = "developer")]
    pub category: TemplateCategory,

    #[serde(default)]
    pub is_premium: bool,

    /// Price in cents.
    #[serde(default)]
    pub price: i64,

    #[serde(default = "default_active")]
    pub is_active: bool,

    #[serde(default)]
    pub preview_image: Option<String>,

    #[schema(value_type = Vec<Object>)]
    pub sections: Vec<TemplateSection>,

    #[serde(default)]
    #[schema(value_type = Object)]
    pub customization_options: CustomizationOptions,
}

impl From<CreateTemplateRequest> for CreateTemplateData {
    fn from(req: CreateTemplateRequest) -> Self {
        CreateTemplateData {
            name: req.name,
            slug: req.slug,
            description: req.description,
            category: req.category,
            is_premium: req.is_premium,
            price: req.price,
            is_active: req.is_active,
            preview_image: req.preview_image,
            sections: req.sections,
            customization_options: req.customization_options,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Create a template
///
/// Admin only. Section ids must be unique and at least one section is required.
#[utoipa::path(
    post,
    path = "/api/admin/templates",
    tag = "templates",
    request_body = CreateTemplateRequest,
    responses(
        (status = 201, description = "Template created"),
        (status = 400, description = "Invalid template", body = ErrorResponse),
        (status = 403, description = "Not an administrator", body = ErrorResponse),
        (status = 409, description = "Slug already exists", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/admin/templates")]
pub async fn create_template_handler(
    admin: AdminUser,
    req: web::Json<CreateTemplateRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = req.into_inner();
    let name = request.name.clone();

    match data.template.create.execute(request.into()).await {
        Ok(template) => {
            info!(
                admin_id = %admin.user_id,
                template_id = %template.id,
                slug = %template.slug,
                "Template created"
            );
            ApiResponse::created(template)
        }

        Err(CreateTemplateError::Invalid(e)) => {
            warn!(name = %name, error = %e, "Rejected template definition");
            ApiResponse::bad_request("INVALID_TEMPLATE", &e.to_string())
        }

        Err(CreateTemplateError::SlugAlreadyExists) => {
            ApiResponse::conflict("SLUG_ALREADY_EXISTS", "Template slug already exists")
        }

        Err(CreateTemplateError::RepositoryError(e)) => {
            error!("Repository error creating template {}: {}", name, e);
            ApiResponse::internal_error()
        }
    }
}

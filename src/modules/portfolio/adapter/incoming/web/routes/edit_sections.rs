use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::errors::{customization_error, forbidden, portfolio_not_found};
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::modules::portfolio::application::domain::section_edit::{SectionEdit, SectionEditError};
use crate::modules::portfolio::application::ports::incoming::use_cases::EditSectionsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Ordered field edits for one section, e.g.
/// `{"op": "set_field", "field": "title", "value": "Engineer"}` or
/// `{"op": "remove_item", "index": 2}`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct EditSectionRequest {
    #[schema(value_type = Vec<Object>)]
    pub edits: Vec<SectionEdit>,
}

/// Apply field edits to a section
#[utoipa::path(
    post,
    path = "/api/portfolios/{portfolio_id}/sections/{section_id}/edits",
    tag = "portfolios",
    params(
        ("portfolio_id" = Uuid, Path, description = "Portfolio id"),
        ("section_id" = String, Path, description = "Template section id"),
    ),
    request_body = EditSectionRequest,
    responses(
        (status = 200, description = "Edits applied"),
        (status = 400, description = "Edit does not fit the section", body = ErrorResponse),
        (status = 403, description = "Portfolio belongs to another user", body = ErrorResponse),
        (status = 404, description = "Portfolio or template not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/portfolios/{portfolio_id}/sections/{section_id}/edits")]
pub async fn edit_section_handler(
    user: VerifiedUser,
    path: web::Path<(Uuid, String)>,
    req: web::Json<EditSectionRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (portfolio_id, section_id) = path.into_inner();

    match data
        .portfolio
        .edit_sections
        .execute(user.owner(), portfolio_id, &section_id, req.into_inner().edits)
        .await
    {
        Ok(portfolio) => ApiResponse::success(portfolio),

        Err(EditSectionsError::NotFound) => portfolio_not_found(),
        Err(EditSectionsError::Forbidden) => forbidden(),

        Err(EditSectionsError::TemplateNotFound) => {
            ApiResponse::not_found("TEMPLATE_NOT_FOUND", "Template not found")
        }

        Err(EditSectionsError::InvalidEdit(SectionEditError::UnknownSection(id))) => {
            ApiResponse::bad_request(
                "INVALID_SECTIONS",
                &format!("Unknown section ids: {id}"),
            )
        }

        Err(EditSectionsError::InvalidEdit(e)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(EditSectionsError::Invalid(e)) => customization_error(&e),

        Err(EditSectionsError::RepositoryError(e)) => {
            error!(
                "Repository error editing section {} of portfolio {}: {}",
                section_id, portfolio_id, e
            );
            ApiResponse::internal_error()
        }
    }
}

use actix_web::{patch, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::template::application::domain::entities::{
    CustomizationOptions, TemplateCategory, TemplateSection,
};
use crate::modules::template::application::ports::incoming::use_cases::PatchTemplateError;
use crate::modules::template::application::ports::outgoing::PatchTemplateData;
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Omitted fields stay untouched; `null` is only accepted for `preview_image`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct PatchTemplateRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub slug: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub category: PatchField<TemplateCategory>,

    #[serde(default)]
    #[schema(value_type = Option<bool>)]
    pub is_premium: PatchField<bool>,

    #[serde(default)]
    #[schema(value_type = Option<i64>)]
    pub price: PatchField<i64>,

    #[serde(default)]
    #[schema(value_type = Option<bool>)]
    pub is_active: PatchField<bool>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub preview_image: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<Vec<Object>>)]
    pub sections: PatchField<Vec<TemplateSection>>,

    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub customization_options: PatchField<CustomizationOptions>,
}

impl From<PatchTemplateRequest> for PatchTemplateData {
    fn from(req: PatchTemplateRequest) -> Self {
        PatchTemplateData {
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

/// Patch a template
#[utoipa::path(
    patch,
    path = "/api/admin/templates/{template_id}",
    tag = "templates",
    params(("template_id" = Uuid, Path, description = "Template id")),
    request_body = PatchTemplateRequest,
    responses(
        (status = 200, description = "Template updated"),
        (status = 400, description = "Invalid template", body = ErrorResponse),
        (status = 404, description = "Template not found", body = ErrorResponse),
        (status = 409, description = "Slug already exists", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[patch("/api/admin/templates/{template_id}")]
pub async fn patch_template_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<PatchTemplateRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let template_id = path.into_inner();
    let patch_data: PatchTemplateData = req.into_inner().into();

    match data.template.patch.execute(template_id, patch_data).await {
        Ok(updated) => {
            info!(admin_id = %admin.user_id, template_id = %template_id, "Template patched");
            ApiResponse::success(updated)
        }

        Err(PatchTemplateError::NotFound) => {
            ApiResponse::not_found("TEMPLATE_NOT_FOUND", "Template not found")
        }

        Err(PatchTemplateError::Invalid(e)) => {
            ApiResponse::bad_request("INVALID_TEMPLATE", &e.to_string())
        }

        Err(PatchTemplateError::SlugAlreadyExists) => {
            ApiResponse::conflict("SLUG_ALREADY_EXISTS", "Template slug already exists")
        }

        Err(PatchTemplateError::RepositoryError(e)) => {
            error!("Repository error patching template {}: {}", template_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    use crate::modules::template::application::domain::entities::test_fixtures::{
        section, template_with,
    };
    use crate::modules::template::application::domain::entities::{
        Template, TemplateValidationError,
    };
    use crate::modules::template::application::ports::incoming::use_cases::PatchTemplateUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{auth_header, test_token_provider};

    /* --------------------------------------------------
     * Mock PatchTemplateUseCase
     * -------------------------------------------------- */

    #[derive(Clone)]
    struct MockPatchTemplate {
        result: Result<Template, PatchTemplateError>,
        seen: Arc<Mutex<Option<PatchTemplateData>>>,
    }

    impl MockPatchTemplate {
        fn new(result: Result<Template, PatchTemplateError>) -> Self {
            Self {
                result,
                seen: Arc::new(Mutex::new(None)),
            }
        }
    }

    #[async_trait]
    impl PatchTemplateUseCase for MockPatchTemplate {
        async fn execute(
            &self,
            _template_id: Uuid,
            data: PatchTemplateData,
        ) -> Result<Template, PatchTemplateError> {
            *self.seen.lock().unwrap() = Some(data);
            self.result.clone()
        }
    }

    /* --------------------------------------------------
     * Helpers
     * -------------------------------------------------- */

    async fn call(mock: MockPatchTemplate, body: Value) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_patch_template(mock)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(patch_template_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/admin/templates/{}", Uuid::new_v4()))
            .insert_header(auth_header(Uuid::new_v4(), true, true))
            .set_json(body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn omitted_fields_reach_use_case_as_unset() {
        let mut template = template_with(vec![section("hero", "hero")]);
        template.name = "Renamed".to_string();
        let mock = MockPatchTemplate::new(Ok(template));

        let (status, body) = call(
            mock.clone(),
            json!({ "name": "Renamed", "preview_image": null }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "Renamed");

        let seen = mock.seen.lock().unwrap().clone().unwrap();
        assert_eq!(seen.name, PatchField::Value("Renamed".to_string()));
        assert_eq!(seen.preview_image, PatchField::Null);
        assert!(seen.sections.is_unset());
        assert!(seen.price.is_unset());
    }

    #[actix_web::test]
    async fn not_found_maps_to_404() {
        let (status, body) = call(
            MockPatchTemplate::new(Err(PatchTemplateError::NotFound)),
            json!({ "is_active": false }),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "TEMPLATE_NOT_FOUND");
    }

    #[actix_web::test]
    async fn invalid_sections_map_to_bad_request() {
        let (status, body) = call(
            MockPatchTemplate::new(Err(PatchTemplateError::Invalid(
                TemplateValidationError::NoSections,
            ))),
            json!({ "sections": [] }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_TEMPLATE");
    }

    #[actix_web::test]
    async fn slug_conflict_maps_to_409() {
        let (status, body) = call(
            MockPatchTemplate::new(Err(PatchTemplateError::SlugAlreadyExists)),
            json!({ "slug": "taken" }),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "SLUG_ALREADY_EXISTS");
    }
}

use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::modules::media::adapter::incoming::web::routes::{UploadFile, UploadImagesRequest};
use crate::modules::portfolio::adapter::incoming::web::routes::{
    Acknowledged, ContactRequest, CreatePortfolioRequest, CustomizePortfolioRequest,
    EditSectionRequest,
};
use crate::modules::template::adapter::incoming::web::routes::{
    CreateTemplateRequest, PatchTemplateRequest,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "PortfolioHub API",
        version = "1.0.0",
        description = "Templates, portfolio documents, public portfolio pages and media uploads",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Template endpoints
        crate::modules::template::adapter::incoming::web::routes::list_templates_handler,
        crate::modules::template::adapter::incoming::web::routes::get_template_handler,
        crate::modules::template::adapter::incoming::web::routes::create_template_handler,
        crate::modules::template::adapter::incoming::web::routes::patch_template_handler,
        crate::modules::template::adapter::incoming::web::routes::delete_template_handler,

        // Portfolio endpoints
        crate::modules::portfolio::adapter::incoming::web::routes::create_portfolio_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::list_portfolios_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::customize_portfolio_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::edit_section_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::publish_portfolio_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::unpublish_portfolio_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::duplicate_portfolio_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::delete_portfolio_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::render_portfolio_handler,

        // Public portfolio endpoints
        crate::modules::portfolio::adapter::incoming::web::routes::get_public_portfolio_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::record_share_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::submit_contact_handler,

        // Media endpoints
        crate::modules::media::adapter::incoming::web::routes::upload_images_handler,
        crate::modules::media::adapter::incoming::web::routes::delete_image_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            CreateTemplateRequest,
            PatchTemplateRequest,

            CreatePortfolioRequest,
            CustomizePortfolioRequest,
            EditSectionRequest,
            ContactRequest,
            Acknowledged,

            UploadImagesRequest,
            UploadFile
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "templates", description = "Template catalog"),
        (name = "portfolios", description = "Portfolio documents owned by the caller"),
        (name = "public", description = "Published portfolio pages"),
        (name = "media", description = "Image uploads to the CDN"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token issued by the account service"))
                        .build(),
                ),
            )
        }
    }
}

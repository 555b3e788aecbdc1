use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::template::application::domain::entities::TemplateCategory;
use crate::modules::template::application::ports::incoming::use_cases::ListTemplatesError;
use crate::modules::template::application::ports::outgoing::TemplateListFilter;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListTemplatesQuery {
    #[param(value_type = Option<String>, example = "developer")]
    pub category: Option<TemplateCategory>,
    pub is_premium: Option<bool>,
}

impl ListTemplatesQuery {
    fn into_filter(self, include_inactive: bool) -> TemplateListFilter {
        TemplateListFilter {
            category: self.category,
            is_premium: self.is_premium,
            include_inactive,
        }
    }
}

async fn list(data: &web::Data<AppState>, filter: TemplateListFilter) -> HttpResponse {
    match data.template.list.execute(filter).await {
        Ok(templates) => ApiResponse::success(templates),
        Err(ListTemplatesError::QueryError(e)) => {
            error!("Query error listing templates: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Browse the active template catalog
#[utoipa::path(
    get,
    path = "/api/templates",
    tag = "templates",
    params(ListTemplatesQuery),
    responses((status = 200, description = "Active templates, newest first"))
)]
#[get("/api/templates")]
pub async fn list_templates_handler(
    query: web::Query<ListTemplatesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    list(&data, query.into_inner().into_filter(false)).await
}

#[get("/api/admin/templates")]
pub async fn admin_list_templates_handler(
    _admin: AdminUser,
    query: web::Query<ListTemplatesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    list(&data, query.into_inner().into_filter(true)).await
}

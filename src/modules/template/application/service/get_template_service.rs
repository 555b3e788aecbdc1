use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::template::application::domain::entities::Template;
use crate::modules::template::application::ports::incoming::use_cases::{
    GetTemplateError, GetTemplateUseCase,
};
use crate::modules::template::application::ports::outgoing::TemplateQuery;

pub struct GetTemplateService<Q>
where
    Q: TemplateQuery,
{
    template_query: Q,
}

impl<Q> GetTemplateService<Q>
where
    Q: TemplateQuery,
{
    pub fn new(template_query: Q) -> Self {
        Self { template_query }
    }
}

#[async_trait]
impl<Q> GetTemplateUseCase for GetTemplateService<Q>
where
    Q: TemplateQuery + Send + Sync,
{
    async fn execute(
        &self,
        template_id: Uuid,
        include_inactive: bool,
    ) -> Result<Template, GetTemplateError> {
        let template = self
            .template_query
            .find_by_id(template_id)
            .await
            .map_err(|e| GetTemplateError::QueryError(e.to_string()))?;

        match template {
            Some(t) if t.is_active || include_inactive => Ok(t),
            _ => Err(GetTemplateError::NotFound),
        }
    }
}

use async_trait::async_trait;

use crate::modules::template::application::domain::entities::Template;
use crate::modules::template::application::ports::incoming::use_cases::{
    ListTemplatesError, ListTemplatesUseCase,
};
use crate::modules::template::application::ports::outgoing::{TemplateListFilter, TemplateQuery};

pub struct ListTemplatesService<Q>
where
    Q: TemplateQuery,
{
    template_query: Q,
}

impl<Q> ListTemplatesService<Q>
where
    Q: TemplateQuery,
{
    pub fn new(template_query: Q) -> Self {
        Self { template_query }
    }
}

#[async_trait]
impl<Q> ListTemplatesUseCase for ListTemplatesService<Q>
where
    Q: TemplateQuery + Send + Sync,
{
    async fn execute(&self, filter: TemplateListFilter) -> Result<Vec<Template>, ListTemplatesError> {
        self.template_query
            .list(filter)
            .await
            .map_err(|e| ListTemplatesError::QueryError(e.to_string()))
    }
}

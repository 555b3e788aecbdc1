use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::support::{load_owned, LookupError};
use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::domain::customization::apply_customization;
use crate::modules::portfolio::application::domain::entities::Portfolio;
use crate::modules::portfolio::application::domain::section_edit::{edits_to_patch, SectionEdit};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    EditSectionsError, EditSectionsUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioQuery, PortfolioRepository,
};
use crate::modules::template::application::ports::outgoing::TemplateQuery;

/// Section-scoped editor operations, funnelled through the same merge as a
/// full customization.
pub struct EditSectionsService<Q, R>
where
    Q: PortfolioQuery,
    R: PortfolioRepository,
{
    portfolio_query: Q,
    portfolio_repository: R,
    template_query: Arc<dyn TemplateQuery + Send + Sync>,
}

impl<Q, R> EditSectionsService<Q, R>
where
    Q: PortfolioQuery,
    R: PortfolioRepository,
{
    pub fn new(
        portfolio_query: Q,
        portfolio_repository: R,
        template_query: Arc<dyn TemplateQuery + Send + Sync>,
    ) -> Self {
        Self {
            portfolio_query,
            portfolio_repository,
            template_query,
        }
    }
}

impl From<LookupError> for EditSectionsError {
    fn from(e: LookupError) -> Self {
        match e {
            LookupError::NotFound => EditSectionsError::NotFound,
            LookupError::Forbidden => EditSectionsError::Forbidden,
            LookupError::Query(msg) => EditSectionsError::RepositoryError(msg),
        }
    }
}

#[async_trait]
impl<Q, R> EditSectionsUseCase for EditSectionsService<Q, R>
where
    Q: PortfolioQuery + Send + Sync,
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        portfolio_id: Uuid,
        section_id: &str,
        edits: Vec<SectionEdit>,
    ) -> Result<Portfolio, EditSectionsError> {
        let current = load_owned(&self.portfolio_query, owner, portfolio_id).await?;

        let template = self
            .template_query
            .find_by_id(current.template_id)
            .await
            .map_err(|e| EditSectionsError::RepositoryError(e.to_string()))?
            .ok_or(EditSectionsError::TemplateNotFound)?;

        let edit_count = edits.len();
        let patch = edits_to_patch(&current, &template, section_id, edits)?;
        let customized = apply_customization(&current, patch, &template)?;

        let saved = self
            .portfolio_repository
            .save(customized.portfolio)
            .await
            .map_err(|e| EditSectionsError::RepositoryError(e.to_string()))?;

        info!(
            portfolio_id = %portfolio_id,
            section_id = %section_id,
            edits = edit_count,
            "Section edited"
        );
        Ok(saved)
    }
}

use std::sync::Arc;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioUseCase, CustomizePortfolioUseCase, DeletePortfolioUseCase,
    DuplicatePortfolioUseCase, EditSectionsUseCase, GetPortfolioUseCase,
    GetPublicPortfolioUseCase, ListPortfoliosUseCase, PublishPortfolioUseCase,
    RecordShareUseCase, RenderPortfolioUseCase, SubmitContactUseCase, UnpublishPortfolioUseCase,
};

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub create: Arc<dyn CreatePortfolioUseCase + Send + Sync>,
    pub get: Arc<dyn GetPortfolioUseCase + Send + Sync>,
    pub list: Arc<dyn ListPortfoliosUseCase + Send + Sync>,
    pub customize: Arc<dyn CustomizePortfolioUseCase + Send + Sync>,
    pub edit_sections: Arc<dyn EditSectionsUseCase + Send + Sync>,
    pub publish: Arc<dyn PublishPortfolioUseCase + Send + Sync>,
    pub unpublish: Arc<dyn UnpublishPortfolioUseCase + Send + Sync>,
    pub duplicate: Arc<dyn DuplicatePortfolioUseCase + Send + Sync>,
    pub delete: Arc<dyn DeletePortfolioUseCase + Send + Sync>,
    pub render: Arc<dyn RenderPortfolioUseCase + Send + Sync>,

    // Public surface, addressed by owner username and slug.
    pub get_public: Arc<dyn GetPublicPortfolioUseCase + Send + Sync>,
    pub record_share: Arc<dyn RecordShareUseCase + Send + Sync>,
    pub submit_contact: Arc<dyn SubmitContactUseCase + Send + Sync>,
}

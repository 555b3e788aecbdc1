use std::sync::Arc;

use crate::modules::template::application::ports::incoming::use_cases::{
    CreateTemplateUseCase, DeleteTemplateUseCase, GetTemplateUseCase, ListTemplatesUseCase,
    PatchTemplateUseCase,
};

#[derive(Clone)]
pub struct TemplateUseCases {
    pub create: Arc<dyn CreateTemplateUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchTemplateUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteTemplateUseCase + Send + Sync>,
    pub get: Arc<dyn GetTemplateUseCase + Send + Sync>,
    pub list: Arc<dyn ListTemplatesUseCase + Send + Sync>,
}

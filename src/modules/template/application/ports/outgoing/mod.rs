pub mod template_query;
pub mod template_repository;

pub use template_query::{TemplateListFilter, TemplateQuery, TemplateQueryError};
pub use template_repository::{
    CreateTemplateData, PatchTemplateData, TemplateRepository, TemplateRepositoryError,
};

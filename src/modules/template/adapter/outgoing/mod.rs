pub mod sea_orm_entity;
pub mod template_query_postgres;
pub mod template_repository_postgres;

pub use template_query_postgres::TemplateQueryPostgres;
pub use template_repository_postgres::TemplateRepositoryPostgres;

mod create_template_service;
mod delete_template_service;
mod get_template_service;
mod list_templates_service;
mod patch_template_service;

pub use create_template_service::CreateTemplateService;
pub use delete_template_service::DeleteTemplateService;
pub use get_template_service::GetTemplateService;
pub use list_templates_service::ListTemplatesService;
pub use patch_template_service::PatchTemplateService;

mod create_template;
mod delete_template;
mod get_template;
mod list_templates;
mod patch_template;

pub use create_template::{CreateTemplateError, CreateTemplateUseCase};
pub use delete_template::{DeleteTemplateError, DeleteTemplateUseCase};
pub use get_template::{GetTemplateError, GetTemplateUseCase};
pub use list_templates::{ListTemplatesError, ListTemplatesUseCase};
pub use patch_template::{PatchTemplateError, PatchTemplateUseCase};

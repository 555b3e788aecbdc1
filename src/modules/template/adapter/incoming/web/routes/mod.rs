mod create_template;
mod delete_template;
mod get_template;
mod list_templates;
mod patch_template;

pub use create_template::*;
pub use delete_template::*;
pub use get_template::*;
pub use list_templates::*;
pub use patch_template::*;

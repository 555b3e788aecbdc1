mod create_portfolio;
mod customize_portfolio;
mod delete_portfolio;
mod duplicate_portfolio;
mod edit_sections;
mod errors;
mod get_portfolio;
mod list_portfolios;
mod public_portfolio;
mod publish_portfolio;
mod render_portfolio;

pub use create_portfolio::*;
pub use customize_portfolio::*;
pub use delete_portfolio::*;
pub use duplicate_portfolio::*;
pub use edit_sections::*;
pub use get_portfolio::*;
pub use list_portfolios::*;
pub use public_portfolio::*;
pub use publish_portfolio::*;
pub use render_portfolio::*;

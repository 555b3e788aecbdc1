mod create_portfolio_service;
mod customize_portfolio_service;
mod delete_portfolio_service;
mod duplicate_portfolio_service;
mod edit_sections_service;
mod get_portfolio_service;
mod get_public_portfolio_service;
mod list_portfolios_service;
mod publish_portfolio_service;
mod record_share_service;
mod render_portfolio_service;
mod submit_contact_service;
mod support;

#[cfg(test)]
pub(crate) mod test_doubles;

pub use create_portfolio_service::CreatePortfolioService;
pub use customize_portfolio_service::CustomizePortfolioService;
pub use delete_portfolio_service::DeletePortfolioService;
pub use duplicate_portfolio_service::DuplicatePortfolioService;
pub use edit_sections_service::EditSectionsService;
pub use get_portfolio_service::GetPortfolioService;
pub use get_public_portfolio_service::GetPublicPortfolioService;
pub use list_portfolios_service::ListPortfoliosService;
pub use publish_portfolio_service::{PublishPortfolioService, UnpublishPortfolioService};
pub use record_share_service::RecordShareService;
pub use render_portfolio_service::RenderPortfolioService;
pub use submit_contact_service::SubmitContactService;

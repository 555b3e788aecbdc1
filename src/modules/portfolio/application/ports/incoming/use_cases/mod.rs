mod create_portfolio;
mod customize_portfolio;
mod delete_portfolio;
mod duplicate_portfolio;
mod edit_sections;
mod get_portfolio;
mod get_public_portfolio;
mod list_portfolios;
mod publish_portfolio;
mod record_share;
mod render_portfolio;
mod submit_contact;
mod unpublish_portfolio;

pub use create_portfolio::{CreatePortfolioError, CreatePortfolioInput, CreatePortfolioUseCase};
pub use customize_portfolio::{CustomizePortfolioError, CustomizePortfolioUseCase};
pub use delete_portfolio::{DeletePortfolioError, DeletePortfolioUseCase};
pub use duplicate_portfolio::{DuplicatePortfolioError, DuplicatePortfolioUseCase};
pub use edit_sections::{EditSectionsError, EditSectionsUseCase};
pub use get_portfolio::{GetPortfolioError, GetPortfolioUseCase};
pub use get_public_portfolio::{
    GetPublicPortfolioError, GetPublicPortfolioUseCase, PublicPortfolio, PublicPortfolioRequest,
};
pub use list_portfolios::{ListPortfoliosError, ListPortfoliosUseCase};
pub use publish_portfolio::{PublishPortfolioError, PublishPortfolioUseCase};
pub use record_share::{RecordShareError, RecordShareUseCase};
pub use render_portfolio::{RenderPortfolioError, RenderPortfolioUseCase, RenderedPortfolio};
pub use submit_contact::{ContactForm, SubmitContactError, SubmitContactUseCase};
pub use unpublish_portfolio::{UnpublishPortfolioError, UnpublishPortfolioUseCase};

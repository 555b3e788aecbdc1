pub mod password_hasher;
pub mod portfolio_query;
pub mod portfolio_repository;
pub mod profile_source;
pub mod visitor_tracker;

pub use password_hasher::{HashError, PasswordHasher};
pub use portfolio_query::{PortfolioQuery, PortfolioQueryError};
pub use portfolio_repository::{PortfolioRepository, PortfolioRepositoryError, StatCounter};
pub use profile_source::{ProfileSource, ProfileSourceError};
pub use visitor_tracker::{VisitorTracker, VisitorTrackerError};

pub mod argon2_hasher;
pub mod portfolio_query_postgres;
pub mod portfolio_repository_postgres;
pub mod profile_source_postgres;
pub mod sea_orm_entity;
pub mod visitor_tracker_redis;

pub use argon2_hasher::Argon2Hasher;
pub use portfolio_query_postgres::PortfolioQueryPostgres;
pub use portfolio_repository_postgres::PortfolioRepositoryPostgres;
pub use profile_source_postgres::ProfileSourcePostgres;
pub use visitor_tracker_redis::RedisVisitorTracker;

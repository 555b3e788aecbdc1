pub mod token_provider;
pub mod user_query;

pub use user_query::{AccountHandle, UserQuery, UserQueryError};

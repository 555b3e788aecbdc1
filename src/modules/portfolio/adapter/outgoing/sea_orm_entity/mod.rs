pub mod portfolios;
pub mod user_profiles;

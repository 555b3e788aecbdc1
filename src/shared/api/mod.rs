mod json_config;
mod response;

pub use json_config::{custom_json_config, json_config_with_limit};
pub use response::{ApiError, ApiResponse};

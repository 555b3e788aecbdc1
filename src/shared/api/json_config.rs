use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::web::JsonConfig;

use crate::shared::api::ApiResponse;

/// Rejected JSON bodies get the standard error envelope instead of
/// actix's plain-text default.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        let response = match err {
            JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                ApiResponse::payload_too_large(&message)
            }
            _ => ApiResponse::bad_request("VALIDATION_ERROR", &message),
        };
        InternalError::from_response(err, response).into()
    })
}

/// Same error envelope with a custom body size limit.
pub fn json_config_with_limit(limit: usize) -> JsonConfig {
    custom_json_config().limit(limit)
}

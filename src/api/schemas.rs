use serde::Serialize;
use utoipa::ToSchema;

/// Body of every non-2xx JSON response.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable code clients branch on, e.g. `SLUG_ALREADY_EXISTS` or `PREMIUM_TEMPLATE`.
    #[schema(example = "PORTFOLIO_NOT_FOUND")]
    pub code: String,

    #[schema(example = "Portfolio not found")]
    pub message: String,
}

use actix_web::HttpResponse;

use crate::modules::portfolio::application::domain::customization::CustomizationError;
use crate::shared::api::ApiResponse;

pub(super) fn portfolio_not_found() -> HttpResponse {
    ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
}

pub(super) fn forbidden() -> HttpResponse {
    ApiResponse::forbidden("FORBIDDEN", "You do not have access to this portfolio")
}

pub(super) fn slug_exhausted() -> HttpResponse {
    ApiResponse::conflict(
        "SLUG_ALREADY_EXISTS",
        "Could not find a free slug for this portfolio",
    )
}

pub(super) fn customization_error(e: &CustomizationError) -> HttpResponse {
    let code = match e {
        CustomizationError::InvalidSections(_) => "INVALID_SECTIONS",
        CustomizationError::ShapeMismatch { .. } => "SHAPE_MISMATCH",
        CustomizationError::InvalidContent(_) | CustomizationError::EmptyTitle => {
            "VALIDATION_ERROR"
        }
    };

    ApiResponse::bad_request(code, &e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    use crate::modules::portfolio::application::domain::entities::InvalidSectionsError;
    use crate::modules::template::application::domain::entities::ContentShape;

    #[test]
    fn customization_errors_are_bad_requests_with_distinct_codes() {
        let cases = [
            CustomizationError::InvalidSections(InvalidSectionsError::Unknown(vec!["x".to_string()])),
            CustomizationError::InvalidSections(InvalidSectionsError::Duplicate(vec!["x".to_string()])),
            CustomizationError::ShapeMismatch {
                key: "projects".to_string(),
                expected: ContentShape::List,
            },
            CustomizationError::EmptyTitle,
        ];

        for e in &cases {
            assert_eq!(customization_error(e).status(), StatusCode::BAD_REQUEST);
        }
    }
}

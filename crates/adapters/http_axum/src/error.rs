//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use reflex_domain::error::DeliveryError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`DeliveryError`] to an HTTP response with appropriate status code.
pub struct ApiError(DeliveryError);

impl From<DeliveryError> for ApiError {
    fn from(err: DeliveryError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DeliveryError::Reason(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            DeliveryError::Category(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            DeliveryError::ServiceNotFound { .. } | DeliveryError::Transport(_) => {
                tracing::error!(error = %self.0, "delivery failed downstream");
                (StatusCode::BAD_GATEWAY, self.0.to_string())
            }
            DeliveryError::Path(_)
            | DeliveryError::Mutate(_)
            | DeliveryError::ItemMissing { .. }
            | DeliveryError::ItemNotJson { .. }
            | DeliveryError::Store(_) => {
                tracing::error!(error = %self.0, "delivery failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "delivery failed".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reflex_domain::reason::ReasonError;

    #[test]
    fn should_map_reason_errors_to_bad_request() {
        let response =
            ApiError(DeliveryError::Reason(ReasonError::MissingReason)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_service_not_found_to_bad_gateway() {
        let response = ApiError(DeliveryError::ServiceNotFound {
            service: "pump-south".to_string(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn should_map_store_errors_to_internal_error() {
        let response = ApiError(DeliveryError::Store(Box::new(std::io::Error::other(
            "down",
        ))))
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

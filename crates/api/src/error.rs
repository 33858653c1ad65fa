use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use persistence::StoreError;
use serde::Serialize;
use shared::validation::REQUIRED_FIELDS_MESSAGE;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// JSON error body. `error` carries the text shown to visitors and `code`
/// the stable machine-readable kind.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, error) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "validation_error", msg),
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Internal Server Error".into(),
                )
            }
            ApiError::ServiceUnavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, "service_unavailable", msg)
            }
        };

        (status, Json(ErrorBody { error, code })).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Resource not found".into()),
            _ => ApiError::Internal(format!("Database error: {}", err)),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Database(db_err) => db_err.into(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Rejected JSON body");
        ApiError::Validation(REQUIRED_FIELDS_MESSAGE.to_string())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                })
            })
            .collect();

        // Field iteration order is unspecified
        messages.sort();
        messages.dedup();

        ApiError::Validation(messages.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use validator::Validate;

    #[derive(Validate)]
    struct SampleForm {
        #[validate(custom(function = "shared::validation::validate_not_blank"))]
        first: String,
        #[validate(custom(function = "shared::validation::validate_not_blank"))]
        second: String,
        #[validate(length(min = 3))]
        third: String,
    }

    #[test]
    fn test_api_error_not_found() {
        let response = ApiError::NotFound("missing".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_api_error_validation() {
        let response = ApiError::Validation("invalid input".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_api_error_internal() {
        let response = ApiError::Internal("connection reset".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_internal_error_body_hides_detail() {
        let response = ApiError::Internal("password authentication failed".to_string())
            .into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["error"], "Internal Server Error");
        assert_eq!(body["code"], "internal_error");
    }

    #[tokio::test]
    async fn test_validation_error_body_carries_message() {
        let response = ApiError::Validation("All fields are required".to_string()).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["error"], "All fields are required");
        assert_eq!(body["code"], "validation_error");
    }

    #[test]
    fn test_api_error_service_unavailable() {
        let response = ApiError::ServiceUnavailable("database down".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_api_error_display() {
        assert_eq!(
            format!("{}", ApiError::NotFound("test".to_string())),
            "Not found: test"
        );
        assert_eq!(
            format!("{}", ApiError::Validation("test".to_string())),
            "Validation error: test"
        );
        assert_eq!(
            format!("{}", ApiError::Internal("test".to_string())),
            "Internal error: test"
        );
    }

    #[test]
    fn test_from_sqlx_row_not_found() {
        let error: ApiError = sqlx::Error::RowNotFound.into();
        match error {
            ApiError::NotFound(msg) => assert_eq!(msg, "Resource not found"),
            _ => panic!("Expected NotFound error"),
        }
    }

    #[test]
    fn test_from_store_error_pool_timeout() {
        let error: ApiError = StoreError::Database(sqlx::Error::PoolTimedOut).into();
        assert!(matches!(error, ApiError::Internal(_)));
    }

    #[test]
    fn test_validation_messages_are_deduplicated() {
        let form = SampleForm {
            first: String::new(),
            second: " ".to_string(),
            third: "abcd".to_string(),
        };
        let error: ApiError = form.validate().unwrap_err().into();
        match error {
            ApiError::Validation(msg) => assert_eq!(msg, "All fields are required"),
            _ => panic!("Expected Validation error"),
        }
    }

    #[test]
    fn test_validation_message_falls_back_to_field_name() {
        let form = SampleForm {
            first: "a".to_string(),
            second: "b".to_string(),
            third: "x".to_string(),
        };
        let error: ApiError = form.validate().unwrap_err().into();
        match error {
            ApiError::Validation(msg) => assert_eq!(msg, "third is invalid"),
            _ => panic!("Expected Validation error"),
        }
    }
}

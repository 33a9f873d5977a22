use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::account::errors::AccountError;
use crate::domain::vocation::errors::VocationError;

pub mod create_vocation;
pub mod current_account;
pub mod get_vocation;
pub mod home;
pub mod list_vocations;
pub mod login;
pub mod register;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Error responses. Messages are client-facing; internal detail is logged
/// where the error is converted, never carried here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    ServiceUnavailable(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
}

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// JSON body extractor whose rejections use the error envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected request body");

        match rejection {
            JsonRejection::JsonDataError(_) => ApiError::UnprocessableEntity(
                "Request body has missing or invalid fields".to_string(),
            ),
            JsonRejection::MissingJsonContentType(_) => {
                ApiError::BadRequest("Expected an application/json request body".to_string())
            }
            _ => ApiError::BadRequest("Request body is not valid JSON".to_string()),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        tracing::error!(error = %e, "Unhandled error");
        Self::InternalServerError("Internal server error".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::NotFound(_) => ApiError::NotFound(err.to_string()),
            // Unknown account and wrong password look the same from outside
            AccountError::UnknownIdentifier(_) | AccountError::InvalidCredentials => {
                ApiError::Unauthorized(INVALID_CREDENTIALS.to_string())
            }
            AccountError::UsernameAlreadyExists(_) | AccountError::EmailAlreadyExists(_) => {
                ApiError::Conflict(err.to_string())
            }
            AccountError::InvalidAccountId(_)
            | AccountError::InvalidUsername(_)
            | AccountError::InvalidEmail(_)
            | AccountError::EmptyPassword
            | AccountError::ValueTooLong => ApiError::UnprocessableEntity(err.to_string()),
            AccountError::StorageUnavailable(_) => {
                tracing::error!(error = %err, "Credential store unavailable");
                ApiError::ServiceUnavailable("Service temporarily unavailable".to_string())
            }
            AccountError::Hashing(_) | AccountError::TokenIssuing(_) => {
                tracing::error!(error = %err, "Authentication internals failed");
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl From<VocationError> for ApiError {
    fn from(err: VocationError) -> Self {
        match err {
            VocationError::NotFound(_) | VocationError::OwnerNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            VocationError::InvalidId(_) => ApiError::BadRequest(err.to_string()),
            VocationError::InvalidName(_) | VocationError::ValueTooLong => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            VocationError::StorageUnavailable(_) => {
                tracing::error!(error = %err, "Vocation store unavailable");
                ApiError::ServiceUnavailable("Service temporarily unavailable".to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_failures_collapse_to_one_message() {
        let unknown = ApiError::from(AccountError::UnknownIdentifier("ghost".to_string()));
        let wrong = ApiError::from(AccountError::InvalidCredentials);

        assert_eq!(unknown, wrong);
        assert_eq!(unknown, ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    }

    #[test]
    fn test_storage_failure_hides_detail() {
        let err = ApiError::from(AccountError::StorageUnavailable(
            "connection refused at 10.0.0.5:5432".to_string(),
        ));

        match err {
            ApiError::ServiceUnavailable(msg) => assert!(!msg.contains("10.0.0.5")),
            other => panic!("unexpected mapping: {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_maps_to_conflict() {
        let err = ApiError::from(AccountError::EmailAlreadyExists("a@b.co".to_string()));
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[test]
    fn test_client_caused_storage_rejections_are_not_outages() {
        assert!(matches!(
            ApiError::from(VocationError::OwnerNotFound("id".to_string())),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from(VocationError::ValueTooLong),
            ApiError::UnprocessableEntity(_)
        ));
        assert!(matches!(
            ApiError::from(AccountError::ValueTooLong),
            ApiError::UnprocessableEntity(_)
        ));
    }

    #[test]
    fn test_error_response_status() {
        let response = ApiError::Unauthorized("nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}

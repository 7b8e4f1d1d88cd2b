use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use serde_json::json;

use crate::blog::errors::BlogError;
use crate::user::errors::UserError;

pub mod create_blog;
pub mod create_comment;
pub mod create_user;
pub mod delete_blog;
pub mod delete_user;
pub mod get_blog;
pub mod list_blogs;
pub mod list_comments;
pub mod list_users;
pub mod login;
pub mod update_blog;

/// A successful handler outcome: status code plus a JSON body.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Error taxonomy at the HTTP boundary.
///
/// Validation failures (including password-policy and uniqueness
/// violations) are 400, authentication and ownership failures 401, missing
/// entities 404, everything else 500. Bodies are `{"error": message}`;
/// internal failures are logged in full and reported generically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Unexpected failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) | UserError::NotFoundByUsername(_) => {
                ApiError::NotFound(err.to_string())
            }
            UserError::InvalidUserId(_)
            | UserError::InvalidUsername(_)
            | UserError::PasswordPolicy(_)
            | UserError::UsernameAlreadyExists(_) => ApiError::BadRequest(err.to_string()),
            UserError::InvalidCredentials | UserError::NotAccountOwner => {
                ApiError::Unauthorized(err.to_string())
            }
            UserError::DatabaseError(_) | UserError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<BlogError> for ApiError {
    fn from(err: BlogError) -> Self {
        match err {
            BlogError::NotFound(_) => ApiError::NotFound(err.to_string()),
            BlogError::InvalidBlogId(_)
            | BlogError::EmptyTitle
            | BlogError::EmptyUrl
            | BlogError::EmptyContent => ApiError::BadRequest(err.to_string()),
            BlogError::NotBlogOwner => ApiError::Unauthorized(err.to_string()),
            BlogError::DatabaseError(_) | BlogError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use serde_json::Value;

    use super::*;

    async fn response_parts(error: ApiError) -> (StatusCode, String) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        (status, json["error"].as_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn test_password_policy_violation_is_bad_request() {
        let error = ApiError::from(UserError::PasswordPolicy(auth::PolicyError::TooShort {
            min: 8,
        }));

        let (status, message) = response_parts(error).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "Password must be at least 8 characters long");
    }

    #[tokio::test]
    async fn test_duplicate_username_is_bad_request() {
        let error = ApiError::from(UserError::UsernameAlreadyExists("alice".to_string()));

        let (status, message) = response_parts(error).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "Username already exists: alice");
    }

    #[tokio::test]
    async fn test_foreign_account_mutation_is_unauthorized() {
        let error = ApiError::from(UserError::NotAccountOwner);

        let (status, message) = response_parts(error).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(message, "Invalid operation");
    }

    #[tokio::test]
    async fn test_foreign_blog_mutation_is_unauthorized() {
        let error = ApiError::from(BlogError::NotBlogOwner);

        let (status, message) = response_parts(error).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(message, "Invalid operation");
    }

    #[tokio::test]
    async fn test_missing_blog_is_not_found() {
        let error = ApiError::from(BlogError::NotFound("some-id".to_string()));

        let (status, message) = response_parts(error).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(message, "Blog not found: some-id");
    }

    #[tokio::test]
    async fn test_blank_title_is_bad_request() {
        let error = ApiError::from(BlogError::EmptyTitle);

        let (status, message) = response_parts(error).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "Title is required");
    }

    #[tokio::test]
    async fn test_database_failure_is_reported_generically() {
        let error = ApiError::from(UserError::DatabaseError(
            "connection refused at 10.0.0.1".to_string(),
        ));

        let (status, message) = response_parts(error).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "Something went wrong");
    }
}

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use auth::AuthenticationError;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::models::Username;

/// Exchange credentials for a signed session token.
///
/// An unknown username and a wrong password are indistinguishable to the
/// client: both answer 401 with the same message.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let invalid_credentials =
        || ApiError::Unauthorized("Invalid username or password".to_string());

    let username = Username::new(body.username).map_err(|_| invalid_credentials())?;

    let user = state
        .user_service
        .get_user_by_username(&username)
        .await
        .map_err(|e| match e {
            UserError::NotFoundByUsername(_) => invalid_credentials(),
            _ => ApiError::from(e),
        })?;

    let result = state
        .authenticator
        .authenticate(
            &body.password,
            &user.password_hash,
            user.id,
            user.username.as_str(),
        )
        .map_err(|e| match e {
            AuthenticationError::InvalidCredentials => invalid_credentials(),
            AuthenticationError::Password(err) => {
                ApiError::InternalServerError(format!("Password verification failed: {}", err))
            }
            AuthenticationError::Token(err) => {
                ApiError::InternalServerError(format!("Token generation failed: {}", err))
            }
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            token: result.access_token,
            username: user.username.as_str().to_string(),
            name: user.name,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
    pub username: String,
    pub name: Option<String>,
}

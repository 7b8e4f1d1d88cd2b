use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::blog::errors::BlogError;
use crate::blog::models::BlogId;
use crate::blog::ports::BlogServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn delete_blog(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let blog_id = BlogId::from_string(&id).map_err(BlogError::from)?;

    state
        .blog_service
        .delete_blog(&current_user.user_id, &blog_id)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}

use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::create_blog::BlogData;
use super::ApiError;
use super::ApiSuccess;
use crate::blog::errors::BlogError;
use crate::blog::models::BlogId;
use crate::blog::ports::BlogServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<BlogData>, ApiError> {
    let blog_id = BlogId::from_string(&id).map_err(BlogError::from)?;

    state
        .blog_service
        .get_blog(&blog_id)
        .await
        .map_err(ApiError::from)
        .map(|ref blog| ApiSuccess::new(StatusCode::OK, blog.into()))
}

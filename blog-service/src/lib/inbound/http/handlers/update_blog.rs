use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::create_blog::BlogData;
use super::ApiError;
use super::ApiSuccess;
use crate::blog::errors::BlogError;
use crate::blog::models::BlogId;
use crate::blog::models::UpdateBlogCommand;
use crate::blog::ports::BlogServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn update_blog(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(id): Path<String>,
    Json(body): Json<UpdateBlogRequest>,
) -> Result<ApiSuccess<BlogData>, ApiError> {
    let blog_id = BlogId::from_string(&id).map_err(BlogError::from)?;
    let command = body.try_into_command()?;

    state
        .blog_service
        .update_blog(&current_user.user_id, &blog_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref blog| ApiSuccess::new(StatusCode::OK, blog.into()))
}

/// HTTP request body for a partial blog update (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateBlogRequest {
    title: Option<String>,
    author: Option<String>,
    url: Option<String>,
    likes: Option<i32>,
}

impl UpdateBlogRequest {
    fn try_into_command(self) -> Result<UpdateBlogCommand, BlogError> {
        if matches!(&self.title, Some(title) if title.trim().is_empty()) {
            return Err(BlogError::EmptyTitle);
        }
        if matches!(&self.url, Some(url) if url.trim().is_empty()) {
            return Err(BlogError::EmptyUrl);
        }

        Ok(UpdateBlogCommand {
            title: self.title,
            author: self.author,
            url: self.url,
            likes: self.likes,
        })
    }
}

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::blog::models::Blog;
use crate::blog::models::CreateBlogCommand;
use crate::blog::ports::BlogServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn create_blog(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(body): Json<CreateBlogRequest>,
) -> Result<ApiSuccess<BlogData>, ApiError> {
    let command = CreateBlogCommand::new(body.title, body.author, body.url, body.likes)
        .map_err(ApiError::from)?;

    state
        .blog_service
        .create_blog(&current_user.user_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref blog| ApiSuccess::new(StatusCode::CREATED, blog.into()))
}

/// HTTP request body for creating a blog (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateBlogRequest {
    title: String,
    author: Option<String>,
    url: String,
    likes: Option<i32>,
}

/// Blog representation with the owner as an id reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogData {
    pub id: String,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i32,
    pub user: String,
}

impl From<&Blog> for BlogData {
    fn from(blog: &Blog) -> Self {
        Self {
            id: blog.id.to_string(),
            title: blog.title.clone(),
            author: blog.author.clone(),
            url: blog.url.clone(),
            likes: blog.likes,
            user: blog.owner.to_string(),
        }
    }
}

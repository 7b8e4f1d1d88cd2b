use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::OwnedBlog;
use crate::domain::user::models::UserWithBlogs;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<UserResponseData>>, ApiError> {
    state
        .user_service
        .list_users()
        .await
        .map_err(ApiError::from)
        .map(|users| {
            ApiSuccess::new(
                StatusCode::OK,
                users.iter().map(UserResponseData::from).collect(),
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponseData {
    pub id: String,
    pub username: String,
    pub name: Option<String>,
    pub blogs: Vec<OwnedBlogData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnedBlogData {
    pub id: String,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i32,
}

impl From<&UserWithBlogs> for UserResponseData {
    fn from(entry: &UserWithBlogs) -> Self {
        Self {
            id: entry.user.id.to_string(),
            username: entry.user.username.as_str().to_string(),
            name: entry.user.name.clone(),
            blogs: entry.blogs.iter().map(OwnedBlogData::from).collect(),
        }
    }
}

impl From<&OwnedBlog> for OwnedBlogData {
    fn from(blog: &OwnedBlog) -> Self {
        Self {
            id: blog.id.to_string(),
            title: blog.title.clone(),
            author: blog.author.clone(),
            url: blog.url.clone(),
            likes: blog.likes,
        }
    }
}

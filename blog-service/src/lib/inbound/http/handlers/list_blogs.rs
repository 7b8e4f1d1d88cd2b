use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::blog::models::BlogWithOwner;
use crate::blog::models::OwnerProfile;
use crate::blog::ports::BlogServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn list_blogs(
    State(state): State<AppState>,
    _current_user: CurrentUser,
) -> Result<ApiSuccess<Vec<BlogWithOwnerData>>, ApiError> {
    state
        .blog_service
        .list_blogs()
        .await
        .map_err(ApiError::from)
        .map(|blogs| {
            ApiSuccess::new(
                StatusCode::OK,
                blogs.iter().map(BlogWithOwnerData::from).collect(),
            )
        })
}

/// Blog representation with the owner embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogWithOwnerData {
    pub id: String,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i32,
    pub user: OwnerData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnerData {
    pub id: String,
    pub username: String,
    pub name: Option<String>,
}

impl From<&BlogWithOwner> for BlogWithOwnerData {
    fn from(entry: &BlogWithOwner) -> Self {
        Self {
            id: entry.blog.id.to_string(),
            title: entry.blog.title.clone(),
            author: entry.blog.author.clone(),
            url: entry.blog.url.clone(),
            likes: entry.blog.likes,
            user: (&entry.owner).into(),
        }
    }
}

impl From<&OwnerProfile> for OwnerData {
    fn from(owner: &OwnerProfile) -> Self {
        Self {
            id: owner.id.to_string(),
            username: owner.username.clone(),
            name: owner.name.clone(),
        }
    }
}

use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::blog::errors::BlogError;
use crate::blog::models::BlogId;
use crate::blog::models::CommentWithAuthor;
use crate::blog::ports::BlogServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_comments(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<Vec<CommentWithAuthorData>>, ApiError> {
    let blog_id = BlogId::from_string(&id).map_err(BlogError::from)?;

    state
        .blog_service
        .list_comments(&blog_id)
        .await
        .map_err(ApiError::from)
        .map(|comments| {
            ApiSuccess::new(
                StatusCode::OK,
                comments.iter().map(CommentWithAuthorData::from).collect(),
            )
        })
}

/// Comment representation with the commenter's username embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentWithAuthorData {
    pub id: String,
    pub content: String,
    pub user: CommenterData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommenterData {
    pub id: String,
    pub username: String,
}

impl From<&CommentWithAuthor> for CommentWithAuthorData {
    fn from(entry: &CommentWithAuthor) -> Self {
        Self {
            id: entry.comment.id.to_string(),
            content: entry.comment.content.clone(),
            user: CommenterData {
                id: entry.comment.author.to_string(),
                username: entry.author_username.clone(),
            },
        }
    }
}

use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::blog::errors::BlogError;
use crate::blog::models::BlogId;
use crate::blog::models::Comment;
use crate::blog::models::CreateCommentCommand;
use crate::blog::ports::BlogServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn create_comment(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(id): Path<String>,
    Json(body): Json<CreateCommentRequest>,
) -> Result<ApiSuccess<CommentData>, ApiError> {
    let blog_id = BlogId::from_string(&id).map_err(BlogError::from)?;
    let command = CreateCommentCommand::new(body.content).map_err(ApiError::from)?;

    state
        .blog_service
        .add_comment(&current_user.user_id, &blog_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref comment| ApiSuccess::new(StatusCode::CREATED, comment.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateCommentRequest {
    content: String,
}

/// Comment representation with author and blog as id references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentData {
    pub id: String,
    pub content: String,
    pub user: String,
    pub blog: String,
}

impl From<&Comment> for CommentData {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            content: comment.content.clone(),
            user: comment.author.to_string(),
            blog: comment.blog.to_string(),
        }
    }
}

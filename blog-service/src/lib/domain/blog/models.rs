use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::blog::errors::BlogError;
use crate::blog::errors::BlogIdError;
use crate::user::models::UserId;

/// Blog aggregate entity.
///
/// Owned by the user referenced by `owner`; only that user may update or
/// delete it. The owner's post list is the foreign-key relation itself, so
/// creating a blog and registering it with its owner is one atomic write.
#[derive(Debug, Clone)]
pub struct Blog {
    pub id: BlogId,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i32,
    pub owner: UserId,
    pub created_at: DateTime<Utc>,
}

/// Blog unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlogId(pub Uuid);

impl BlogId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a blog ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, BlogIdError> {
        Uuid::parse_str(s)
            .map(BlogId)
            .map_err(|e| BlogIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for BlogId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Comment on a blog, authored by an authenticated user.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub content: String,
    pub author: UserId,
    pub blog: BlogId,
    pub created_at: DateTime<Utc>,
}

/// Comment unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(pub Uuid);

impl CommentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CommentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Minimal owner details embedded in blog listings.
#[derive(Debug, Clone)]
pub struct OwnerProfile {
    pub id: UserId,
    pub username: String,
    pub name: Option<String>,
}

/// A blog joined with its owner, as returned by the blog listing.
#[derive(Debug, Clone)]
pub struct BlogWithOwner {
    pub blog: Blog,
    pub owner: OwnerProfile,
}

/// A comment joined with its author's username.
#[derive(Debug, Clone)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub author_username: String,
}

/// Command to create a new blog.
#[derive(Debug)]
pub struct CreateBlogCommand {
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i32,
}

impl CreateBlogCommand {
    /// Validate required fields; `likes` defaults to 0 when absent.
    ///
    /// # Errors
    /// * `EmptyTitle` - Title missing or blank
    /// * `EmptyUrl` - Url missing or blank
    pub fn new(
        title: String,
        author: Option<String>,
        url: String,
        likes: Option<i32>,
    ) -> Result<Self, BlogError> {
        if title.trim().is_empty() {
            return Err(BlogError::EmptyTitle);
        }
        if url.trim().is_empty() {
            return Err(BlogError::EmptyUrl);
        }
        Ok(Self {
            title,
            author,
            url,
            likes: likes.unwrap_or(0),
        })
    }
}

/// Command to update an existing blog with optional fields.
///
/// Only provided fields are changed.
#[derive(Debug, Default)]
pub struct UpdateBlogCommand {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i32>,
}

/// Command to create a comment on a blog.
#[derive(Debug)]
pub struct CreateCommentCommand {
    pub content: String,
}

impl CreateCommentCommand {
    /// # Errors
    /// * `EmptyContent` - Content missing or blank
    pub fn new(content: String) -> Result<Self, BlogError> {
        if content.trim().is_empty() {
            return Err(BlogError::EmptyContent);
        }
        Ok(Self { content })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_blog_command_defaults_likes() {
        let command = CreateBlogCommand::new(
            "On Testing".to_string(),
            None,
            "http://example.com".to_string(),
            None,
        )
        .unwrap();
        assert_eq!(command.likes, 0);
    }

    #[test]
    fn test_create_blog_command_requires_title() {
        let result = CreateBlogCommand::new(
            "  ".to_string(),
            None,
            "http://example.com".to_string(),
            None,
        );
        assert!(matches!(result, Err(BlogError::EmptyTitle)));
    }

    #[test]
    fn test_create_blog_command_requires_url() {
        let result = CreateBlogCommand::new("On Testing".to_string(), None, "".to_string(), None);
        assert!(matches!(result, Err(BlogError::EmptyUrl)));
    }

    #[test]
    fn test_create_comment_command_requires_content() {
        let result = CreateCommentCommand::new("".to_string());
        assert!(matches!(result, Err(BlogError::EmptyContent)));
    }
}

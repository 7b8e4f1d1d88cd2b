use async_trait::async_trait;

use crate::blog::errors::BlogError;
use crate::blog::models::Blog;
use crate::blog::models::BlogId;
use crate::blog::models::BlogWithOwner;
use crate::blog::models::Comment;
use crate::blog::models::CommentWithAuthor;
use crate::blog::models::CreateBlogCommand;
use crate::blog::models::CreateCommentCommand;
use crate::blog::models::UpdateBlogCommand;
use crate::user::models::UserId;

/// Port for blog domain service operations.
///
/// Every mutation takes the verified caller explicitly; authorization is a
/// precondition checked here, not in handlers.
#[async_trait]
pub trait BlogServicePort: Send + Sync + 'static {
    /// Create a new blog owned by the caller.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_blog(
        &self,
        owner: &UserId,
        command: CreateBlogCommand,
    ) -> Result<Blog, BlogError>;

    /// Retrieve all blogs with their owners embedded.
    async fn list_blogs(&self) -> Result<Vec<BlogWithOwner>, BlogError>;

    /// Retrieve a single blog.
    ///
    /// # Errors
    /// * `NotFound` - Blog does not exist
    async fn get_blog(&self, id: &BlogId) -> Result<Blog, BlogError>;

    /// Update a blog's fields. Owner only.
    ///
    /// # Errors
    /// * `NotFound` - Blog does not exist
    /// * `NotBlogOwner` - Caller does not own the blog
    async fn update_blog(
        &self,
        caller: &UserId,
        id: &BlogId,
        command: UpdateBlogCommand,
    ) -> Result<Blog, BlogError>;

    /// Delete a blog. Owner only; a rejected delete changes nothing.
    ///
    /// # Errors
    /// * `NotFound` - Blog does not exist
    /// * `NotBlogOwner` - Caller does not own the blog
    async fn delete_blog(&self, caller: &UserId, id: &BlogId) -> Result<(), BlogError>;

    /// Append a comment to an existing blog.
    ///
    /// # Errors
    /// * `NotFound` - Blog does not exist
    async fn add_comment(
        &self,
        author: &UserId,
        blog_id: &BlogId,
        command: CreateCommentCommand,
    ) -> Result<Comment, BlogError>;

    /// Retrieve a blog's comments in creation order, authors embedded.
    ///
    /// # Errors
    /// * `NotFound` - Blog does not exist
    async fn list_comments(&self, blog_id: &BlogId) -> Result<Vec<CommentWithAuthor>, BlogError>;
}

/// Persistence operations for blogs and their comments.
#[async_trait]
pub trait BlogRepository: Send + Sync + 'static {
    /// Persist a new blog.
    async fn create(&self, blog: Blog) -> Result<Blog, BlogError>;

    /// Retrieve a blog by identifier, or `None` if absent.
    async fn find_by_id(&self, id: &BlogId) -> Result<Option<Blog>, BlogError>;

    /// Retrieve all blogs joined with their owners.
    async fn list_all_with_owner(&self) -> Result<Vec<BlogWithOwner>, BlogError>;

    /// Update an existing blog.
    ///
    /// # Errors
    /// * `NotFound` - Blog does not exist
    async fn update(&self, blog: Blog) -> Result<Blog, BlogError>;

    /// Remove a blog and its comments.
    ///
    /// # Errors
    /// * `NotFound` - Blog does not exist
    async fn delete(&self, id: &BlogId) -> Result<(), BlogError>;

    /// Persist a new comment.
    async fn create_comment(&self, comment: Comment) -> Result<Comment, BlogError>;

    /// Retrieve a blog's comments in creation order, joined with authors.
    async fn find_comments_with_author(
        &self,
        blog_id: &BlogId,
    ) -> Result<Vec<CommentWithAuthor>, BlogError>;
}

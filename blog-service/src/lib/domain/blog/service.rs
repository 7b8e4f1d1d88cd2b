use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::blog::errors::BlogError;
use crate::blog::models::Blog;
use crate::blog::models::BlogId;
use crate::blog::models::BlogWithOwner;
use crate::blog::models::Comment;
use crate::blog::models::CommentId;
use crate::blog::models::CommentWithAuthor;
use crate::blog::models::CreateBlogCommand;
use crate::blog::models::CreateCommentCommand;
use crate::blog::models::UpdateBlogCommand;
use crate::blog::ports::BlogRepository;
use crate::blog::ports::BlogServicePort;
use crate::user::models::UserId;

/// Domain service implementation for blog operations.
///
/// Ownership checks happen here, once per mutation, against the verified
/// caller handed in by the HTTP layer.
pub struct BlogService<BR>
where
    BR: BlogRepository,
{
    repository: Arc<BR>,
}

impl<BR> BlogService<BR>
where
    BR: BlogRepository,
{
    pub fn new(repository: Arc<BR>) -> Self {
        Self { repository }
    }

    async fn owned_blog(&self, caller: &UserId, id: &BlogId) -> Result<Blog, BlogError> {
        let blog = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(BlogError::NotFound(id.to_string()))?;

        if blog.owner != *caller {
            return Err(BlogError::NotBlogOwner);
        }

        Ok(blog)
    }
}

#[async_trait]
impl<BR> BlogServicePort for BlogService<BR>
where
    BR: BlogRepository,
{
    async fn create_blog(
        &self,
        owner: &UserId,
        command: CreateBlogCommand,
    ) -> Result<Blog, BlogError> {
        let blog = Blog {
            id: BlogId::new(),
            title: command.title,
            author: command.author,
            url: command.url,
            likes: command.likes,
            owner: *owner,
            created_at: Utc::now(),
        };

        self.repository.create(blog).await
    }

    async fn list_blogs(&self) -> Result<Vec<BlogWithOwner>, BlogError> {
        self.repository.list_all_with_owner().await
    }

    async fn get_blog(&self, id: &BlogId) -> Result<Blog, BlogError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(BlogError::NotFound(id.to_string()))
    }

    async fn update_blog(
        &self,
        caller: &UserId,
        id: &BlogId,
        command: UpdateBlogCommand,
    ) -> Result<Blog, BlogError> {
        let mut blog = self.owned_blog(caller, id).await?;

        if let Some(title) = command.title {
            blog.title = title;
        }
        if let Some(author) = command.author {
            blog.author = Some(author);
        }
        if let Some(url) = command.url {
            blog.url = url;
        }
        if let Some(likes) = command.likes {
            blog.likes = likes;
        }

        self.repository.update(blog).await
    }

    async fn delete_blog(&self, caller: &UserId, id: &BlogId) -> Result<(), BlogError> {
        self.owned_blog(caller, id).await?;
        self.repository.delete(id).await
    }

    async fn add_comment(
        &self,
        author: &UserId,
        blog_id: &BlogId,
        command: CreateCommentCommand,
    ) -> Result<Comment, BlogError> {
        let blog = self
            .repository
            .find_by_id(blog_id)
            .await?
            .ok_or(BlogError::NotFound(blog_id.to_string()))?;

        let comment = Comment {
            id: CommentId::new(),
            content: command.content,
            author: *author,
            blog: blog.id,
            created_at: Utc::now(),
        };

        self.repository.create_comment(comment).await
    }

    async fn list_comments(&self, blog_id: &BlogId) -> Result<Vec<CommentWithAuthor>, BlogError> {
        self.repository
            .find_by_id(blog_id)
            .await?
            .ok_or(BlogError::NotFound(blog_id.to_string()))?;

        self.repository.find_comments_with_author(blog_id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;

    mock! {
        pub TestBlogRepository {}

        #[async_trait]
        impl BlogRepository for TestBlogRepository {
            async fn create(&self, blog: Blog) -> Result<Blog, BlogError>;
            async fn find_by_id(&self, id: &BlogId) -> Result<Option<Blog>, BlogError>;
            async fn list_all_with_owner(&self) -> Result<Vec<BlogWithOwner>, BlogError>;
            async fn update(&self, blog: Blog) -> Result<Blog, BlogError>;
            async fn delete(&self, id: &BlogId) -> Result<(), BlogError>;
            async fn create_comment(&self, comment: Comment) -> Result<Comment, BlogError>;
            async fn find_comments_with_author(&self, blog_id: &BlogId) -> Result<Vec<CommentWithAuthor>, BlogError>;
        }
    }

    fn sample_blog(owner: UserId) -> Blog {
        Blog {
            id: BlogId::new(),
            title: "On Testing".to_string(),
            author: None,
            url: "http://example.com".to_string(),
            likes: 0,
            owner,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_blog_sets_owner_and_default_likes() {
        let mut repository = MockTestBlogRepository::new();

        let owner = UserId::new();
        repository
            .expect_create()
            .withf(move |blog| blog.owner == owner && blog.likes == 0)
            .times(1)
            .returning(|blog| Ok(blog));

        let service = BlogService::new(Arc::new(repository));

        let command = CreateBlogCommand::new(
            "On Testing".to_string(),
            Some("alice".to_string()),
            "http://example.com".to_string(),
            None,
        )
        .unwrap();

        let blog = service.create_blog(&owner, command).await.unwrap();
        assert_eq!(blog.owner, owner);
        assert_eq!(blog.likes, 0);
    }

    #[tokio::test]
    async fn test_delete_blog_as_owner() {
        let mut repository = MockTestBlogRepository::new();

        let owner = UserId::new();
        let blog = sample_blog(owner);
        let blog_id = blog.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(blog.clone())));
        repository
            .expect_delete()
            .withf(move |id| *id == blog_id)
            .times(1)
            .returning(|_| Ok(()));

        let service = BlogService::new(Arc::new(repository));

        assert!(service.delete_blog(&owner, &blog_id).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_blog_as_non_owner_changes_nothing() {
        let mut repository = MockTestBlogRepository::new();

        let blog = sample_blog(UserId::new());
        let blog_id = blog.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(blog.clone())));
        repository.expect_delete().times(0);

        let service = BlogService::new(Arc::new(repository));

        let stranger = UserId::new();
        let result = service.delete_blog(&stranger, &blog_id).await;
        assert!(matches!(result, Err(BlogError::NotBlogOwner)));
    }

    #[tokio::test]
    async fn test_update_blog_requires_ownership() {
        let mut repository = MockTestBlogRepository::new();

        let blog = sample_blog(UserId::new());
        let blog_id = blog.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(blog.clone())));
        repository.expect_update().times(0);

        let service = BlogService::new(Arc::new(repository));

        let command = UpdateBlogCommand {
            likes: Some(7),
            ..Default::default()
        };

        let result = service.update_blog(&UserId::new(), &blog_id, command).await;
        assert!(matches!(result, Err(BlogError::NotBlogOwner)));
    }

    #[tokio::test]
    async fn test_update_blog_applies_partial_fields() {
        let mut repository = MockTestBlogRepository::new();

        let owner = UserId::new();
        let blog = sample_blog(owner);
        let blog_id = blog.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(blog.clone())));
        repository
            .expect_update()
            .withf(|blog| blog.likes == 7 && blog.title == "On Testing")
            .times(1)
            .returning(|blog| Ok(blog));

        let service = BlogService::new(Arc::new(repository));

        let command = UpdateBlogCommand {
            likes: Some(7),
            ..Default::default()
        };

        let updated = service.update_blog(&owner, &blog_id, command).await.unwrap();
        assert_eq!(updated.likes, 7);
    }

    #[tokio::test]
    async fn test_add_comment_to_missing_blog() {
        let mut repository = MockTestBlogRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_create_comment().times(0);

        let service = BlogService::new(Arc::new(repository));

        let command = CreateCommentCommand::new("nice post".to_string()).unwrap();
        let result = service
            .add_comment(&UserId::new(), &BlogId::new(), command)
            .await;
        assert!(matches!(result, Err(BlogError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_add_comment_success() {
        let mut repository = MockTestBlogRepository::new();

        let author = UserId::new();
        let blog = sample_blog(UserId::new());
        let blog_id = blog.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(blog.clone())));
        repository
            .expect_create_comment()
            .withf(move |comment| {
                comment.author == author && comment.blog == blog_id && comment.content == "nice post"
            })
            .times(1)
            .returning(|comment| Ok(comment));

        let service = BlogService::new(Arc::new(repository));

        let command = CreateCommentCommand::new("nice post".to_string()).unwrap();
        let comment = service.add_comment(&author, &blog_id, command).await.unwrap();
        assert_eq!(comment.content, "nice post");
    }
}

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::Blog;
use crate::domain::blog::models::BlogId;
use crate::domain::blog::models::BlogWithOwner;
use crate::domain::blog::models::Comment;
use crate::domain::blog::models::CommentId;
use crate::domain::blog::models::CommentWithAuthor;
use crate::domain::blog::models::OwnerProfile;
use crate::domain::blog::ports::BlogRepository;
use crate::domain::user::models::UserId;

pub struct PostgresBlogRepository {
    pool: PgPool,
}

impl PostgresBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BlogRow {
    id: Uuid,
    title: String,
    author: Option<String>,
    url: String,
    likes: i32,
    user_id: Uuid,
    created_at: DateTime<Utc>,
}

impl From<BlogRow> for Blog {
    fn from(row: BlogRow) -> Self {
        Blog {
            id: BlogId(row.id),
            title: row.title,
            author: row.author,
            url: row.url,
            likes: row.likes,
            owner: UserId(row.user_id),
            created_at: row.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct BlogOwnerRow {
    id: Uuid,
    title: String,
    author: Option<String>,
    url: String,
    likes: i32,
    user_id: Uuid,
    created_at: DateTime<Utc>,
    username: String,
    owner_name: Option<String>,
}

impl From<BlogOwnerRow> for BlogWithOwner {
    fn from(row: BlogOwnerRow) -> Self {
        BlogWithOwner {
            blog: Blog {
                id: BlogId(row.id),
                title: row.title,
                author: row.author,
                url: row.url,
                likes: row.likes,
                owner: UserId(row.user_id),
                created_at: row.created_at,
            },
            owner: OwnerProfile {
                id: UserId(row.user_id),
                username: row.username,
                name: row.owner_name,
            },
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: Uuid,
    content: String,
    user_id: Uuid,
    blog_id: Uuid,
    created_at: DateTime<Utc>,
    username: String,
}

impl From<CommentRow> for CommentWithAuthor {
    fn from(row: CommentRow) -> Self {
        CommentWithAuthor {
            comment: Comment {
                id: CommentId(row.id),
                content: row.content,
                author: UserId(row.user_id),
                blog: BlogId(row.blog_id),
                created_at: row.created_at,
            },
            author_username: row.username,
        }
    }
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn create(&self, blog: Blog) -> Result<Blog, BlogError> {
        sqlx::query(
            r#"
            INSERT INTO blogs (id, title, author, url, likes, user_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(blog.id.0)
        .bind(&blog.title)
        .bind(blog.author.as_deref())
        .bind(&blog.url)
        .bind(blog.likes)
        .bind(blog.owner.0)
        .bind(blog.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| BlogError::DatabaseError(e.to_string()))?;

        Ok(blog)
    }

    async fn find_by_id(&self, id: &BlogId) -> Result<Option<Blog>, BlogError> {
        let row: Option<BlogRow> = sqlx::query_as(
            r#"
            SELECT id, title, author, url, likes, user_id, created_at
            FROM blogs
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| BlogError::DatabaseError(e.to_string()))?;

        Ok(row.map(Blog::from))
    }

    async fn list_all_with_owner(&self) -> Result<Vec<BlogWithOwner>, BlogError> {
        let rows: Vec<BlogOwnerRow> = sqlx::query_as(
            r#"
            SELECT b.id, b.title, b.author, b.url, b.likes, b.user_id, b.created_at,
                   u.username, u.name AS owner_name
            FROM blogs b
            JOIN users u ON u.id = b.user_id
            ORDER BY b.created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| BlogError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(BlogWithOwner::from).collect())
    }

    async fn update(&self, blog: Blog) -> Result<Blog, BlogError> {
        let result = sqlx::query(
            r#"
            UPDATE blogs
            SET title = $2, author = $3, url = $4, likes = $5
            WHERE id = $1
            "#,
        )
        .bind(blog.id.0)
        .bind(&blog.title)
        .bind(blog.author.as_deref())
        .bind(&blog.url)
        .bind(blog.likes)
        .execute(&self.pool)
        .await
        .map_err(|e| BlogError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(BlogError::NotFound(blog.id.to_string()));
        }

        Ok(blog)
    }

    async fn delete(&self, id: &BlogId) -> Result<(), BlogError> {
        // Comments go with the blog via ON DELETE CASCADE
        let result = sqlx::query(
            r#"
            DELETE FROM blogs
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| BlogError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(BlogError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn create_comment(&self, comment: Comment) -> Result<Comment, BlogError> {
        sqlx::query(
            r#"
            INSERT INTO comments (id, content, user_id, blog_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(comment.id.0)
        .bind(&comment.content)
        .bind(comment.author.0)
        .bind(comment.blog.0)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| BlogError::DatabaseError(e.to_string()))?;

        Ok(comment)
    }

    async fn find_comments_with_author(
        &self,
        blog_id: &BlogId,
    ) -> Result<Vec<CommentWithAuthor>, BlogError> {
        let rows: Vec<CommentRow> = sqlx::query_as(
            r#"
            SELECT c.id, c.content, c.user_id, c.blog_id, c.created_at, u.username
            FROM comments c
            JOIN users u ON u.id = c.user_id
            WHERE c.blog_id = $1
            ORDER BY c.created_at
            "#,
        )
        .bind(blog_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| BlogError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(CommentWithAuthor::from).collect())
    }
}

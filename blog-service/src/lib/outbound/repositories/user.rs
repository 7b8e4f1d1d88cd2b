use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::OwnedBlog;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::models::UserWithBlogs;
use crate::domain::user::ports::UserRepository;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    name: Option<String>,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> Result<User, UserError> {
        Ok(User {
            id: UserId(self.id),
            username: Username::new(self.username)?,
            name: self.name,
            password_hash: self.password_hash,
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct UserBlogRow {
    id: Uuid,
    username: String,
    name: Option<String>,
    password_hash: String,
    created_at: DateTime<Utc>,
    blog_id: Option<Uuid>,
    title: Option<String>,
    author: Option<String>,
    url: Option<String>,
    likes: Option<i32>,
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, username, name, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.id.0)
        .bind(user.username.as_str())
        .bind(user.name.as_deref())
        .bind(&user.password_hash)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return UserError::UsernameAlreadyExists(user.username.as_str().to_string());
                }
            }
            UserError::DatabaseError(e.to_string())
        })?;

        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, username, name, password_hash, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        row.map(UserRow::into_user).transpose()
    }

    async fn list_all_with_blogs(&self) -> Result<Vec<UserWithBlogs>, UserError> {
        let rows: Vec<UserBlogRow> = sqlx::query_as(
            r#"
            SELECT u.id, u.username, u.name, u.password_hash, u.created_at,
                   b.id AS blog_id, b.title, b.author, b.url, b.likes
            FROM users u
            LEFT JOIN blogs b ON b.user_id = u.id
            ORDER BY u.created_at, u.id, b.created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        // Rows arrive grouped per user; fold each group into one entry
        let mut users: Vec<UserWithBlogs> = Vec::new();
        for row in rows {
            let UserBlogRow {
                id,
                username,
                name,
                password_hash,
                created_at,
                blog_id,
                title,
                author,
                url,
                likes,
            } = row;

            let starts_new_user = users.last().map_or(true, |entry| entry.user.id.0 != id);
            if starts_new_user {
                users.push(UserWithBlogs {
                    user: User {
                        id: UserId(id),
                        username: Username::new(username)?,
                        name,
                        password_hash,
                        created_at,
                    },
                    blogs: Vec::new(),
                });
            }

            if let Some(entry) = users.last_mut() {
                if let (Some(blog_id), Some(title), Some(url), Some(likes)) =
                    (blog_id, title, url, likes)
                {
                    entry.blogs.push(OwnedBlog {
                        id: blog_id,
                        title,
                        author,
                        url,
                        likes,
                    });
                }
            }
        }

        Ok(users)
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        let result = sqlx::query(
            r#"
            DELETE FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(id.to_string()));
        }

        Ok(())
    }
}

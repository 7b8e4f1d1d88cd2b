use thiserror::Error;

/// Error for BlogId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BlogIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all blog and comment operations
#[derive(Debug, Clone, Error)]
pub enum BlogError {
    #[error("Invalid blog ID: {0}")]
    InvalidBlogId(#[from] BlogIdError),

    #[error("Title is required")]
    EmptyTitle,

    #[error("Url is required")]
    EmptyUrl,

    #[error("Content is required")]
    EmptyContent,

    #[error("Blog not found: {0}")]
    NotFound(String),

    /// Caller attempted a mutation reserved for the blog's owner.
    #[error("Invalid operation")]
    NotBlogOwner,

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

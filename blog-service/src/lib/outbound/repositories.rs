pub mod blog;
pub mod user;

pub use blog::PostgresBlogRepository;
pub use user::PostgresUserRepository;

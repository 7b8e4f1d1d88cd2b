use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::CredentialError;
use chrono::Utc;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::models::UserWithBlogs;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Registration is the only place a plaintext password exists: the service
/// exchanges it for a hash through the authenticator's policy-validated
/// path before constructing the persisted entity.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        let password_hash =
            self.authenticator
                .validate_and_hash(&command.password)
                .map_err(|e| match e {
                    CredentialError::Policy(violation) => UserError::PasswordPolicy(violation),
                    CredentialError::Password(err) => {
                        UserError::Unknown(format!("Password hashing failed: {}", err))
                    }
                })?;

        let user = User {
            id: UserId::new(),
            username: command.username,
            name: command.name,
            password_hash,
            created_at: Utc::now(),
        };

        self.repository.create(user).await
    }

    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or(UserError::NotFoundByUsername(username.to_string()))
    }

    async fn list_users(&self) -> Result<Vec<UserWithBlogs>, UserError> {
        self.repository.list_all_with_blogs().await
    }

    async fn delete_user(&self, caller: &UserId, id: &UserId) -> Result<(), UserError> {
        if caller != id {
            return Err(UserError::NotAccountOwner);
        }

        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
            async fn list_all_with_blogs(&self) -> Result<Vec<UserWithBlogs>, UserError>;
            async fn delete(&self, id: &UserId) -> Result<(), UserError>;
        }
    }

    fn service(repository: MockTestUserRepository) -> UserService<MockTestUserRepository> {
        UserService::new(
            Arc::new(repository),
            Arc::new(Authenticator::new(SECRET, 3600)),
        )
    }

    #[tokio::test]
    async fn test_create_user_hashes_password() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_create()
            .withf(|user| {
                user.username.as_str() == "alice" && user.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|user| Ok(user));

        let service = service(repository);

        let command = CreateUserCommand::new(
            Username::new("alice".to_string()).unwrap(),
            Some("Alice".to_string()),
            "Passw0rd1".to_string(),
        );

        let user = service.create_user(command).await.unwrap();
        assert_eq!(user.username.as_str(), "alice");
        assert!(user.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_create_user_rejects_weak_password() {
        for weak in ["short1A", "nouppercase1", "NOLOWERCASE1", "NoDigitsHere"] {
            let mut repository = MockTestUserRepository::new();
            // Nothing may be persisted when the policy rejects
            repository.expect_create().times(0);

            let service = service(repository);

            let command = CreateUserCommand::new(
                Username::new("alice".to_string()).unwrap(),
                None,
                weak.to_string(),
            );

            let result = service.create_user(command).await;
            assert!(
                matches!(result, Err(UserError::PasswordPolicy(_))),
                "expected policy rejection for {weak:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_create_user_duplicate_username() {
        let mut repository = MockTestUserRepository::new();

        repository.expect_create().times(1).returning(|user| {
            Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ))
        });

        let service = service(repository);

        let command = CreateUserCommand::new(
            Username::new("alice".to_string()).unwrap(),
            None,
            "Passw0rd1".to_string(),
        );

        let result = service.create_user(command).await;
        assert!(matches!(
            result,
            Err(UserError::UsernameAlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn test_get_user_by_username_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let service = service(repository);

        let username = Username::new("ghost".to_string()).unwrap();
        let result = service.get_user_by_username(&username).await;
        assert!(matches!(result, Err(UserError::NotFoundByUsername(_))));
    }

    #[tokio::test]
    async fn test_delete_user_self() {
        let mut repository = MockTestUserRepository::new();

        let user_id = UserId::new();
        repository
            .expect_delete()
            .withf(move |id| *id == user_id)
            .times(1)
            .returning(|_| Ok(()));

        let service = service(repository);

        assert!(service.delete_user(&user_id, &user_id).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_user_other_account_rejected() {
        let mut repository = MockTestUserRepository::new();
        repository.expect_delete().times(0);

        let service = service(repository);

        let result = service.delete_user(&UserId::new(), &UserId::new()).await;
        assert!(matches!(result, Err(UserError::NotAccountOwner)));
    }
}

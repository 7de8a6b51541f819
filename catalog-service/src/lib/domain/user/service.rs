use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserChanges;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
    // Checked against when the username is unknown, so both login failures
    // cost one Argon2 verification.
    dummy_hash: String,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    ///
    /// # Returns
    /// Configured user service instance
    pub fn new(repository: Arc<UR>) -> Self {
        let password_hasher = auth::PasswordHasher::new();
        let dummy_hash = password_hasher
            .hash("catalog-service-unknown-user")
            .unwrap_or_default();

        Self {
            repository,
            password_hasher,
            dummy_hash,
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        if self.repository.username_taken(&command.username).await? {
            tracing::debug!(username = %command.username, "Username already taken");
            return Err(UserError::UsernameAlreadyExists(
                command.username.to_string(),
            ));
        }

        let password_hash = self.password_hasher.hash(&command.password)?;

        let user = NewUser {
            username: command.username,
            password_hash,
            created_by: command.created_by,
            modified_by: command.modified_by,
        };

        self.repository
            .create_if_absent(&user)
            .await?
            .ok_or_else(|| UserError::UsernameAlreadyExists(user.username.to_string()))
    }

    async fn get_user(&self, id: UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| UserError::NotFoundByUsername(username.to_string()))
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }

    async fn update_user(
        &self,
        id: UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        if self
            .repository
            .username_taken_by_other(&command.username, id)
            .await?
        {
            tracing::debug!(user_id = %id, username = %command.username, "Username already taken");
            return Err(UserError::UsernameAlreadyExists(
                command.username.to_string(),
            ));
        }

        let changes = UserChanges {
            username: command.username,
            password_hash: self.password_hasher.hash(&command.password)?,
            modified_by: command.modified_by,
        };

        self.repository
            .update(id, &changes)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    async fn delete_user(&self, id: UserId) -> Result<(), UserError> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(UserError::NotFound(id))
        }
    }

    async fn authenticate(&self, username: &str, password: &str) -> Result<Username, UserError> {
        let Ok(username) = Username::new(username.to_string()) else {
            return Err(UserError::InvalidCredentials);
        };

        let Some(user) = self.repository.find_by_username(&username).await? else {
            tracing::debug!(username = %username, "Login for unknown user");
            self.password_hasher.verify(password, &self.dummy_hash);
            return Err(UserError::InvalidCredentials);
        };

        if !self.password_hasher.verify(password, &user.password_hash) {
            tracing::debug!(user_id = %user.id, "Login with wrong password");
            return Err(UserError::InvalidCredentials);
        }

        Ok(user.username)
    }
}

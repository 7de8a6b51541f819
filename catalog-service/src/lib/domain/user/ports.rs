use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserChanges;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Create new user, hashing the supplied password.
    ///
    /// # Arguments
    /// * `command` - Validated command containing username and plaintext password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken, ignoring case
    /// * `PasswordHashing` - Hashing the password failed
    /// * `DatabaseError` - Database operation failed
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError>;

    /// Retrieve user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_user(&self, id: UserId) -> Result<User, UserError>;

    /// Retrieve user by exact username.
    ///
    /// # Errors
    /// * `NotFoundByUsername` - No user with this username
    /// * `DatabaseError` - Database operation failed
    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError>;

    /// Retrieve all users ordered by identifier.
    async fn list_users(&self) -> Result<Vec<User>, UserError>;

    /// Replace username and password of an existing user.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Another user holds the username, ignoring case
    /// * `NotFound` - No row was affected
    /// * `PasswordHashing` - Hashing the password failed
    /// * `DatabaseError` - Database operation failed
    async fn update_user(&self, id: UserId, command: UpdateUserCommand) -> Result<User, UserError>;

    /// Delete existing user.
    ///
    /// # Errors
    /// * `NotFound` - No row was affected
    /// * `DatabaseError` - Database operation failed
    async fn delete_user(&self, id: UserId) -> Result<(), UserError>;

    /// Check a username and password pair.
    ///
    /// # Returns
    /// The authenticated username, to be embedded in a token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Malformed username, unknown user, or wrong password
    /// * `DatabaseError` - Database operation failed
    async fn authenticate(&self, username: &str, password: &str) -> Result<Username, UserError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Insert a user unless the username (ignoring case) is taken.
    ///
    /// # Returns
    /// The stored row, or None when the username was already taken
    async fn create_if_absent(&self, user: &NewUser) -> Result<Option<User>, UserError>;

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError>;

    /// Exact, case-sensitive lookup used for login.
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Whether any user holds the username, ignoring case.
    async fn username_taken(&self, username: &Username) -> Result<bool, UserError>;

    /// Whether a user other than `id` holds the username, ignoring case.
    async fn username_taken_by_other(
        &self,
        username: &Username,
        id: UserId,
    ) -> Result<bool, UserError>;

    async fn list_all(&self) -> Result<Vec<User>, UserError>;

    /// Overwrite username, password hash and modifier.
    ///
    /// # Returns
    /// The updated row, or None when no user has this identifier
    async fn update(&self, id: UserId, changes: &UserChanges) -> Result<Option<User>, UserError>;

    /// Remove a user.
    ///
    /// # Returns
    /// Whether a row was deleted
    async fn delete(&self, id: UserId) -> Result<bool, UserError>;
}

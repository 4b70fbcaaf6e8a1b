//! User service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{data::user::UserRepository, error::AppError, model::user::User};

/// Service providing read access to users.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all users.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Every user, ordered by username
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let user_repo = UserRepository::new(self.db);
        let users = user_repo.get_all().await?;
        Ok(users)
    }
}

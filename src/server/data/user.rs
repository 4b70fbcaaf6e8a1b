//! User data repository for database operations.
//!
//! Users are reference data: this API reads and checks them but never writes them.

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::User;

/// Repository providing read access to users.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all users ordered by username.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Every user projected to username, name and avatar URL
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let users = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Username)
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(User::from_entity).collect())
    }

    /// Checks whether a user with the given username exists.
    ///
    /// # Returns
    /// - `Ok(true)` - A user with that username exists
    /// - `Ok(false)` - No such user
    /// - `Err(DbErr)` - Database error during count query
    pub async fn exists(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}

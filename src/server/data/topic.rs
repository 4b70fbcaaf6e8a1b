//! Topic data repository.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

use crate::server::model::topic::Topic;

pub struct TopicRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TopicRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all topics ordered by slug.
    pub async fn get_all(&self) -> Result<Vec<Topic>, DbErr> {
        let topics = entity::prelude::Topic::find()
            .order_by_asc(entity::topic::Column::Slug)
            .all(self.db)
            .await?;

        Ok(topics.into_iter().map(Topic::from_entity).collect())
    }

    /// Checks whether a topic with the given slug exists.
    pub async fn exists(&self, slug: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Topic::find()
            .filter(entity::topic::Column::Slug.eq(slug))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}

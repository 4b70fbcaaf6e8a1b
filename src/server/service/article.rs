//! Article service for business logic.

use sea_orm::DatabaseConnection;

use crate::{
    model::article::UpdateArticleVotesDto,
    server::{
        data::{article::ArticleRepository, topic::TopicRepository, user::UserRepository},
        error::{validation::ValidationError, AppError},
        model::article::{Article, GetArticlesParam, VoteUpdate},
        service::validation::vote_delta,
    },
};

pub struct ArticleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a single article with its comment count.
    ///
    /// # Returns
    /// - `Ok(Article)` - The article
    /// - `Err(ValidationError::ArticleNotFound)` - No article with that ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_by_id(&self, article_id: i32) -> Result<Article, AppError> {
        let repo = ArticleRepository::new(self.db);

        repo.get_by_id(article_id)
            .await?
            .ok_or_else(|| ValidationError::ArticleNotFound.into())
    }

    /// Lists articles, optionally filtered by topic and/or author.
    ///
    /// A filter naming a topic or author that does not exist fails the whole request
    /// before any article is queried, so an unknown topic is distinguishable from a
    /// known topic with no articles.
    ///
    /// # Returns
    /// - `Ok(Vec<Article>)` - Matching articles in the requested order
    /// - `Err(ValidationError::TopicNotFound)` - Unknown `topic` filter
    /// - `Err(ValidationError::AuthorNotFound)` - Unknown `author` filter
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_all(&self, param: GetArticlesParam) -> Result<Vec<Article>, AppError> {
        if let Some(topic) = &param.topic {
            if !TopicRepository::new(self.db).exists(topic).await? {
                return Err(ValidationError::TopicNotFound.into());
            }
        }

        if let Some(author) = &param.author {
            if !UserRepository::new(self.db).exists(author).await? {
                return Err(ValidationError::AuthorNotFound.into());
            }
        }

        let repo = ArticleRepository::new(self.db);

        Ok(repo.get_all(&param).await?)
    }

    /// Applies a signed vote delta to an article.
    ///
    /// The body is validated before the article is looked up: a missing or
    /// non-integer `inc_votes` is reported even for an unknown article.
    ///
    /// # Returns
    /// - `Ok(Article)` - The article with its new vote count
    /// - `Err(ValidationError::MissingVotes | InvalidVotes)` - Bad request body
    /// - `Err(ValidationError::VotesOutOfRange)` - The new count would overflow
    /// - `Err(ValidationError::ArticleNotFound)` - No article with that ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update_votes(
        &self,
        article_id: i32,
        payload: UpdateArticleVotesDto,
    ) -> Result<Article, AppError> {
        let delta = vote_delta(payload.inc_votes.as_ref())?;

        let repo = ArticleRepository::new(self.db);

        match repo.increment_votes(article_id, delta).await? {
            VoteUpdate::Updated(article) => Ok(article),
            VoteUpdate::NotFound => Err(ValidationError::ArticleNotFound.into()),
            VoteUpdate::OutOfRange => Err(ValidationError::VotesOutOfRange.into()),
        }
    }
}

//! Shared helper utilities for factory methods.
//!
//! Provides ID generation and convenience methods for creating entities together with
//! the rows they reference.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique identifiers in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a topic, a user, and an article written by that user under that topic.
///
/// All entities are created with default values. Use the individual factories if you
/// need to customize specific entities.
///
/// # Returns
/// - `Ok((topic, user, article))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_article_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::topic::Model,
        entity::user::Model,
        entity::article::Model,
    ),
    DbErr,
> {
    let topic = crate::factory::topic::create_topic(db).await?;
    let user = crate::factory::user::create_user(db).await?;
    let article = crate::factory::article::create_article(db, &topic.slug, &user.username).await?;

    Ok((topic, user, article))
}

/// Creates an article with all dependencies plus one comment on it by the same user.
///
/// # Returns
/// - `Ok((user, article, comment))` - The author, the article and its comment
/// - `Err(DbErr)` - Database error during creation
pub async fn create_comment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::article::Model,
        entity::comment::Model,
    ),
    DbErr,
> {
    let (_topic, user, article) = create_article_with_dependencies(db).await?;
    let comment =
        crate::factory::comment::create_comment(db, article.article_id, &user.username).await?;

    Ok((user, article, comment))
}

//! Comment-count aggregation for article reads.
//!
//! Counts are computed in the same statement as the article read, using a
//! `LEFT JOIN comments ... GROUP BY articles.article_id`, so a listing costs a single
//! round trip regardless of how many articles it returns. Articles without comments
//! get a count of `0` because `COUNT` over the null side of the join is zero.

use sea_orm::{sea_query::SimpleExpr, ColumnTrait, JoinType, QuerySelect, RelationTrait, Select};

/// Name of the aggregated column, matching `ArticleWithCount::comment_count`.
pub const COMMENT_COUNT_ALIAS: &str = "comment_count";

/// Extends an article select with a `comment_count` column.
///
/// The returned select projects every article column plus the count and must be
/// decoded with `into_model::<ArticleWithCount>()`. Filters and orderings can still be
/// chained onto it.
pub fn with_comment_count(
    select: Select<entity::prelude::Article>,
) -> Select<entity::prelude::Article> {
    select
        .select_only()
        .columns([
            entity::article::Column::ArticleId,
            entity::article::Column::Title,
            entity::article::Column::Topic,
            entity::article::Column::Author,
            entity::article::Column::Body,
            entity::article::Column::CreatedAt,
            entity::article::Column::Votes,
            entity::article::Column::ArticleImgUrl,
        ])
        .column_as(comment_count_expr(), COMMENT_COUNT_ALIAS)
        .join(JoinType::LeftJoin, entity::article::Relation::Comment.def())
        .group_by(entity::article::Column::ArticleId)
}

/// `COUNT(comments.comment_id)`, usable both as a projection and as a sort key.
pub fn comment_count_expr() -> SimpleExpr {
    entity::comment::Column::CommentId.count()
}

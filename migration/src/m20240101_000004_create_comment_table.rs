use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240101_000002_create_user_table::Users, m20240101_000003_create_article_table::Articles,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comments::Table)
                    .if_not_exists()
                    .col(pk_auto(Comments::CommentId))
                    .col(integer(Comments::ArticleId))
                    .col(string(Comments::Author))
                    .col(text(Comments::Body))
                    .col(integer(Comments::Votes).default(0))
                    .col(
                        timestamp_with_time_zone(Comments::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_article_id")
                            .from(Comments::Table, Comments::ArticleId)
                            .to(Articles::Table, Articles::ArticleId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_author")
                            .from(Comments::Table, Comments::Author)
                            .to(Users::Table, Users::Username)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_comments_article_id")
                    .table(Comments::Table)
                    .col(Comments::ArticleId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Comments {
    Table,
    CommentId,
    ArticleId,
    Author,
    Body,
    Votes,
    CreatedAt,
}

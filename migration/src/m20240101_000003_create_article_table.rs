use sea_orm_migration::{prelude::*, schema::*};

use super::{m20240101_000001_create_topic_table::Topics, m20240101_000002_create_user_table::Users};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Articles::Table)
                    .if_not_exists()
                    .col(pk_auto(Articles::ArticleId))
                    .col(string(Articles::Title))
                    .col(string(Articles::Topic))
                    .col(string(Articles::Author))
                    .col(text(Articles::Body))
                    .col(
                        timestamp_with_time_zone(Articles::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(integer(Articles::Votes).default(0))
                    .col(string(Articles::ArticleImgUrl))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_articles_topic")
                            .from(Articles::Table, Articles::Topic)
                            .to(Topics::Table, Topics::Slug)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_articles_author")
                            .from(Articles::Table, Articles::Author)
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
                    .name("idx_articles_topic")
                    .table(Articles::Table)
                    .col(Articles::Topic)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Articles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Articles {
    Table,
    ArticleId,
    Title,
    Topic,
    Author,
    Body,
    CreatedAt,
    Votes,
    ArticleImgUrl,
}

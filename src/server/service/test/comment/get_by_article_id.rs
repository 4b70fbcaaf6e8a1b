use super::*;

/// Tests listing comments for an article without any.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list_for_article_without_comments() -> Result<(), AppError> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, article) = factory::helpers::create_article_with_dependencies(db).await?;

    let comments = CommentService::new(db)
        .get_by_article_id(article.article_id)
        .await?;

    assert!(comments.is_empty());

    Ok(())
}

/// Tests listing comments for an article that does not exist.
///
/// Expected: Err(ArticleNotFound)
#[tokio::test]
async fn fails_for_unknown_article() -> Result<(), AppError> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CommentService::new(db).get_by_article_id(9999).await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::ArticleNotFound))
    ));

    Ok(())
}

use super::*;

/// Tests fetching an existing article.
///
/// Expected: Ok with the article and its comment count
#[tokio::test]
async fn returns_existing_article() -> Result<(), AppError> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user, article) = factory::helpers::create_article_with_dependencies(db).await?;
    factory::create_comment(db, article.article_id, &user.username).await?;

    let fetched = ArticleService::new(db).get_by_id(article.article_id).await?;

    assert_eq!(fetched.article_id, article.article_id);
    assert_eq!(fetched.comment_count, 1);

    Ok(())
}

/// Tests fetching an article that does not exist.
///
/// Expected: Err(ArticleNotFound)
#[tokio::test]
async fn fails_for_unknown_article() -> Result<(), AppError> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ArticleService::new(db).get_by_id(9999).await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::ArticleNotFound))
    ));

    Ok(())
}

use super::*;

/// Tests that an existing topic without articles yields an empty list.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list_for_topic_without_articles() -> Result<(), AppError> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_article_with_dependencies(db).await?;
    let empty = factory::topic::create_topic_with_slug(db, "paper").await?;

    let articles = ArticleService::new(db)
        .get_all(GetArticlesParam {
            topic: Some(empty.slug),
            ..Default::default()
        })
        .await?;

    assert!(articles.is_empty());

    Ok(())
}

/// Tests filtering by a topic that does not exist.
///
/// Expected: Err(TopicNotFound)
#[tokio::test]
async fn fails_for_unknown_topic() -> Result<(), AppError> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_article_with_dependencies(db).await?;

    let result = ArticleService::new(db)
        .get_all(GetArticlesParam {
            topic: Some("not-a-topic".to_string()),
            ..Default::default()
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::TopicNotFound))
    ));

    Ok(())
}

/// Tests filtering by an author that does not exist.
///
/// Expected: Err(AuthorNotFound)
#[tokio::test]
async fn fails_for_unknown_author() -> Result<(), AppError> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_article_with_dependencies(db).await?;

    let result = ArticleService::new(db)
        .get_all(GetArticlesParam {
            author: Some("nobody".to_string()),
            ..Default::default()
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::AuthorNotFound))
    ));

    Ok(())
}

/// Tests that the topic is checked before the author.
///
/// Expected: Err(TopicNotFound) when both are unknown
#[tokio::test]
async fn reports_unknown_topic_before_unknown_author() -> Result<(), AppError> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ArticleService::new(db)
        .get_all(GetArticlesParam {
            topic: Some("not-a-topic".to_string()),
            author: Some("nobody".to_string()),
            ..Default::default()
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::TopicNotFound))
    ));

    Ok(())
}

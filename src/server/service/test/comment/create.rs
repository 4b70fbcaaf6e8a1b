use super::*;

/// Tests posting a valid comment.
///
/// Expected: Ok with the stored comment
#[tokio::test]
async fn creates_comment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user, article) = factory::helpers::create_article_with_dependencies(db).await?;

    let comment = CommentService::new(db)
        .create(
            article.article_id,
            payload(Some(&user.username), Some("Lobster pot")),
        )
        .await?;

    assert_eq!(comment.article_id, article.article_id);
    assert_eq!(comment.author, user.username);
    assert_eq!(comment.body, "Lobster pot");
    assert_eq!(comment.votes, 0);

    Ok(())
}

/// Tests that the article is checked before the payload fields.
///
/// Expected: Err(ArticleNotFound) for a payload missing its username
#[tokio::test]
async fn reports_unknown_article_before_missing_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CommentService::new(db)
        .create(9999, payload(None, Some("orphan")))
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::ArticleNotFound))
    ));

    Ok(())
}

/// Tests payloads with a missing or empty field.
///
/// Expected: Err(MissingFields) for each
#[tokio::test]
async fn fails_for_missing_or_empty_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user, article) = factory::helpers::create_article_with_dependencies(db).await?;
    let service = CommentService::new(db);

    for bad in [
        payload(None, Some("body")),
        payload(Some(&user.username), None),
        payload(Some(&user.username), Some("")),
        payload(Some(""), Some("body")),
    ] {
        let result = service.create(article.article_id, bad).await;

        assert!(matches!(
            result,
            Err(AppError::ValidationErr(ValidationError::MissingFields))
        ));
    }

    Ok(())
}

/// Tests that a missing field is reported before an unknown username.
///
/// Expected: Err(MissingFields) for an unknown username without a body
#[tokio::test]
async fn reports_missing_fields_before_unknown_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, article) = factory::helpers::create_article_with_dependencies(db).await?;

    let result = CommentService::new(db)
        .create(article.article_id, payload(Some("nobody"), None))
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::MissingFields))
    ));

    Ok(())
}

/// Tests posting as a user that does not exist.
///
/// Expected: Err(InvalidUsername) and no comment stored
#[tokio::test]
async fn fails_for_unknown_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, article) = factory::helpers::create_article_with_dependencies(db).await?;
    let service = CommentService::new(db);

    let result = service
        .create(article.article_id, payload(Some("nobody"), Some("hello")))
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::InvalidUsername))
    ));
    assert!(service
        .get_by_article_id(article.article_id)
        .await?
        .is_empty());

    Ok(())
}

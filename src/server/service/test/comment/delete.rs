use super::*;

/// Tests deleting an existing comment.
///
/// Expected: Ok and the comment is gone from the article's list
#[tokio::test]
async fn deletes_existing_comment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, article, comment) = factory::helpers::create_comment_with_dependencies(db).await?;
    let service = CommentService::new(db);

    service.delete(comment.comment_id).await?;

    assert!(service
        .get_by_article_id(article.article_id)
        .await?
        .is_empty());

    Ok(())
}

/// Tests deleting the same comment twice.
///
/// Expected: Err(CommentNotFound) on the second attempt
#[tokio::test]
async fn fails_when_comment_already_deleted() -> Result<(), AppError> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, comment) = factory::helpers::create_comment_with_dependencies(db).await?;
    let service = CommentService::new(db);

    service.delete(comment.comment_id).await?;
    let result = service.delete(comment.comment_id).await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::CommentNotFound))
    ));

    Ok(())
}

use super::*;

/// Tests deleting an existing comment.
///
/// Expected: Ok(true) and the comment no longer exists
#[tokio::test]
async fn deletes_existing_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, comment) = factory::helpers::create_comment_with_dependencies(db).await?;

    let repo = CommentRepository::new(db);

    assert!(repo.delete(comment.comment_id).await?);
    assert!(!repo.exists(comment.comment_id).await?);

    Ok(())
}

/// Tests deleting a comment that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);

    assert!(!repo.delete(9999).await?);

    Ok(())
}

/// Tests that deleting one comment leaves the article's other comments alone.
///
/// Expected: Ok(true) with the sibling comment still present
#[tokio::test]
async fn leaves_other_comments_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, article, doomed) = factory::helpers::create_comment_with_dependencies(db).await?;
    let kept = factory::create_comment(db, article.article_id, &user.username).await?;

    let repo = CommentRepository::new(db);
    repo.delete(doomed.comment_id).await?;

    let remaining = repo.get_by_article_id(article.article_id).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].comment_id, kept.comment_id);

    Ok(())
}

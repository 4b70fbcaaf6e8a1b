use super::*;

/// Tests fetching an article without comments.
///
/// Verifies that every column is returned and the comment count is zero rather
/// than missing.
///
/// Expected: Ok(Some) with comment_count 0
#[tokio::test]
async fn returns_article_with_zero_comment_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (topic, user, created) = factory::helpers::create_article_with_dependencies(db).await?;

    let repo = ArticleRepository::new(db);
    let article = repo.get_by_id(created.article_id).await?.unwrap();

    assert_eq!(article.article_id, created.article_id);
    assert_eq!(article.title, created.title);
    assert_eq!(article.topic, topic.slug);
    assert_eq!(article.author, user.username);
    assert_eq!(article.body, created.body);
    assert_eq!(article.votes, 0);
    assert_eq!(article.article_img_url, created.article_img_url);
    assert_eq!(article.comment_count, 0);

    Ok(())
}

/// Tests that the comment count reflects only the article's own comments.
///
/// Expected: Ok(Some) with comment_count 2
#[tokio::test]
async fn counts_comments_for_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (topic, user, article) = factory::helpers::create_article_with_dependencies(db).await?;
    let other = factory::create_article(db, &topic.slug, &user.username).await?;

    factory::create_comment(db, article.article_id, &user.username).await?;
    factory::create_comment(db, article.article_id, &user.username).await?;
    factory::create_comment(db, other.article_id, &user.username).await?;

    let repo = ArticleRepository::new(db);
    let fetched = repo.get_by_id(article.article_id).await?.unwrap();

    assert_eq!(fetched.comment_count, 2);

    Ok(())
}

/// Tests fetching an article ID that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArticleRepository::new(db);

    assert!(repo.get_by_id(9999).await?.is_none());

    Ok(())
}

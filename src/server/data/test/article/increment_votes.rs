use super::*;

/// Tests adding votes to an article.
///
/// Expected: Ok(Updated) with votes increased by the delta
#[tokio::test]
async fn increments_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let topic = factory::create_topic(db).await?;
    let user = factory::create_user(db).await?;
    let article = factory::article::ArticleFactory::new(db, &topic.slug, &user.username)
        .votes(100)
        .build()
        .await?;

    let repo = ArticleRepository::new(db);
    let VoteUpdate::Updated(updated) = repo.increment_votes(article.article_id, 1).await? else {
        panic!("expected the vote update to apply");
    };

    assert_eq!(updated.votes, 101);
    assert_eq!(updated.title, article.title);

    Ok(())
}

/// Tests that a negative delta may take the vote count below zero.
///
/// Expected: Ok(Updated) with a negative vote count
#[tokio::test]
async fn decrements_votes_below_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, article) = factory::helpers::create_article_with_dependencies(db).await?;

    let repo = ArticleRepository::new(db);
    let VoteUpdate::Updated(updated) = repo.increment_votes(article.article_id, -100).await?
    else {
        panic!("expected the vote update to apply");
    };

    assert_eq!(updated.votes, -100);

    Ok(())
}

/// Tests that successive increments accumulate.
///
/// Expected: Ok(Updated) with the sum of all deltas
#[tokio::test]
async fn accumulates_successive_increments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, article) = factory::helpers::create_article_with_dependencies(db).await?;

    let repo = ArticleRepository::new(db);
    repo.increment_votes(article.article_id, 5).await?;
    repo.increment_votes(article.article_id, -2).await?;
    let VoteUpdate::Updated(updated) = repo.increment_votes(article.article_id, 10).await? else {
        panic!("expected the vote update to apply");
    };

    assert_eq!(updated.votes, 13);

    Ok(())
}

/// Tests incrementing an article that does not exist.
///
/// Expected: Ok(NotFound)
#[tokio::test]
async fn returns_not_found_for_unknown_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArticleRepository::new(db);

    assert_eq!(repo.increment_votes(9999, 1).await?, VoteUpdate::NotFound);

    Ok(())
}

/// Tests that a delta pushing the count past `i32::MAX` is refused.
///
/// Expected: Ok(OutOfRange), the stored count unchanged and the article still readable
#[tokio::test]
async fn refuses_increment_past_upper_bound() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let topic = factory::create_topic(db).await?;
    let user = factory::create_user(db).await?;
    let article = factory::article::ArticleFactory::new(db, &topic.slug, &user.username)
        .votes(i32::MAX - 1)
        .build()
        .await?;

    let repo = ArticleRepository::new(db);

    let VoteUpdate::Updated(updated) = repo.increment_votes(article.article_id, 1).await? else {
        panic!("expected the vote update to apply");
    };
    assert_eq!(updated.votes, i32::MAX);

    assert_eq!(
        repo.increment_votes(article.article_id, 1).await?,
        VoteUpdate::OutOfRange
    );

    let stored = repo.get_by_id(article.article_id).await?.unwrap();
    assert_eq!(stored.votes, i32::MAX);
    assert_eq!(repo.get_all(&GetArticlesParam::default()).await?.len(), 1);

    Ok(())
}

/// Tests that a delta pushing the count below `i32::MIN` is refused.
///
/// Expected: Ok(OutOfRange) and the stored count unchanged
#[tokio::test]
async fn refuses_decrement_past_lower_bound() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let topic = factory::create_topic(db).await?;
    let user = factory::create_user(db).await?;
    let article = factory::article::ArticleFactory::new(db, &topic.slug, &user.username)
        .votes(-10)
        .build()
        .await?;

    let repo = ArticleRepository::new(db);

    assert_eq!(
        repo.increment_votes(article.article_id, i32::MIN).await?,
        VoteUpdate::OutOfRange
    );

    let stored = repo.get_by_id(article.article_id).await?.unwrap();
    assert_eq!(stored.votes, -10);

    Ok(())
}

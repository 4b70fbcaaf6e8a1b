use super::*;

/// Tests the default listing order.
///
/// Verifies that articles are sorted by creation date, newest first, and that each
/// carries its own comment count.
///
/// Expected: Ok with newest article first
#[tokio::test]
async fn sorts_by_created_at_desc_by_default() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let topic = factory::create_topic(db).await?;
    let user = factory::create_user(db).await?;
    let now = Utc::now();

    let older = factory::article::ArticleFactory::new(db, &topic.slug, &user.username)
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    let newer = factory::article::ArticleFactory::new(db, &topic.slug, &user.username)
        .created_at(now - Duration::days(1))
        .build()
        .await?;
    factory::create_comment(db, older.article_id, &user.username).await?;

    let repo = ArticleRepository::new(db);
    let articles = repo.get_all(&GetArticlesParam::default()).await?;

    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].article_id, newer.article_id);
    assert_eq!(articles[0].comment_count, 0);
    assert_eq!(articles[1].article_id, older.article_id);
    assert_eq!(articles[1].comment_count, 1);

    Ok(())
}

/// Tests sorting by votes ascending.
///
/// Expected: Ok with lowest vote count first
#[tokio::test]
async fn sorts_by_votes_ascending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let topic = factory::create_topic(db).await?;
    let user = factory::create_user(db).await?;

    for votes in [50, -5, 10] {
        factory::article::ArticleFactory::new(db, &topic.slug, &user.username)
            .votes(votes)
            .build()
            .await?;
    }

    let repo = ArticleRepository::new(db);
    let articles = repo
        .get_all(&GetArticlesParam {
            sort_by: ArticleSortBy::Votes,
            order: SortOrder::Asc,
            ..Default::default()
        })
        .await?;

    let votes: Vec<i32> = articles.iter().map(|a| a.votes).collect();
    assert_eq!(votes, vec![-5, 10, 50]);

    Ok(())
}

/// Tests sorting by the derived comment count.
///
/// Expected: Ok with most commented article first
#[tokio::test]
async fn sorts_by_comment_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (topic, user, quiet) = factory::helpers::create_article_with_dependencies(db).await?;
    let busy = factory::create_article(db, &topic.slug, &user.username).await?;

    for _ in 0..3 {
        factory::create_comment(db, busy.article_id, &user.username).await?;
    }
    factory::create_comment(db, quiet.article_id, &user.username).await?;

    let repo = ArticleRepository::new(db);
    let articles = repo
        .get_all(&GetArticlesParam {
            sort_by: ArticleSortBy::CommentCount,
            ..Default::default()
        })
        .await?;

    assert_eq!(articles[0].article_id, busy.article_id);
    assert_eq!(articles[0].comment_count, 3);
    assert_eq!(articles[1].article_id, quiet.article_id);
    assert_eq!(articles[1].comment_count, 1);

    Ok(())
}

/// Tests breaking ties on the sort column by article ID.
///
/// Expected: Ok with equal-vote articles ordered by ID in the requested direction
#[tokio::test]
async fn breaks_ties_by_article_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (topic, user, first) = factory::helpers::create_article_with_dependencies(db).await?;
    let second = factory::create_article(db, &topic.slug, &user.username).await?;

    let repo = ArticleRepository::new(db);
    let articles = repo
        .get_all(&GetArticlesParam {
            sort_by: ArticleSortBy::Votes,
            order: SortOrder::Desc,
            ..Default::default()
        })
        .await?;

    assert_eq!(articles[0].article_id, second.article_id);
    assert_eq!(articles[1].article_id, first.article_id);

    Ok(())
}

/// Tests filtering by topic and by author.
///
/// Expected: Ok with only matching articles
#[tokio::test]
async fn filters_by_topic_and_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cats = factory::topic::create_topic_with_slug(db, "cats").await?;
    let mitch = factory::topic::create_topic_with_slug(db, "mitch").await?;
    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;

    let cat_article = factory::create_article(db, &cats.slug, &alice.username).await?;
    factory::create_article(db, &mitch.slug, &alice.username).await?;
    let bob_article = factory::create_article(db, &mitch.slug, &bob.username).await?;

    let repo = ArticleRepository::new(db);

    let by_topic = repo
        .get_all(&GetArticlesParam {
            topic: Some("cats".to_string()),
            ..Default::default()
        })
        .await?;
    assert_eq!(by_topic.len(), 1);
    assert_eq!(by_topic[0].article_id, cat_article.article_id);

    let by_author = repo
        .get_all(&GetArticlesParam {
            author: Some(bob.username.clone()),
            ..Default::default()
        })
        .await?;
    assert_eq!(by_author.len(), 1);
    assert_eq!(by_author[0].article_id, bob_article.article_id);

    let both = repo
        .get_all(&GetArticlesParam {
            topic: Some("cats".to_string()),
            author: Some(bob.username),
            ..Default::default()
        })
        .await?;
    assert!(both.is_empty());

    Ok(())
}

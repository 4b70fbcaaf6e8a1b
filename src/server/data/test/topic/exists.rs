use super::*;

/// Tests existence check for a stored topic.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_existing_topic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Topic)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let topic = factory::create_topic(db).await?;

    let repo = TopicRepository::new(db);

    assert!(repo.exists(&topic.slug).await?);

    Ok(())
}

/// Tests existence check for an unknown slug.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_topic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Topic)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_topic(db).await?;

    let repo = TopicRepository::new(db);

    assert!(!repo.exists("not-a-topic").await?);

    Ok(())
}

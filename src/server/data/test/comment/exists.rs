use super::*;

/// Tests existence checks for stored and unknown comment IDs.
///
/// Expected: Ok(true) for the stored comment, Ok(false) otherwise
#[tokio::test]
async fn reports_whether_comment_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, comment) = factory::helpers::create_comment_with_dependencies(db).await?;

    let repo = CommentRepository::new(db);

    assert!(repo.exists(comment.comment_id).await?);
    assert!(!repo.exists(comment.comment_id + 1000).await?);

    Ok(())
}

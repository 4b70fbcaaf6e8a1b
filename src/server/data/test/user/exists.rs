use super::*;

/// Tests existence checks for known and unknown usernames.
///
/// Expected: Ok(true) for the stored user, Ok(false) otherwise
#[tokio::test]
async fn reports_whether_username_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.exists(&user.username).await?);
    assert!(!repo.exists("nobody").await?);

    Ok(())
}

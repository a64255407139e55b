use super::*;

/// Tests looking up credentials by username.
///
/// Expected: Ok(Some) carrying the stored hash
#[tokio::test]
async fn finds_credentials_for_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("baker")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let credentials = repo.find_credentials_by_username("baker").await?.unwrap();

    assert_eq!(credentials.user.id, user.id);
    assert_eq!(credentials.password_hash, user.password_hash);

    Ok(())
}

/// Tests that the lookup matches the username exactly.
///
/// Expected: Ok(None) for an unknown username
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("baker")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_credentials_by_username("nobody").await?.is_none());
    assert!(repo.find_credentials_by_username("bake").await?.is_none());

    Ok(())
}

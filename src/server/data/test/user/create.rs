use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository stores the username, email and password hash
/// and stamps the join date.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            username: "chef".to_string(),
            email: "chef@example.com".to_string(),
            password_hash: "$argon2id$placeholder".to_string(),
        })
        .await?;

    assert_eq!(user.username, "chef");
    assert_eq!(user.email, "chef@example.com");

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.password_hash, "$argon2id$placeholder");
    assert_eq!(stored.date_joined, user.date_joined);

    Ok(())
}

/// Tests that usernames are unique.
///
/// Verifies that inserting a second user with a taken username fails at the
/// database level.
///
/// Expected: Err from unique constraint
#[tokio::test]
async fn fails_on_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .username("taken")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            username: existing.username,
            email: "other@example.com".to_string(),
            password_hash: "hash".to_string(),
        })
        .await;

    assert!(result.is_err());
    assert!(repo.username_exists("taken").await?);
    assert!(!repo.username_exists("free").await?);

    Ok(())
}

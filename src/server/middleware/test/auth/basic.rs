use super::*;
use test_utils::factory::user::DEFAULT_PASSWORD;

/// Tests valid Basic credentials.
///
/// Expected: Ok(User) for the matching user
#[tokio::test]
async fn accepts_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("api-user")
        .build()
        .await?;

    let credentials = Authorization::basic("api-user", DEFAULT_PASSWORD);
    let returned = BasicAuthGuard::new(db).require(Some(&credentials)).await?;

    assert_eq!(returned.id, user.id);

    Ok(())
}

/// Tests missing and wrong Basic credentials.
///
/// Expected: UserNotInSession without a header, InvalidCredentials otherwise
#[tokio::test]
async fn rejects_missing_or_wrong_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("api-user")
        .build()
        .await?;

    let guard = BasicAuthGuard::new(db);

    assert!(matches!(
        guard.require(None).await,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    let wrong_password = Authorization::basic("api-user", "not-it");
    assert!(matches!(
        guard.require(Some(&wrong_password)).await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    let unknown_user = Authorization::basic("ghost", DEFAULT_PASSWORD);
    assert!(matches!(
        guard.require(Some(&unknown_user)).await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

use super::*;

/// Tests a logged-in user passes the guard.
///
/// Expected: Ok(User) matching the session user
#[tokio::test]
async fn grants_access_to_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_recipe_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("chef")
        .build()
        .await?;

    AuthSession::new(session).login(user.id).await?;

    let guard = AuthGuard::new(db, session);
    let returned = guard.require().await?;

    assert_eq!(returned.id, user.id);
    assert_eq!(returned.username, "chef");
    assert_eq!(guard.current_user().await?.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests the guard without a session user.
///
/// Expected: Err(UserNotInSession) from require, Ok(None) from current_user
#[tokio::test]
async fn rejects_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_recipe_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let guard = AuthGuard::new(db, session);

    assert!(matches!(
        guard.require().await,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));
    assert!(guard.current_user().await?.is_none());

    Ok(())
}

/// Tests a session that references a deleted user.
///
/// Expected: Err(UserNotInDatabase) with the stale ID
#[tokio::test]
async fn rejects_user_missing_from_database() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_recipe_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(4242).await?;

    let result = AuthGuard::new(db, session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(4242)))
    ));

    Ok(())
}

/// Tests the author check on a recipe.
///
/// Expected: Ok for the author, Err(AccessDenied) for anyone else
#[tokio::test]
async fn ensure_author_checks_ownership() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = User::from_entity(factory::create_user(db).await?);
    let other = User::from_entity(factory::create_user(db).await?);
    let recipe = Recipe::from_entity(factory::create_recipe(db, author.id).await?, vec![]);

    assert!(ensure_author(&author, &recipe).is_ok());
    assert!(matches!(
        ensure_author(&other, &recipe),
        Err(AuthError::AccessDenied(id, _)) if id == other.id
    ));

    Ok(())
}

/// Tests logging out clears the session user.
///
/// Expected: no user ID after logout
#[tokio::test]
async fn logout_clears_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_recipe_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;

    let auth_session = AuthSession::new(session);
    auth_session.login(user.id).await?;
    assert!(auth_session.is_authenticated().await?);

    auth_session.logout().await?;
    assert!(!auth_session.is_authenticated().await?);

    Ok(())
}

use axum_extra::headers::{authorization::Basic, Authorization};
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::{recipe::Recipe, user::User},
    service::auth::AuthService,
};

/// Resolves the logged-in user of a page request.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the session user or fails when nobody is logged in.
    ///
    /// # Returns
    /// - `Ok(User)` - Logged-in user
    /// - `Err(AuthError::UserNotInSession)` - No user ID in the session
    /// - `Err(AuthError::UserNotInDatabase)` - Session references a deleted user
    pub async fn require(&self) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(user)
    }

    /// Returns the session user if there is one; used for navigation and
    /// author-only links on public pages.
    pub async fn current_user(&self) -> Result<Option<User>, AppError> {
        match self.require().await {
            Ok(user) => Ok(Some(user)),
            Err(AppError::AuthErr(
                AuthError::UserNotInSession | AuthError::UserNotInDatabase(_),
            )) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

/// Resolves the user behind HTTP Basic credentials on API writes.
///
/// Credentials are checked on every request; no session is created.
pub struct BasicAuthGuard<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BasicAuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// # Returns
    /// - `Ok(User)` - Credentials match a registered user
    /// - `Err(AuthError::UserNotInSession)` - No credentials supplied
    /// - `Err(AuthError::InvalidCredentials)` - Unknown user or wrong password
    pub async fn require(
        &self,
        credentials: Option<&Authorization<Basic>>,
    ) -> Result<User, AppError> {
        let Some(credentials) = credentials else {
            return Err(AuthError::UserNotInSession.into());
        };

        AuthService::new(self.db)
            .login(credentials.username(), credentials.password())
            .await
    }
}

/// Fails with `AccessDenied` unless `user` wrote `recipe`.
pub fn ensure_author(user: &User, recipe: &Recipe) -> Result<(), AuthError> {
    if recipe.author_id != user.id {
        return Err(AuthError::AccessDenied(
            user.id,
            format!(
                "User attempted to modify recipe {} owned by user {}",
                recipe.id, recipe.author_id
            ),
        ));
    }

    Ok(())
}

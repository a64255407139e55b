//! HTTP request handlers.
//!
//! - `api` - Stateless JSON endpoints under `/api`, documented with utoipa
//! - `recipe`, `category`, `auth` - Server-rendered pages using the session
//!
//! Page handlers return `WebError` so failures render as HTML; API handlers return
//! `AppError`, which renders as `ErrorDto` JSON.

pub mod api;
pub mod auth;
pub mod category;
pub mod recipe;

use axum::http::Uri;
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, web::WebError, AppError},
    middleware::auth::AuthGuard,
    model::user::User,
};

/// Returns the logged-in user or sends the browser to the login page, which
/// brings it back to `uri` afterwards.
pub(crate) async fn require_login(
    db: &DatabaseConnection,
    session: &Session,
    uri: &Uri,
) -> Result<User, WebError> {
    match AuthGuard::new(db, session).require().await {
        Ok(user) => Ok(user),
        Err(AppError::AuthErr(AuthError::UserNotInSession | AuthError::UserNotInDatabase(_))) => {
            Err(WebError::LoginRequired {
                next: uri.path().to_string(),
            })
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod test;

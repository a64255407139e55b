//! HTML error responses for the browser-facing pages.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use crate::server::{
    error::{auth::AuthError, AppError},
    view,
};

/// Error returned by page handlers.
///
/// Page routes answer with rendered HTML or redirects instead of the JSON bodies the
/// API uses. Form validation problems never reach this type; the handlers re-render
/// their form for those.
#[derive(Debug)]
pub enum WebError {
    /// Any application error, rendered as an error page.
    App(AppError),

    /// The page needs a logged-in user; redirect to the login form and come back to
    /// `next` afterwards.
    LoginRequired { next: String },
}

impl From<AppError> for WebError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<AuthError> for WebError {
    fn from(err: AuthError) -> Self {
        Self::App(err.into())
    }
}

impl From<sea_orm::DbErr> for WebError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::App(err.into())
    }
}

impl From<tower_sessions::session::Error> for WebError {
    fn from(err: tower_sessions::session::Error) -> Self {
        Self::App(err.into())
    }
}

impl From<axum::extract::multipart::MultipartError> for WebError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        Self::App(err.into())
    }
}

/// Converts page errors into HTML responses.
///
/// - `LoginRequired` and a missing session user → redirect to the login page
/// - `NotFound` and `AccessDenied` → 404 page, so other users' recipes look absent
/// - `BadRequest`, validation errors and malformed multipart → 4xx page with the message
/// - Everything else → logged, generic 500 page
impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let err = match self {
            Self::LoginRequired { next } => {
                return Redirect::to(&format!("/login/?next={}", next)).into_response()
            }
            Self::App(err) => err,
        };

        match err {
            AppError::AuthErr(AuthError::UserNotInSession)
            | AppError::AuthErr(AuthError::UserNotInDatabase(_)) => {
                Redirect::to("/login/").into_response()
            }
            AppError::AuthErr(err @ AuthError::AccessDenied(_, _)) => {
                tracing::debug!("{}", err);
                view::error_page(StatusCode::NOT_FOUND, "Page not found")
            }
            AppError::NotFound(_) => view::error_page(StatusCode::NOT_FOUND, "Page not found"),
            AppError::BadRequest(msg) => view::error_page(StatusCode::BAD_REQUEST, &msg),
            AppError::ValidationErr(errors) => {
                view::error_page(StatusCode::BAD_REQUEST, &errors.to_string())
            }
            AppError::MultipartErr(err) => view::error_page(err.status(), &err.body_text()),
            err => {
                tracing::error!("{}", err);
                view::error_page(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

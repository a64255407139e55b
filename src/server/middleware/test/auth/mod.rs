use axum_extra::headers::Authorization;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{ensure_author, AuthGuard, BasicAuthGuard},
        session::AuthSession,
    },
    model::{recipe::Recipe, user::User},
};
use test_utils::{builder::TestBuilder, factory};

mod basic;
mod require;

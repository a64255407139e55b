//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Image store for uploaded recipe images

use sea_orm::DatabaseConnection;

use crate::server::media::ImageStore;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `ImageStore` only holds the media directory path
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// Repositories borrow it per call; multi-step writes open a transaction on it.
    pub db: DatabaseConnection,

    /// Storage for uploaded recipe images under the media directory.
    pub images: ImageStore,
}

impl AppState {
    pub fn new(db: DatabaseConnection, images: ImageStore) -> Self {
        Self { db, images }
    }
}

//! Type-safe session management wrappers.
//!
//! This module provides type-safe interfaces for managing different aspects of user sessions,
//! organized by concern. Each struct handles a specific domain of session data, preventing
//! typos, ensuring type consistency, and centralizing session-related logic.
//!
//! # Architecture
//!
//! Session management is split into focused concerns:
//! - `AuthSession` - User authentication state (user ID) and session lifecycle
//! - `FlashSession` - One-shot messages shown on the next rendered page
//!
//! Each struct wraps the same underlying `Session` but exposes only the methods
//! relevant to its concern.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::AppError;

// Session key constants
pub const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_FLASH_MESSAGES: &str = "flash:messages";

/// Authentication session management.
///
/// Handles storing and retrieving the authenticated user's ID along with the
/// session lifecycle operations around login and logout.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Establishes a logged-in session for `user_id`.
    ///
    /// The session ID is cycled first so an ID issued before login can never
    /// carry the authenticated state.
    ///
    /// # Returns
    /// - `Ok(())` - Session now belongs to the user
    /// - `Err(AppError::SessionErr(_))` - Failed to update the session
    pub async fn login(&self, user_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.set_user_id(user_id).await
    }

    /// Stores the user's ID in the session.
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the user's ID from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        let user_id = self.session.get::<i32>(SESSION_AUTH_USER_ID).await?;
        Ok(user_id)
    }

    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.get_user_id().await?.is_some())
    }

    /// Removes all session data and issues a fresh session ID.
    ///
    /// Used during logout. The new, empty session can still carry a flash message
    /// to the next page.
    pub async fn logout(&self) -> Result<(), AppError> {
        self.session.clear().await;
        self.session.cycle_id().await?;
        Ok(())
    }
}

/// Severity of a flash message, used as a CSS class by the templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub text: String,
}

/// Flash message queue.
///
/// Messages pushed while handling one request are taken, and thereby removed,
/// when the next page renders.
pub struct FlashSession<'a> {
    session: &'a Session,
}

impl<'a> FlashSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Appends a message to the queue.
    pub async fn push(&self, level: FlashLevel, text: impl Into<String>) -> Result<(), AppError> {
        let mut messages = self
            .session
            .get::<Vec<FlashMessage>>(SESSION_FLASH_MESSAGES)
            .await?
            .unwrap_or_default();

        messages.push(FlashMessage {
            level,
            text: text.into(),
        });

        self.session
            .insert(SESSION_FLASH_MESSAGES, messages)
            .await?;
        Ok(())
    }

    pub async fn success(&self, text: impl Into<String>) -> Result<(), AppError> {
        self.push(FlashLevel::Success, text).await
    }

    pub async fn info(&self, text: impl Into<String>) -> Result<(), AppError> {
        self.push(FlashLevel::Info, text).await
    }

    /// Removes and returns every queued message in insertion order.
    pub async fn take(&self) -> Result<Vec<FlashMessage>, AppError> {
        let messages = self
            .session
            .remove::<Vec<FlashMessage>>(SESSION_FLASH_MESSAGES)
            .await?
            .unwrap_or_default();
        Ok(messages)
    }
}

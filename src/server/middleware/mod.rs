//! Request guards and typed session access.
//!
//! - `auth` - `AuthGuard` for session-authenticated pages, `BasicAuthGuard` for API writes
//! - `session` - Typed wrappers over `tower_sessions::Session` with namespaced keys

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;

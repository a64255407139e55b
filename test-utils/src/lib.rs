//! Cookbook Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the cookbook
//! application. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases created straight from the entity definitions.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_recipe_operations() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let author = factory::create_user(db).await?;
//!     let recipe = factory::create_recipe(db, author.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;

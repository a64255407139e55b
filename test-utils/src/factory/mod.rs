//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let author = factory::user::UserFactory::new(&db)
//!     .username("chef")
//!     .password("hunter22")
//!     .build()
//!     .await?;
//!
//! let soups = factory::create_category(&db).await?;
//! let recipe = factory::recipe::RecipeFactory::new(&db, author.id)
//!     .title("Soup")
//!     .categories(vec![soups.id])
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create users with a real (cheaply) hashed password
//! - `category` - Create categories with unique names
//! - `recipe` - Create recipes with their category links
//! - `helpers` - ID generation and entity graphs with dependencies

pub mod category;
pub mod helpers;
pub mod recipe;
pub mod user;

pub use category::create_category;
pub use recipe::create_recipe;
pub use user::create_user;

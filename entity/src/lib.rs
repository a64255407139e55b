//! SeaORM entity definitions for the recipe catalog schema.

pub mod prelude;

pub mod category;
pub mod recipe;
pub mod recipe_category;
pub mod user;

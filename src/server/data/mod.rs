//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Every repository borrows any `ConnectionTrait` implementor, so the same code runs
//! against the pooled connection or inside a `DatabaseTransaction`.

use sea_orm::{DbErr, SqlErr};

pub mod category;
pub mod recipe;
pub mod user;

/// Whether an insert or update failed on a UNIQUE constraint.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

#[cfg(test)]
mod test;

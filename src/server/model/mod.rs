//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! They also serialize into template contexts for the rendered pages.

pub mod category;
pub mod recipe;
pub mod user;

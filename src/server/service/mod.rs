//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controllers and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Ownership rules, uniqueness checks and password handling
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running multi-step writes in one transaction

pub mod auth;
pub mod category;
pub mod recipe;

//! Category domain models and parameters.

use serde::Serialize;

/// Named tag grouping recipes, e.g. "Desserts".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

impl Category {
    /// Converts an entity model to a category domain model at the repository boundary.
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}

/// Parameters for creating a category. The name has already been validated.
#[derive(Debug, Clone)]
pub struct CreateCategoryParam {
    pub name: String,
}

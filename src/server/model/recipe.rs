//! Recipe domain models and parameters.
//!
//! Provides the recipe domain model with its resolved categories, the detail view
//! model carrying the author's name, and parameter types for create and update
//! operations coming from either the pages or the JSON API.

use serde::Serialize;

use crate::{
    model::recipe::{CreateRecipeDto, RecipeDto, UpdateRecipeDto},
    server::model::{category::Category, user::User},
};

/// Recipe with its categories resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub steps: String,
    /// Minutes, always greater than zero.
    pub cooking_time: i32,
    /// Image path relative to the media directory.
    pub image: Option<String>,
    pub ingredients: String,
    pub author_id: i32,
    /// Categories ordered by ID.
    pub categories: Vec<Category>,
}

impl Recipe {
    /// Converts an entity model and its already loaded categories into a domain model.
    pub fn from_entity(entity: entity::recipe::Model, mut categories: Vec<Category>) -> Self {
        categories.sort_by_key(|c| c.id);

        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            steps: entity.steps,
            cooking_time: entity.cooking_time,
            image: entity.image,
            ingredients: entity.ingredients,
            author_id: entity.author_id,
            categories,
        }
    }

    /// IDs of the recipe's categories in ascending order.
    pub fn category_ids(&self) -> Vec<i32> {
        self.categories.iter().map(|c| c.id).collect()
    }

    /// Converts the recipe domain model to a DTO for API responses.
    pub fn into_dto(self) -> RecipeDto {
        let categories = self.category_ids();

        RecipeDto {
            id: self.id,
            title: self.title,
            description: self.description,
            steps: self.steps,
            cooking_time: self.cooking_time,
            image: self.image,
            ingredients: self.ingredients,
            author_id: self.author_id,
            categories,
        }
    }
}

/// Recipe together with its author, as shown on the detail page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeDetail {
    pub recipe: Recipe,
    pub author: User,
}

/// Recipe list page data: the recipes, every category for the filter control and
/// the category currently filtered on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeList {
    pub recipes: Vec<Recipe>,
    pub categories: Vec<Category>,
    pub selected_category: Option<i32>,
}

/// Parameters for creating a recipe and its category links.
#[derive(Debug, Clone)]
pub struct CreateRecipeParams {
    pub title: String,
    pub description: String,
    pub steps: String,
    pub cooking_time: i32,
    pub image: Option<String>,
    pub ingredients: String,
    pub author_id: i32,
    /// Category IDs to link; each must exist.
    pub categories: Vec<i32>,
}

impl CreateRecipeParams {
    /// Builds creation parameters from an API payload on behalf of `author_id`.
    ///
    /// Duplicate category IDs are collapsed.
    pub fn from_dto(author_id: i32, dto: CreateRecipeDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            steps: dto.steps,
            cooking_time: dto.cooking_time,
            image: None,
            ingredients: dto.ingredients,
            author_id,
            categories: dedup_ids(dto.categories),
        }
    }
}

/// Parameters for updating a recipe.
///
/// Every `None` leaves the stored value untouched. `categories: Some(_)` replaces
/// all existing links, so `Some(vec![])` unlinks every category.
#[derive(Debug, Clone, Default)]
pub struct UpdateRecipeParams {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub steps: Option<String>,
    pub cooking_time: Option<i32>,
    /// New image path; `None` keeps the current image.
    pub image: Option<String>,
    pub ingredients: Option<String>,
    pub categories: Option<Vec<i32>>,
}

impl UpdateRecipeParams {
    /// Builds partial update parameters from an API payload.
    pub fn from_dto(id: i32, dto: UpdateRecipeDto) -> Self {
        Self {
            id,
            description: dto.description,
            steps: dto.steps,
            ingredients: dto.ingredients,
            categories: dto.categories.map(dedup_ids),
            ..Default::default()
        }
    }
}

/// Sorts and removes duplicate IDs so each link is inserted once.
pub fn dedup_ids(mut ids: Vec<i32>) -> Vec<i32> {
    ids.sort_unstable();
    ids.dedup();
    ids
}

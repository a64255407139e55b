use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Recipe record returned by every API endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub steps: String,
    /// Cooking time in minutes.
    pub cooking_time: i32,
    /// Path of the image relative to `/media/`, if one was uploaded.
    pub image: Option<String>,
    pub ingredients: String,
    pub author_id: i32,
    /// IDs of the categories the recipe belongs to, ascending.
    pub categories: Vec<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateRecipeDto {
    pub title: String,
    pub description: String,
    pub steps: String,
    pub cooking_time: i32,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub categories: Vec<i32>,
}

/// Partial update. Absent fields are left untouched; a present `categories`
/// replaces every existing link of the recipe.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateRecipeDto {
    pub description: Option<String>,
    pub steps: Option<String>,
    pub ingredients: Option<String>,
    pub categories: Option<Vec<i32>>,
}

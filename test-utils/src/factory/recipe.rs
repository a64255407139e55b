//! Recipe factory for creating test recipes and their category links.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test recipes owned by a given author.
///
/// # Example
///
/// ```rust,ignore
/// let recipe = RecipeFactory::new(&db, author.id)
///     .title("Borscht")
///     .ingredients("beetroot, cabbage")
///     .categories(vec![soups.id])
///     .build()
///     .await?;
/// ```
pub struct RecipeFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    title: String,
    description: String,
    steps: String,
    cooking_time: i32,
    image: Option<String>,
    ingredients: String,
    categories: Vec<i32>,
}

impl<'a> RecipeFactory<'a> {
    /// Creates a new RecipeFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Recipe {id}"`
    /// - cooking_time: 30 minutes
    /// - no image and no categories
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            author_id,
            title: format!("Recipe {}", id),
            description: format!("Description of recipe {}", id),
            steps: "Mix everything.\nCook.".to_string(),
            cooking_time: 30,
            image: None,
            ingredients: "salt, water".to_string(),
            categories: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn steps(mut self, steps: impl Into<String>) -> Self {
        self.steps = steps.into();
        self
    }

    pub fn cooking_time(mut self, cooking_time: i32) -> Self {
        self.cooking_time = cooking_time;
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.ingredients = ingredients.into();
        self
    }

    /// Sets the category ids linked to the recipe. The categories must exist.
    pub fn categories(mut self, categories: Vec<i32>) -> Self {
        self.categories = categories;
        self
    }

    /// Inserts the recipe, then one link row per category.
    pub async fn build(self) -> Result<entity::recipe::Model, DbErr> {
        let recipe = entity::recipe::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            steps: ActiveValue::Set(self.steps),
            cooking_time: ActiveValue::Set(self.cooking_time),
            image: ActiveValue::Set(self.image),
            ingredients: ActiveValue::Set(self.ingredients),
            author_id: ActiveValue::Set(self.author_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for category_id in self.categories {
            entity::recipe_category::ActiveModel {
                recipe_id: ActiveValue::Set(recipe.id),
                category_id: ActiveValue::Set(category_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(recipe)
    }
}

/// Creates a recipe with default values for the given author.
pub async fn create_recipe(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::recipe::Model, DbErr> {
    RecipeFactory::new(db, author_id).build().await
}

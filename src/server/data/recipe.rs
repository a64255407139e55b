//! Recipe data repository.
//!
//! Provides `RecipeRepository` for recipe rows and their category links. Queries that
//! return several recipes resolve categories in two batched lookups (links, then
//! categories) instead of one query per recipe.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::{
    category::Category,
    recipe::{CreateRecipeParams, Recipe, UpdateRecipeParams},
};

pub struct RecipeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RecipeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a recipe and one link row per category.
    ///
    /// Categories are not checked here; a missing one surfaces as a foreign key
    /// violation. Run inside a transaction so a failure leaves nothing behind.
    pub async fn create(&self, params: CreateRecipeParams) -> Result<entity::recipe::Model, DbErr> {
        let recipe = entity::recipe::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            steps: ActiveValue::Set(params.steps),
            cooking_time: ActiveValue::Set(params.cooking_time),
            image: ActiveValue::Set(params.image),
            ingredients: ActiveValue::Set(params.ingredients),
            author_id: ActiveValue::Set(params.author_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.insert_links(recipe.id, &params.categories).await?;

        Ok(recipe)
    }

    /// Gets a recipe by ID with its categories
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Recipe>, DbErr> {
        let Some(recipe) = entity::prelude::Recipe::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.with_categories(vec![recipe]).await?.pop())
    }

    /// Gets every recipe ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Recipe>, DbErr> {
        let recipes = entity::prelude::Recipe::find()
            .order_by_asc(entity::recipe::Column::Id)
            .all(self.db)
            .await?;

        self.with_categories(recipes).await
    }

    /// Gets the IDs of every recipe without loading the rows
    pub async fn get_all_ids(&self) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Recipe::find()
            .select_only()
            .column(entity::recipe::Column::Id)
            .order_by_asc(entity::recipe::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Gets the recipes with the given IDs, ordered by ID. Unknown IDs are skipped.
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<Recipe>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let recipes = entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::recipe::Column::Id)
            .all(self.db)
            .await?;

        self.with_categories(recipes).await
    }

    /// Finds the first recipe whose title matches exactly
    pub async fn find_by_title(&self, title: &str) -> Result<Option<Recipe>, DbErr> {
        let Some(recipe) = entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::Title.eq(title))
            .order_by_asc(entity::recipe::Column::Id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.with_categories(vec![recipe]).await?.pop())
    }

    /// Finds recipes whose ingredient text contains `ingredient`, ignoring case.
    ///
    /// The comparison runs on lowercased text in Rust rather than with SQL `LIKE`, so
    /// `%` and `_` match literally and non-ASCII letters fold as well.
    pub async fn find_by_ingredient(&self, ingredient: &str) -> Result<Vec<Recipe>, DbErr> {
        let needle = ingredient.to_lowercase();

        let candidates: Vec<(i32, String)> = entity::prelude::Recipe::find()
            .select_only()
            .column(entity::recipe::Column::Id)
            .column(entity::recipe::Column::Ingredients)
            .order_by_asc(entity::recipe::Column::Id)
            .into_tuple()
            .all(self.db)
            .await?;

        let ids: Vec<i32> = candidates
            .into_iter()
            .filter(|(_, ingredients)| ingredients.to_lowercase().contains(&needle))
            .map(|(id, _)| id)
            .collect();

        self.get_by_ids(&ids).await
    }

    /// Finds recipes linked to a category through the join table
    pub async fn find_by_category(&self, category_id: i32) -> Result<Vec<Recipe>, DbErr> {
        let recipes = entity::prelude::Recipe::find()
            .inner_join(entity::prelude::RecipeCategory)
            .filter(entity::recipe_category::Column::CategoryId.eq(category_id))
            .order_by_asc(entity::recipe::Column::Id)
            .all(self.db)
            .await?;

        self.with_categories(recipes).await
    }

    /// Finds recipes written by an author
    pub async fn find_by_author(&self, author_id: i32) -> Result<Vec<Recipe>, DbErr> {
        let recipes = entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::AuthorId.eq(author_id))
            .order_by_asc(entity::recipe::Column::Id)
            .all(self.db)
            .await?;

        self.with_categories(recipes).await
    }

    /// Applies the supplied fields and, when given, replaces the category links.
    ///
    /// # Returns
    /// - `Ok(Some(model))` - Updated recipe row
    /// - `Ok(None)` - No recipe with that ID
    /// - `Err(DbErr)` - Database error; run inside a transaction to keep links consistent
    pub async fn update(
        &self,
        params: UpdateRecipeParams,
    ) -> Result<Option<entity::recipe::Model>, DbErr> {
        let Some(recipe) = entity::prelude::Recipe::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::recipe::ActiveModel = recipe.clone().into();
        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(steps) = params.steps {
            active_model.steps = ActiveValue::Set(steps);
        }
        if let Some(cooking_time) = params.cooking_time {
            active_model.cooking_time = ActiveValue::Set(cooking_time);
        }
        if let Some(image) = params.image {
            active_model.image = ActiveValue::Set(Some(image));
        }
        if let Some(ingredients) = params.ingredients {
            active_model.ingredients = ActiveValue::Set(ingredients);
        }

        let recipe = if active_model.is_changed() {
            active_model.update(self.db).await?
        } else {
            recipe
        };

        if let Some(categories) = params.categories {
            self.replace_categories(recipe.id, &categories).await?;
        }

        Ok(Some(recipe))
    }

    /// Removes every link of the recipe and inserts the given set
    pub async fn replace_categories(&self, recipe_id: i32, categories: &[i32]) -> Result<(), DbErr> {
        entity::prelude::RecipeCategory::delete_many()
            .filter(entity::recipe_category::Column::RecipeId.eq(recipe_id))
            .exec(self.db)
            .await?;

        self.insert_links(recipe_id, categories).await
    }

    /// Deletes a recipe; its category links cascade
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Recipe::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    async fn insert_links(&self, recipe_id: i32, categories: &[i32]) -> Result<(), DbErr> {
        for category_id in categories {
            entity::recipe_category::ActiveModel {
                recipe_id: ActiveValue::Set(recipe_id),
                category_id: ActiveValue::Set(*category_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Resolves categories for a batch of recipe rows, preserving their order
    async fn with_categories(
        &self,
        recipes: Vec<entity::recipe::Model>,
    ) -> Result<Vec<Recipe>, DbErr> {
        if recipes.is_empty() {
            return Ok(Vec::new());
        }

        let recipe_ids: Vec<i32> = recipes.iter().map(|r| r.id).collect();

        let links = entity::prelude::RecipeCategory::find()
            .filter(entity::recipe_category::Column::RecipeId.is_in(recipe_ids))
            .all(self.db)
            .await?;

        let category_ids: Vec<i32> = links.iter().map(|l| l.category_id).collect();

        // Fetch all linked categories in one query
        let categories_map: HashMap<i32, Category> = if !category_ids.is_empty() {
            entity::prelude::Category::find()
                .filter(entity::category::Column::Id.is_in(category_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|c| (c.id, Category::from_entity(c)))
                .collect()
        } else {
            HashMap::new()
        };

        let mut by_recipe: HashMap<i32, Vec<Category>> = HashMap::new();
        for link in links {
            if let Some(category) = categories_map.get(&link.category_id) {
                by_recipe
                    .entry(link.recipe_id)
                    .or_default()
                    .push(category.clone());
            }
        }

        Ok(recipes
            .into_iter()
            .map(|recipe| {
                let categories = by_recipe.remove(&recipe.id).unwrap_or_default();
                Recipe::from_entity(recipe, categories)
            })
            .collect())
    }
}

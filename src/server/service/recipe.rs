//! Recipe service for business logic.
//!
//! This module provides the `RecipeService` used by both the pages and the JSON API.
//! Writes that touch a recipe and its category links run in a single transaction:
//! the transaction is committed explicitly at the end and rolled back when dropped on
//! an early return.

use rand::Rng;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use std::collections::HashMap;

use crate::server::{
    data::{category::CategoryRepository, recipe::RecipeRepository, user::UserRepository},
    error::AppError,
    form::{recipe::check_cooking_time, FormErrors},
    middleware::auth::ensure_author,
    model::{
        recipe::{CreateRecipeParams, Recipe, RecipeDetail, RecipeList, UpdateRecipeParams},
        user::User,
    },
    util::random::pick_random,
};

/// Number of recipes shown on the home page.
pub const HOME_RECIPE_COUNT: usize = 5;

pub struct RecipeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecipeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Picks up to [`HOME_RECIPE_COUNT`] distinct recipes at random.
    ///
    /// Only IDs are loaded to make the selection; the chosen recipes are then fetched
    /// and returned in the order they were picked.
    pub async fn home<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Recipe>, AppError> {
        let repo = RecipeRepository::new(self.db);

        let ids = repo.get_all_ids().await?;
        let picked = pick_random(HOME_RECIPE_COUNT, ids, rng);

        let mut by_id: HashMap<i32, Recipe> = repo
            .get_by_ids(&picked)
            .await?
            .into_iter()
            .map(|recipe| (recipe.id, recipe))
            .collect();

        Ok(picked.iter().filter_map(|id| by_id.remove(id)).collect())
    }

    /// Lists recipes, optionally only those linked to `category_id`.
    ///
    /// An unknown category yields an empty list rather than an error.
    pub async fn list(&self, category_id: Option<i32>) -> Result<RecipeList, AppError> {
        let repo = RecipeRepository::new(self.db);

        let recipes = match category_id {
            Some(id) => repo.find_by_category(id).await?,
            None => repo.get_all().await?,
        };
        let categories = CategoryRepository::new(self.db).get_all().await?;

        Ok(RecipeList {
            recipes,
            categories,
            selected_category: category_id,
        })
    }

    /// Gets one recipe with its author.
    ///
    /// # Returns
    /// - `Ok(RecipeDetail)` - Recipe found
    /// - `Err(AppError::NotFound)` - No recipe with that ID
    pub async fn detail(&self, id: i32) -> Result<RecipeDetail, AppError> {
        let recipe = self.get(id).await?;

        let Some(author) = UserRepository::new(self.db)
            .find_by_id(recipe.author_id)
            .await?
        else {
            return Err(AppError::InternalError(format!(
                "Author {} of recipe {} not found",
                recipe.author_id, recipe.id
            )));
        };

        Ok(RecipeDetail { recipe, author })
    }

    /// Gets a recipe by ID or fails with `NotFound`.
    pub async fn get(&self, id: i32) -> Result<Recipe, AppError> {
        RecipeRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| recipe_not_found(id))
    }

    /// Gets a recipe the user is allowed to edit.
    ///
    /// # Returns
    /// - `Ok(Recipe)` - The user wrote the recipe
    /// - `Err(AppError::NotFound)` - No recipe with that ID
    /// - `Err(AuthError::AccessDenied)` - Another user wrote the recipe
    pub async fn get_owned(&self, id: i32, user: &User) -> Result<Recipe, AppError> {
        let recipe = self.get(id).await?;
        ensure_author(user, &recipe)?;
        Ok(recipe)
    }

    /// Creates a recipe and links its categories in one transaction.
    ///
    /// # Returns
    /// - `Ok(Recipe)` - Created recipe with categories resolved
    /// - `Err(AppError::ValidationErr)` - Cooking time is not positive; nothing is stored
    /// - `Err(AppError::NotFound)` - A category does not exist; nothing is stored
    /// - `Err(AppError::DbErr)` - Database error; nothing is stored
    pub async fn create(&self, params: CreateRecipeParams) -> Result<Recipe, AppError> {
        ensure_positive_cooking_time(Some(params.cooking_time))?;

        let txn = self.db.begin().await?;

        ensure_categories_exist(&txn, &params.categories).await?;

        let repo = RecipeRepository::new(&txn);
        let created = repo.create(params).await?;
        let recipe = repo
            .get_by_id(created.id)
            .await?
            .ok_or_else(|| AppError::InternalError("Recipe not found after creation".to_string()))?;

        txn.commit().await?;

        tracing::info!(
            "User {} created recipe {} ({})",
            recipe.author_id,
            recipe.id,
            recipe.title
        );

        Ok(recipe)
    }

    /// Applies a partial update on behalf of `user` in one transaction.
    ///
    /// When `params.categories` is set, every existing link is replaced by that set.
    ///
    /// # Returns
    /// - `Ok(Recipe)` - Updated recipe
    /// - `Err(AppError::ValidationErr)` - Cooking time is not positive; nothing changes
    /// - `Err(AppError::NotFound)` - Unknown recipe or category; nothing changes
    /// - `Err(AuthError::AccessDenied)` - `user` is not the author; nothing changes
    pub async fn update(&self, params: UpdateRecipeParams, user: &User) -> Result<Recipe, AppError> {
        ensure_positive_cooking_time(params.cooking_time)?;

        let txn = self.db.begin().await?;
        let repo = RecipeRepository::new(&txn);

        let id = params.id;
        let existing = repo.get_by_id(id).await?.ok_or_else(|| recipe_not_found(id))?;
        ensure_author(user, &existing)?;

        if let Some(categories) = &params.categories {
            ensure_categories_exist(&txn, categories).await?;
        }

        repo.update(params).await?.ok_or_else(|| recipe_not_found(id))?;
        let recipe = repo.get_by_id(id).await?.ok_or_else(|| recipe_not_found(id))?;

        txn.commit().await?;

        tracing::info!("User {} updated recipe {}", user.id, recipe.id);

        Ok(recipe)
    }

    pub async fn get_all(&self) -> Result<Vec<Recipe>, AppError> {
        let recipes = RecipeRepository::new(self.db).get_all().await?;
        Ok(recipes)
    }

    /// Gets the recipe with exactly this title or fails with `NotFound`.
    pub async fn find_by_title(&self, title: &str) -> Result<Recipe, AppError> {
        RecipeRepository::new(self.db)
            .find_by_title(title)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Recipe with title '{}' not found", title)))
    }

    /// Recipes whose ingredients contain `ingredient`; `NotFound` when none do.
    pub async fn find_by_ingredient(&self, ingredient: &str) -> Result<Vec<Recipe>, AppError> {
        let recipes = RecipeRepository::new(self.db)
            .find_by_ingredient(ingredient)
            .await?;

        non_empty(
            recipes,
            format!("No recipes found with ingredient '{}'", ingredient),
        )
    }

    /// Recipes linked to a category; `NotFound` when none are.
    pub async fn find_by_category(&self, category_id: i32) -> Result<Vec<Recipe>, AppError> {
        let recipes = RecipeRepository::new(self.db)
            .find_by_category(category_id)
            .await?;

        non_empty(
            recipes,
            format!("No recipes found in category {}", category_id),
        )
    }

    /// Recipes written by an author; `NotFound` when there are none.
    pub async fn find_by_author(&self, author_id: i32) -> Result<Vec<Recipe>, AppError> {
        let recipes = RecipeRepository::new(self.db)
            .find_by_author(author_id)
            .await?;

        non_empty(recipes, format!("No recipes found by author {}", author_id))
    }
}

async fn ensure_categories_exist<C: ConnectionTrait>(
    db: &C,
    categories: &[i32],
) -> Result<(), AppError> {
    let missing = CategoryRepository::new(db).find_missing(categories).await?;

    if let Some(id) = missing.first() {
        return Err(AppError::NotFound(format!("Category {} not found", id)));
    }

    Ok(())
}

fn ensure_positive_cooking_time(minutes: Option<i32>) -> Result<(), FormErrors> {
    let mut errors = FormErrors::new();
    if let Some(minutes) = minutes {
        check_cooking_time(&mut errors, minutes);
    }
    errors.finish(())
}

fn non_empty(recipes: Vec<Recipe>, message: String) -> Result<Vec<Recipe>, AppError> {
    if recipes.is_empty() {
        return Err(AppError::NotFound(message));
    }

    Ok(recipes)
}

fn recipe_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Recipe {} not found", id))
}

use crate::server::{
    data::recipe::RecipeRepository,
    model::recipe::{CreateRecipeParams, UpdateRecipeParams},
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter, TransactionTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_category;
mod find_by_ingredient;
mod get_by_ids;
mod update;

fn create_params(author_id: i32, title: &str, categories: Vec<i32>) -> CreateRecipeParams {
    CreateRecipeParams {
        title: title.to_string(),
        description: "A test recipe".to_string(),
        steps: "Boil.\nServe.".to_string(),
        cooking_time: 20,
        image: None,
        ingredients: "water, salt".to_string(),
        author_id,
        categories,
    }
}

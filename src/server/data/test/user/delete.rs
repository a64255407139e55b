use super::*;
use sea_orm::{ColumnTrait, PaginatorTrait, QueryFilter};

/// Tests deleting a user cascades to their recipes and recipe links.
///
/// Expected: Ok(true) with recipes and links removed, categories kept
#[tokio::test]
async fn deletes_user_cascades_to_recipes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, category, recipe) =
        factory::helpers::create_recipe_with_dependencies(db).await?;

    let repo = UserRepository::new(db);
    let deleted = repo.delete(user.id).await?;

    assert!(deleted);

    let db_recipe = entity::prelude::Recipe::find_by_id(recipe.id).one(db).await?;
    assert!(db_recipe.is_none());

    let links = entity::prelude::RecipeCategory::find()
        .filter(entity::recipe_category::Column::RecipeId.eq(recipe.id))
        .count(db)
        .await?;
    assert_eq!(links, 0);

    let db_category = entity::prelude::Category::find_by_id(category.id)
        .one(db)
        .await?;
    assert!(db_category.is_some());

    Ok(())
}

/// Tests deleting a nonexistent user.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.delete(99999).await?);

    Ok(())
}

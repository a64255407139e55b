use super::*;
use sea_orm::{ColumnTrait, PaginatorTrait, QueryFilter};

/// Tests deleting a category cascades to its recipe links.
///
/// Verifies that the recipe survives and only loses the link to the deleted
/// category.
///
/// Expected: Ok(true) with links removed and recipe kept
#[tokio::test]
async fn deletes_category_cascades_to_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let soups = factory::create_category(db).await?;
    let quick = factory::create_category(db).await?;
    let recipe = factory::recipe::RecipeFactory::new(db, user.id)
        .categories(vec![soups.id, quick.id])
        .build()
        .await?;

    let repo = CategoryRepository::new(db);
    assert!(repo.delete(soups.id).await?);

    let links = entity::prelude::RecipeCategory::find()
        .filter(entity::recipe_category::Column::RecipeId.eq(recipe.id))
        .all(db)
        .await?;
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].category_id, quick.id);

    let orphaned = entity::prelude::RecipeCategory::find()
        .filter(entity::recipe_category::Column::CategoryId.eq(soups.id))
        .count(db)
        .await?;
    assert_eq!(orphaned, 0);

    assert!(entity::prelude::Recipe::find_by_id(recipe.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a nonexistent category.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);

    assert!(!repo.delete(99999).await?);

    Ok(())
}

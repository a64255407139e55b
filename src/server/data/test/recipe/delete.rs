use super::*;

/// Tests deleting a recipe cascades to its category links.
///
/// Expected: Ok(true) with links removed and category kept
#[tokio::test]
async fn deletes_recipe_cascades_to_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, category, recipe) = factory::helpers::create_recipe_with_dependencies(db).await?;

    let repo = RecipeRepository::new(db);
    assert!(repo.delete(recipe.id).await?);

    let links = entity::prelude::RecipeCategory::find()
        .filter(entity::recipe_category::Column::RecipeId.eq(recipe.id))
        .all(db)
        .await?;
    assert!(links.is_empty());

    assert!(entity::prelude::Category::find_by_id(category.id)
        .one(db)
        .await?
        .is_some());
    assert!(!repo.delete(recipe.id).await?);

    Ok(())
}

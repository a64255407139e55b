use super::*;

/// Tests fetching a set of recipes by ID.
///
/// Expected: Ok with known recipes ordered by ID and unknown IDs skipped
#[tokio::test]
async fn returns_known_recipes_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let first = factory::create_recipe(db, user.id).await?;
    let second = factory::create_recipe(db, user.id).await?;
    let third = factory::create_recipe(db, user.id).await?;

    let repo = RecipeRepository::new(db);
    let recipes = repo.get_by_ids(&[third.id, 99999, first.id]).await?;

    let ids: Vec<i32> = recipes.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![first.id, third.id]);

    let all_ids = repo.get_all_ids().await?;
    assert_eq!(all_ids, vec![first.id, second.id, third.id]);

    assert!(repo.get_by_ids(&[]).await?.is_empty());

    Ok(())
}

/// Tests that batched category resolution assigns links to the right recipe.
///
/// Expected: Ok with each recipe carrying only its own categories
#[tokio::test]
async fn resolves_categories_per_recipe() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let soups = factory::create_category(db).await?;
    let mains = factory::create_category(db).await?;

    let soup = factory::recipe::RecipeFactory::new(db, user.id)
        .categories(vec![soups.id])
        .build()
        .await?;
    let stew = factory::recipe::RecipeFactory::new(db, user.id)
        .categories(vec![soups.id, mains.id])
        .build()
        .await?;
    let plain = factory::create_recipe(db, user.id).await?;

    let repo = RecipeRepository::new(db);
    let recipes = repo.get_all().await?;

    assert_eq!(recipes.len(), 3);
    assert_eq!(recipes[0].id, soup.id);
    assert_eq!(recipes[0].category_ids(), vec![soups.id]);
    assert_eq!(recipes[1].id, stew.id);
    assert_eq!(recipes[1].category_ids(), vec![soups.id, mains.id]);
    assert_eq!(recipes[2].id, plain.id);
    assert!(recipes[2].categories.is_empty());

    Ok(())
}

use super::*;

/// Tests filtering recipes through the category join table.
///
/// Expected: Ok with only recipes linked to the category, each listed once
#[tokio::test]
async fn finds_recipes_linked_to_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let desserts = factory::create_category(db).await?;
    let quick = factory::create_category(db).await?;

    let cake = factory::recipe::RecipeFactory::new(db, user.id)
        .categories(vec![desserts.id, quick.id])
        .build()
        .await?;
    factory::recipe::RecipeFactory::new(db, user.id)
        .categories(vec![quick.id])
        .build()
        .await?;

    let repo = RecipeRepository::new(db);
    let recipes = repo.find_by_category(desserts.id).await?;

    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].id, cake.id);
    // The filter must not narrow the categories reported for the recipe
    assert_eq!(recipes[0].category_ids(), vec![desserts.id, quick.id]);

    assert_eq!(repo.find_by_category(quick.id).await?.len(), 2);
    assert!(repo.find_by_category(99999).await?.is_empty());

    Ok(())
}

/// Tests filtering recipes by author.
///
/// Expected: Ok with only that author's recipes
#[tokio::test]
async fn finds_recipes_by_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let mine = factory::create_recipe(db, alice.id).await?;
    factory::create_recipe(db, bob.id).await?;

    let repo = RecipeRepository::new(db);
    let recipes = repo.find_by_author(alice.id).await?;

    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].id, mine.id);

    Ok(())
}

use super::*;

/// Tests a partial update.
///
/// Verifies that only the supplied fields change and that links stay in place
/// when no category set is given.
///
/// Expected: Ok(Some) with steps changed and everything else kept
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, category, recipe) = factory::helpers::create_recipe_with_dependencies(db).await?;

    let repo = RecipeRepository::new(db);
    let updated = repo
        .update(UpdateRecipeParams {
            id: recipe.id,
            steps: Some("Stir slowly.".to_string()),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.steps, "Stir slowly.");
    assert_eq!(updated.title, recipe.title);
    assert_eq!(updated.description, recipe.description);
    assert_eq!(updated.cooking_time, recipe.cooking_time);

    let reloaded = repo.get_by_id(recipe.id).await?.unwrap();
    assert_eq!(reloaded.category_ids(), vec![category.id]);

    Ok(())
}

/// Tests replacing the category set during an update.
///
/// Expected: Ok(Some) with old links removed and new links stored
#[tokio::test]
async fn replaces_categories_when_supplied() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, old, recipe) = factory::helpers::create_recipe_with_dependencies(db).await?;
    let new_a = factory::create_category(db).await?;
    let new_b = factory::create_category(db).await?;

    let repo = RecipeRepository::new(db);
    repo.update(UpdateRecipeParams {
        id: recipe.id,
        categories: Some(vec![new_a.id, new_b.id]),
        ..Default::default()
    })
    .await?;

    let reloaded = repo.get_by_id(recipe.id).await?.unwrap();
    assert_eq!(reloaded.category_ids(), vec![new_a.id, new_b.id]);
    assert!(!reloaded.category_ids().contains(&old.id));

    repo.update(UpdateRecipeParams {
        id: recipe.id,
        categories: Some(vec![]),
        ..Default::default()
    })
    .await?;

    let cleared = repo.get_by_id(recipe.id).await?.unwrap();
    assert!(cleared.categories.is_empty());

    Ok(())
}

/// Tests updating a nonexistent recipe.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_recipe() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RecipeRepository::new(db);
    let result = repo
        .update(UpdateRecipeParams {
            id: 99999,
            title: Some("Nothing".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}

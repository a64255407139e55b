use super::*;

/// Tests substring search over the ingredient text.
///
/// Expected: Ok with matching recipes regardless of letter case
#[tokio::test]
async fn finds_recipes_containing_ingredient() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let pancakes = factory::recipe::RecipeFactory::new(db, user.id)
        .ingredients("Flour, eggs, milk")
        .build()
        .await?;
    let bread = factory::recipe::RecipeFactory::new(db, user.id)
        .ingredients("flour, yeast, water")
        .build()
        .await?;
    factory::recipe::RecipeFactory::new(db, user.id)
        .ingredients("rice, water")
        .build()
        .await?;

    let repo = RecipeRepository::new(db);
    let ids: Vec<i32> = repo
        .find_by_ingredient("flour")
        .await?
        .into_iter()
        .map(|r| r.id)
        .collect();

    assert_eq!(ids, vec![pancakes.id, bread.id]);
    assert!(repo.find_by_ingredient("saffron").await?.is_empty());

    Ok(())
}

/// Tests search text containing SQL wildcard characters.
///
/// Expected: `%` and `_` only match recipes that contain them literally
#[tokio::test]
async fn treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let percent = factory::recipe::RecipeFactory::new(db, user.id)
        .ingredients("cream 30% fat")
        .build()
        .await?;
    let underscore = factory::recipe::RecipeFactory::new(db, user.id)
        .ingredients("sugar_free syrup")
        .build()
        .await?;
    factory::recipe::RecipeFactory::new(db, user.id)
        .ingredients("flour")
        .build()
        .await?;

    let repo = RecipeRepository::new(db);

    let found = repo.find_by_ingredient("%").await?;
    assert_eq!(found.iter().map(|r| r.id).collect::<Vec<_>>(), vec![percent.id]);

    let found = repo.find_by_ingredient("_").await?;
    assert_eq!(found.iter().map(|r| r.id).collect::<Vec<_>>(), vec![underscore.id]);

    Ok(())
}

/// Tests case folding outside ASCII.
///
/// Expected: lowercase Cyrillic query matches capitalised ingredient text
#[tokio::test]
async fn ignores_case_of_non_ascii_letters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let soup = factory::recipe::RecipeFactory::new(db, user.id)
        .ingredients("Соль, вода")
        .build()
        .await?;

    let found = RecipeRepository::new(db).find_by_ingredient("соль").await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, soup.id);

    Ok(())
}

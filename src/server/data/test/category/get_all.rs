use super::*;

/// Tests listing categories.
///
/// Expected: Ok with every category ordered by name
#[tokio::test]
async fn returns_categories_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::create_category_named(db, "Soups").await?;
    factory::category::create_category_named(db, "Breakfast").await?;
    factory::category::create_category_named(db, "Desserts").await?;

    let repo = CategoryRepository::new(db);
    let names: Vec<String> = repo.get_all().await?.into_iter().map(|c| c.name).collect();

    assert_eq!(names, vec!["Breakfast", "Desserts", "Soups"]);

    Ok(())
}

/// Tests listing categories on an empty table.
///
/// Expected: Ok with empty vec
#[tokio::test]
async fn returns_empty_when_no_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}

use super::*;

/// Tests creating a category.
///
/// Expected: Ok with category stored under the given name
#[tokio::test]
async fn creates_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let category = repo
        .create(CreateCategoryParam {
            name: "Desserts".to_string(),
        })
        .await?;

    assert_eq!(category.name, "Desserts");
    assert!(repo.name_exists("Desserts").await?);

    let fetched = repo.get_by_id(category.id).await?;
    assert_eq!(fetched, Some(category));

    Ok(())
}

/// Tests that category names are unique.
///
/// Expected: Err recognised as a unique constraint violation
#[tokio::test]
async fn fails_on_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::create_category_named(db, "Soups").await?;

    let repo = CategoryRepository::new(db);
    let result = repo
        .create(CreateCategoryParam {
            name: "Soups".to_string(),
        })
        .await;

    let err = result.unwrap_err();
    assert!(is_unique_violation(&err));

    Ok(())
}

/// Tests that failures other than duplicates are not mistaken for them.
///
/// Expected: false for a foreign key failure
#[tokio::test]
async fn foreign_key_failure_is_not_unique_violation() -> Result<(), DbErr> {
    use crate::server::{data::recipe::RecipeRepository, model::recipe::CreateRecipeParams};

    let test = TestBuilder::new()
        .with_recipe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let err = RecipeRepository::new(db)
        .create(CreateRecipeParams {
            title: "Orphan".to_string(),
            description: "No author".to_string(),
            steps: "Boil.".to_string(),
            cooking_time: 5,
            image: None,
            ingredients: String::new(),
            author_id: 424242,
            categories: vec![],
        })
        .await
        .unwrap_err();

    assert!(!is_unique_violation(&err));

    Ok(())
}

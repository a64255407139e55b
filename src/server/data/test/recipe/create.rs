use super::*;

/// Tests creating a recipe with category links.
///
/// Verifies that the recipe row and one link per category are stored and that
/// reading it back resolves the categories.
///
/// Expected: Ok with recipe and links created
#[tokio::test]
async fn creates_recipe_with_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let soups = factory::category::create_category_named(db, "Soups").await?;
    let quick = factory::category::create_category_named(db, "Quick").await?;

    let repo = RecipeRepository::new(db);
    let created = repo
        .create(create_params(user.id, "Broth", vec![quick.id, soups.id]))
        .await?;

    assert_eq!(created.title, "Broth");
    assert_eq!(created.author_id, user.id);

    let recipe = repo.get_by_id(created.id).await?.unwrap();
    assert_eq!(recipe.category_ids(), vec![soups.id, quick.id]);
    assert_eq!(recipe.categories[0].name, "Soups");

    Ok(())
}

/// Tests creating a recipe without categories.
///
/// Expected: Ok with recipe and no links
#[tokio::test]
async fn creates_recipe_without_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = RecipeRepository::new(db);
    let created = repo.create(create_params(user.id, "Toast", vec![])).await?;

    let recipe = repo.get_by_id(created.id).await?.unwrap();
    assert!(recipe.categories.is_empty());

    Ok(())
}

/// Tests that a failed link insert inside a transaction leaves no recipe behind.
///
/// Verifies that linking an unknown category violates the foreign key and that
/// dropping the uncommitted transaction rolls back the recipe row.
///
/// Expected: Err and no recipe stored
#[tokio::test]
async fn rolls_back_recipe_when_link_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let txn = db.begin().await?;
    let result = RecipeRepository::new(&txn)
        .create(create_params(user.id, "Ghost", vec![424242]))
        .await;
    assert!(result.is_err());
    drop(txn);

    let stored = entity::prelude::Recipe::find()
        .filter(entity::recipe::Column::Title.eq("Ghost"))
        .one(db)
        .await?;
    assert!(stored.is_none());

    Ok(())
}

/// Tests the schema created by the migrations against a non-positive cooking time.
///
/// Expected: Err from the CHECK constraint and no recipe row
#[tokio::test]
async fn migrated_schema_rejects_non_positive_cooking_time() -> Result<(), DbErr> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{Database, PaginatorTrait};

    let db = Database::connect("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;

    let user = factory::create_user(&db).await?;

    let mut params = create_params(user.id, "Instant", vec![]);
    params.cooking_time = 0;

    let result = RecipeRepository::new(&db).create(params).await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Recipe::find().count(&db).await?, 0);

    Ok(())
}

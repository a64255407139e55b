use super::*;

/// Tests reporting category IDs that do not exist.
///
/// Expected: Ok with only the unknown IDs, in input order
#[tokio::test]
async fn returns_unknown_ids_in_input_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_category(db).await?;
    let b = factory::create_category(db).await?;

    let repo = CategoryRepository::new(db);
    let missing = repo.find_missing(&[900, a.id, 800, b.id]).await?;

    assert_eq!(missing, vec![900, 800]);

    Ok(())
}

/// Tests that no IDs are missing when all exist or none are given.
///
/// Expected: Ok with empty vec
#[tokio::test]
async fn returns_empty_when_all_exist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_category(db).await?;

    let repo = CategoryRepository::new(db);

    assert!(repo.find_missing(&[a.id]).await?.is_empty());
    assert!(repo.find_missing(&[]).await?.is_empty());

    Ok(())
}

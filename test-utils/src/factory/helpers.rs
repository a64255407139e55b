//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an author, a category and a recipe linked to that category.
///
/// # Returns
/// - `Ok((user, category, recipe))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_recipe_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::category::Model,
        entity::recipe::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let category = crate::factory::category::create_category(db).await?;
    let recipe = crate::factory::recipe::RecipeFactory::new(db, user.id)
        .categories(vec![category.id])
        .build()
        .await?;

    Ok((user, category, recipe))
}

use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000002_create_category_table::Category;
use super::m20250301_000003_create_recipe_table::Recipe;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RecipeCategory::Table)
                    .if_not_exists()
                    .col(integer(RecipeCategory::RecipeId))
                    .col(integer(RecipeCategory::CategoryId))
                    .primary_key(
                        Index::create()
                            .col(RecipeCategory::RecipeId)
                            .col(RecipeCategory::CategoryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recipe_category_recipe_id")
                            .from(RecipeCategory::Table, RecipeCategory::RecipeId)
                            .to(Recipe::Table, Recipe::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recipe_category_category_id")
                            .from(RecipeCategory::Table, RecipeCategory::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_recipe_category_category_id")
                    .table(RecipeCategory::Table)
                    .col(RecipeCategory::CategoryId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RecipeCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RecipeCategory {
    Table,
    RecipeId,
    CategoryId,
}

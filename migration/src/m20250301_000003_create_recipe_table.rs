use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Recipe::Table)
                    .if_not_exists()
                    .col(pk_auto(Recipe::Id))
                    .col(string_len(Recipe::Title, 200))
                    .col(text(Recipe::Description))
                    .col(text(Recipe::Steps))
                    .col(
                        integer(Recipe::CookingTime)
                            .check(Expr::col(Recipe::CookingTime).gt(0)),
                    )
                    .col(string_null(Recipe::Image))
                    .col(text(Recipe::Ingredients))
                    .col(integer(Recipe::AuthorId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recipe_author_id")
                            .from(Recipe::Table, Recipe::AuthorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_recipe_title")
                    .table(Recipe::Table)
                    .col(Recipe::Title)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Recipe::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Recipe {
    Table,
    Id,
    Title,
    Description,
    Steps,
    CookingTime,
    Image,
    Ingredients,
    AuthorId,
}

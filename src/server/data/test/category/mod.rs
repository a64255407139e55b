use crate::server::{
    data::{category::CategoryRepository, is_unique_violation},
    model::category::CreateCategoryParam,
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_missing;
mod get_all;

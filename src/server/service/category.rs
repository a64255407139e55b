use sea_orm::DatabaseConnection;

use crate::server::{
    data::{category::CategoryRepository, is_unique_violation},
    error::AppError,
    form::FormErrors,
    model::category::{Category, CreateCategoryParam},
};

const NAME_TAKEN: &str = "Category with this Name already exists.";

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every category ordered by name
    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        let categories = CategoryRepository::new(self.db).get_all().await?;
        Ok(categories)
    }

    /// Creates a category from an already validated name
    ///
    /// # Returns
    /// - `Ok(Category)` - Created category
    /// - `Err(AppError::ValidationErr)` - A category with that name exists
    pub async fn create(&self, name: String) -> Result<Category, AppError> {
        let repo = CategoryRepository::new(self.db);

        if repo.name_exists(&name).await? {
            return Err(name_taken().into());
        }

        match repo.create(CreateCategoryParam { name }).await {
            Ok(category) => Ok(category),
            Err(err) if is_unique_violation(&err) => Err(name_taken().into()),
            Err(err) => Err(err.into()),
        }
    }
}

fn name_taken() -> FormErrors {
    let mut errors = FormErrors::new();
    errors.add("name", NAME_TAKEN);
    errors
}

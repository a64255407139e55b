pub use super::category::Entity as Category;
pub use super::recipe::Entity as Recipe;
pub use super::recipe_category::Entity as RecipeCategory;
pub use super::user::Entity as User;

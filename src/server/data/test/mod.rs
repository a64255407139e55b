mod category;
mod recipe;
mod user;

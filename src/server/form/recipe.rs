//! Recipe form and API payload validation.

use serde::Serialize;

use crate::{
    model::recipe::{CreateRecipeDto, UpdateRecipeDto},
    server::{
        form::{max_chars, required, FormErrors},
        model::recipe::{dedup_ids, Recipe},
    },
};

pub const TITLE_MAX_CHARS: usize = 200;

/// Text fields of a submitted recipe form.
///
/// Collected from a multipart body, so every value arrives as a string; the image is
/// handled separately by the media store.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecipeForm {
    pub title: String,
    pub description: String,
    pub steps: String,
    pub cooking_time: String,
    pub ingredients: String,
    /// Raw values of the checked category boxes.
    pub categories: Vec<String>,
}

/// Recipe input that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidRecipe {
    pub title: String,
    pub description: String,
    pub steps: String,
    pub cooking_time: i32,
    pub ingredients: String,
    /// Sorted and deduplicated; existence is checked by the recipe service.
    pub categories: Vec<i32>,
}

impl RecipeForm {
    /// Prefills the edit form from a stored recipe.
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            steps: recipe.steps.clone(),
            cooking_time: recipe.cooking_time.to_string(),
            ingredients: recipe.ingredients.clone(),
            categories: recipe
                .categories
                .iter()
                .map(|c| c.id.to_string())
                .collect(),
        }
    }

    /// Category IDs that should render as checked.
    pub fn selected_categories(&self) -> Vec<i32> {
        self.categories
            .iter()
            .filter_map(|value| value.trim().parse().ok())
            .collect()
    }

    /// Stores a named multipart text field. Unknown names are ignored.
    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "title" => self.title = value,
            "description" => self.description = value,
            "steps" => self.steps = value,
            "cooking_time" => self.cooking_time = value,
            "ingredients" => self.ingredients = value,
            "categories" => self.categories.push(value),
            _ => {}
        }
    }
}

pub fn validate(form: &RecipeForm) -> Result<ValidRecipe, FormErrors> {
    let mut errors = FormErrors::new();

    let title = required(&mut errors, "title", &form.title);
    max_chars(&mut errors, "title", &title, TITLE_MAX_CHARS);
    let description = required(&mut errors, "description", &form.description);
    let steps = required(&mut errors, "steps", &form.steps);

    let cooking_time = match form.cooking_time.trim() {
        "" => {
            errors.add("cooking_time", super::REQUIRED);
            0
        }
        raw => match raw.parse::<i32>() {
            Ok(minutes) => {
                check_cooking_time(&mut errors, minutes);
                minutes
            }
            Err(_) => {
                errors.add("cooking_time", "Enter a whole number.");
                0
            }
        },
    };

    let mut categories = Vec::with_capacity(form.categories.len());
    for value in &form.categories {
        match value.trim().parse::<i32>() {
            Ok(id) => categories.push(id),
            Err(_) => errors.add(
                "categories",
                format!("Select a valid choice. {} is not one of the available choices.", value),
            ),
        }
    }

    errors.finish(ValidRecipe {
        title,
        description,
        steps,
        cooking_time,
        ingredients: form.ingredients.trim().to_string(),
        categories: dedup_ids(categories),
    })
}

/// Validates a JSON creation payload.
pub fn validate_create_payload(dto: &CreateRecipeDto) -> Result<(), FormErrors> {
    let mut errors = FormErrors::new();

    let title = required(&mut errors, "title", &dto.title);
    max_chars(&mut errors, "title", &title, TITLE_MAX_CHARS);
    required(&mut errors, "description", &dto.description);
    required(&mut errors, "steps", &dto.steps);
    check_cooking_time(&mut errors, dto.cooking_time);

    errors.finish(())
}

/// Validates a JSON partial update. Supplied text fields may not be blank.
pub fn validate_update_payload(dto: &UpdateRecipeDto) -> Result<(), FormErrors> {
    let mut errors = FormErrors::new();

    if let Some(description) = &dto.description {
        required(&mut errors, "description", description);
    }
    if let Some(steps) = &dto.steps {
        required(&mut errors, "steps", steps);
    }

    errors.finish(())
}

/// Adds an error unless the cooking time is at least one minute.
pub(crate) fn check_cooking_time(errors: &mut FormErrors, minutes: i32) {
    if minutes <= 0 {
        errors.add(
            "cooking_time",
            "Ensure this value is greater than or equal to 1.",
        );
    }
}

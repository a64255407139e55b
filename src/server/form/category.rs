//! Category creation form.

use serde::{Deserialize, Serialize};

use crate::server::form::{max_chars, required, FormErrors};

pub const NAME_MAX_CHARS: usize = 100;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryForm {
    #[serde(default)]
    pub name: String,
}

/// Validates the category name and returns it trimmed.
///
/// Uniqueness needs the database and is checked by the category service.
pub fn validate(form: &CategoryForm) -> Result<String, FormErrors> {
    let mut errors = FormErrors::new();

    let name = required(&mut errors, "name", &form.name);
    max_chars(&mut errors, "name", &name, NAME_MAX_CHARS);

    errors.finish(name)
}

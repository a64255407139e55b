//! Registration and login forms.

use serde::{Deserialize, Serialize};

use crate::server::form::{max_chars, required, FormErrors, REQUIRED};

pub const USERNAME_MAX_CHARS: usize = 150;

/// Submitted registration form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    /// Never echoed back into the page.
    #[serde(default, skip_serializing)]
    pub password1: String,
    #[serde(default, skip_serializing)]
    pub password2: String,
}

/// Registration input that passed validation. The password is still clear text.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Submitted login form; `next` carries the page that required the login.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing)]
    pub password: String,
    #[serde(default)]
    pub next: Option<String>,
}

/// Validates a registration form.
///
/// Username availability needs the database and is checked by the auth service.
pub fn validate_registration(form: &RegisterForm) -> Result<Registration, FormErrors> {
    let mut errors = FormErrors::new();

    let username = required(&mut errors, "username", &form.username);
    max_chars(&mut errors, "username", &username, USERNAME_MAX_CHARS);

    let email = required(&mut errors, "email", &form.email);
    if !email.is_empty() && !is_plausible_email(&email) {
        errors.add("email", "Enter a valid email address.");
    }

    if form.password1.is_empty() {
        errors.add("password1", REQUIRED);
    }
    if form.password2.is_empty() {
        errors.add("password2", REQUIRED);
    }
    if !form.password1.is_empty() && form.password1 != form.password2 {
        errors.add("password2", "The two password fields didn't match.");
    }

    errors.finish(Registration {
        username,
        email,
        password: form.password1.clone(),
    })
}

/// Validates that both login fields were filled in.
pub fn validate_login(form: &LoginForm) -> Result<(String, String), FormErrors> {
    let mut errors = FormErrors::new();

    let username = required(&mut errors, "username", &form.username);
    if form.password.is_empty() {
        errors.add("password", REQUIRED);
    }

    errors.finish((username, form.password.clone()))
}

/// One `@` with a non-empty local part and a dotted domain.
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain.contains('.')
        && domain.split('.').all(|part| !part.is_empty())
}

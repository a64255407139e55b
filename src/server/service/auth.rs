//! Registration, login and password hashing.

use argon2::{
    password_hash::{
        self, rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    },
    Argon2,
};
use sea_orm::DatabaseConnection;
use std::sync::LazyLock;

use crate::server::{
    data::{is_unique_violation, user::UserRepository},
    error::{auth::AuthError, AppError},
    form::{auth::Registration, FormErrors},
    model::user::{CreateUserParam, User},
};

const USERNAME_TAKEN: &str = "A user with that username already exists.";

/// Hash checked against when the username is unknown, so a failed login costs one
/// Argon2 verification whether or not the user exists.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("cookbook-unknown-user").ok());

/// Hashes a password with Argon2id and a random salt into a PHC string.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;

    Ok(hash.to_string())
}

/// Checks a password against a stored PHC string.
///
/// The parameters encoded in the hash are used, so hashes created with other
/// Argon2 settings still verify.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(AppError::PasswordHashErr)` - Stored hash is malformed
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(password_hash)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(err) => Err(err.into()),
    }
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user from a validated registration.
    ///
    /// # Returns
    /// - `Ok(User)` - The registered user
    /// - `Err(AppError::ValidationErr)` - Username already taken
    /// - `Err(AppError)` - Hashing or database failure
    pub async fn register(&self, registration: Registration) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.username_exists(&registration.username).await? {
            return Err(username_taken().into());
        }

        let password_hash = hash_password(&registration.password)?;

        let result = user_repo
            .create(CreateUserParam {
                username: registration.username,
                email: registration.email,
                password_hash,
            })
            .await;

        match result {
            Ok(user) => {
                tracing::info!("Registered user {} ({})", user.username, user.id);
                Ok(user)
            }
            // Lost a race with a concurrent registration of the same name
            Err(err) if is_unique_violation(&err) => Err(username_taken().into()),
            Err(err) => Err(err.into()),
        }
    }

    /// Verifies login credentials. Used by the login page and by Basic auth on API writes.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match
    /// - `Err(AuthError::InvalidCredentials)` - Unknown username or wrong password
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AppError> {
        let Some(credentials) = UserRepository::new(self.db)
            .find_credentials_by_username(username)
            .await?
        else {
            if let Some(hash) = DUMMY_HASH.as_deref() {
                let _ = verify_password(password, hash);
            }
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &credentials.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(credentials.user)
    }
}

fn username_taken() -> FormErrors {
    let mut errors = FormErrors::new();
    errors.add("username", USERNAME_TAKEN);
    errors
}

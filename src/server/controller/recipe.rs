//! Recipe pages: home, list, detail and the create/edit forms.

use axum::{
    extract::{Multipart, Path, Query, State},
    http::Uri,
    response::{Html, IntoResponse, Redirect, Response},
};
use rand::{rngs::StdRng, SeedableRng};
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    controller::require_login,
    error::{web::WebError, AppError},
    form::{
        recipe::{self as recipe_form, RecipeForm, ValidRecipe},
        FormErrors,
    },
    media::{image_extension, ImageUpload},
    middleware::{auth::AuthGuard, session::FlashSession},
    model::{
        recipe::{CreateRecipeParams, UpdateRecipeParams},
        user::User,
    },
    service::{category::CategoryService, recipe::RecipeService},
    state::AppState,
    util::parse::parse_optional_id,
    view,
};

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Raw filter value; empty or non-numeric means no filter.
    pub category: Option<String>,
}

pub async fn home(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, WebError> {
    let user = AuthGuard::new(&state.db, &session).current_user().await?;

    let mut rng = StdRng::from_os_rng();
    let recipes = RecipeService::new(&state.db).home(&mut rng).await?;

    let mut context = view::page_context(&session, user.as_ref()).await?;
    context.insert("recipes", &recipes);

    Ok(view::render("index.html", &context)?)
}

pub async fn list(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ListParams>,
) -> Result<Html<String>, WebError> {
    let user = AuthGuard::new(&state.db, &session).current_user().await?;

    let category = parse_optional_id(params.category.as_deref());
    let list = RecipeService::new(&state.db).list(category).await?;

    let mut context = view::page_context(&session, user.as_ref()).await?;
    context.insert("recipes", &list.recipes);
    context.insert("categories", &list.categories);
    context.insert("selected_category", &list.selected_category);

    Ok(view::render("recipe_list.html", &context)?)
}

pub async fn detail(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
) -> Result<Html<String>, WebError> {
    let user = AuthGuard::new(&state.db, &session).current_user().await?;

    let detail = RecipeService::new(&state.db).detail(recipe_id).await?;
    let is_author = user
        .as_ref()
        .is_some_and(|u| u.id == detail.recipe.author_id);

    let mut context = view::page_context(&session, user.as_ref()).await?;
    context.insert("recipe", &detail.recipe);
    context.insert("author", &detail.author);
    context.insert("is_author", &is_author);

    Ok(view::render("recipe_detail.html", &context)?)
}

pub async fn create_form(
    State(state): State<AppState>,
    session: Session,
    uri: Uri,
) -> Result<Response, WebError> {
    let user = require_login(&state.db, &session, &uri).await?;

    render_form(&state, &session, &user, &RecipeForm::default(), None, None, None).await
}

pub async fn create(
    State(state): State<AppState>,
    session: Session,
    uri: Uri,
    multipart: Multipart,
) -> Result<Response, WebError> {
    let user = require_login(&state.db, &session, &uri).await?;

    let (form, image) = read_form(multipart).await?;
    let valid = match check_form(&form, image.as_ref()) {
        Ok(valid) => valid,
        Err(errors) => {
            return render_form(&state, &session, &user, &form, Some(&errors), None, None).await
        }
    };

    let image_path = match &image {
        Some(upload) => Some(state.images.save(upload).await?),
        None => None,
    };

    let params = CreateRecipeParams {
        title: valid.title,
        description: valid.description,
        steps: valid.steps,
        cooking_time: valid.cooking_time,
        image: image_path.clone(),
        ingredients: valid.ingredients,
        author_id: user.id,
        categories: valid.categories,
    };

    let recipe = match RecipeService::new(&state.db).create(params).await {
        Ok(recipe) => recipe,
        Err(err) => {
            if let Some(path) = &image_path {
                discard_image(&state, path).await;
            }
            return match err {
                // A category was deleted while the form was open
                AppError::NotFound(msg) => {
                    let errors = category_error(msg);
                    render_form(&state, &session, &user, &form, Some(&errors), None, None).await
                }
                err => Err(err.into()),
            };
        }
    };

    FlashSession::new(&session)
        .success("Recipe created successfully.")
        .await?;

    Ok(Redirect::to(&format!("/recipe/{}/", recipe.id)).into_response())
}

pub async fn edit_form(
    State(state): State<AppState>,
    session: Session,
    uri: Uri,
    Path(recipe_id): Path<i32>,
) -> Result<Response, WebError> {
    let user = require_login(&state.db, &session, &uri).await?;

    let recipe = RecipeService::new(&state.db)
        .get_owned(recipe_id, &user)
        .await?;
    let form = RecipeForm::from_recipe(&recipe);

    render_form(
        &state,
        &session,
        &user,
        &form,
        None,
        Some(recipe.id),
        recipe.image.as_deref(),
    )
    .await
}

pub async fn edit(
    State(state): State<AppState>,
    session: Session,
    uri: Uri,
    Path(recipe_id): Path<i32>,
    multipart: Multipart,
) -> Result<Response, WebError> {
    let user = require_login(&state.db, &session, &uri).await?;

    let service = RecipeService::new(&state.db);
    let existing = service.get_owned(recipe_id, &user).await?;

    let (form, image) = read_form(multipart).await?;
    let valid = match check_form(&form, image.as_ref()) {
        Ok(valid) => valid,
        Err(errors) => {
            return render_form(
                &state,
                &session,
                &user,
                &form,
                Some(&errors),
                Some(existing.id),
                existing.image.as_deref(),
            )
            .await
        }
    };

    let image_path = match &image {
        Some(upload) => Some(state.images.save(upload).await?),
        None => None,
    };

    let params = UpdateRecipeParams {
        id: existing.id,
        title: Some(valid.title),
        description: Some(valid.description),
        steps: Some(valid.steps),
        cooking_time: Some(valid.cooking_time),
        image: image_path.clone(),
        ingredients: Some(valid.ingredients),
        categories: Some(valid.categories),
    };

    let recipe = match service.update(params, &user).await {
        Ok(recipe) => recipe,
        Err(err) => {
            if let Some(path) = &image_path {
                discard_image(&state, path).await;
            }
            return match err {
                AppError::NotFound(msg) if msg.starts_with("Category") => {
                    let errors = category_error(msg);
                    render_form(
                        &state,
                        &session,
                        &user,
                        &form,
                        Some(&errors),
                        Some(existing.id),
                        existing.image.as_deref(),
                    )
                    .await
                }
                err => Err(err.into()),
            };
        }
    };

    // The replaced image is no longer referenced
    if let (Some(_), Some(old)) = (&image_path, &existing.image) {
        discard_image(&state, old).await;
    }

    FlashSession::new(&session)
        .success("Recipe updated successfully.")
        .await?;

    Ok(Redirect::to(&format!("/recipe/{}/", recipe.id)).into_response())
}

/// Removes an image file that no recipe references. Failures are only logged so they
/// never mask the outcome of the request.
async fn discard_image(state: &AppState, path: &str) {
    if let Err(err) = state.images.remove(path).await {
        tracing::warn!("Failed to remove image {}: {}", path, err);
    }
}

/// Reads the text fields and the optional image of a recipe form.
///
/// A file input left empty arrives as a part without a file name and is ignored.
async fn read_form(mut multipart: Multipart) -> Result<(RecipeForm, Option<ImageUpload>), WebError> {
    let mut form = RecipeForm::default();
    let mut image = None;

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == "image" {
            let has_file = field.file_name().is_some_and(|f| !f.is_empty());
            let bytes = field.bytes().await?;

            if has_file {
                image = Some(ImageUpload { bytes });
            }
        } else {
            form.set_field(&name, field.text().await?);
        }
    }

    Ok((form, image))
}

/// Validates the text fields and the image together so every problem is reported at once.
fn check_form(form: &RecipeForm, image: Option<&ImageUpload>) -> Result<ValidRecipe, FormErrors> {
    let (valid, mut errors) = match recipe_form::validate(form) {
        Ok(valid) => (Some(valid), FormErrors::new()),
        Err(errors) => (None, errors),
    };

    if let Some(Err(message)) = image.map(image_extension) {
        errors.add("image", message);
    }

    match valid {
        Some(valid) if errors.is_empty() => Ok(valid),
        _ => Err(errors),
    }
}

fn category_error(message: String) -> FormErrors {
    let mut errors = FormErrors::new();
    errors.add("categories", message);
    errors
}

async fn render_form(
    state: &AppState,
    session: &Session,
    user: &User,
    form: &RecipeForm,
    errors: Option<&FormErrors>,
    recipe_id: Option<i32>,
    current_image: Option<&str>,
) -> Result<Response, WebError> {
    let categories = CategoryService::new(&state.db).get_all().await?;

    let mut context = view::page_context(session, Some(user)).await?;
    context.insert("form", form);
    context.insert("errors", &errors);
    context.insert("categories", &categories);
    context.insert("selected_categories", &form.selected_categories());
    context.insert("recipe_id", &recipe_id);
    context.insert("current_image", &current_image);

    Ok(view::render("recipe_form.html", &context)?.into_response())
}

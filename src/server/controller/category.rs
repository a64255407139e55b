use axum::{
    extract::State,
    http::Uri,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use tower_sessions::Session;

use crate::server::{
    controller::require_login,
    error::{web::WebError, AppError},
    form::{
        category::{self as category_form, CategoryForm},
        FormErrors,
    },
    middleware::session::FlashSession,
    model::user::User,
    service::category::CategoryService,
    state::AppState,
    view,
};

pub async fn create_form(
    State(state): State<AppState>,
    session: Session,
    uri: Uri,
) -> Result<Response, WebError> {
    let user = require_login(&state.db, &session, &uri).await?;

    render_form(&session, &user, &CategoryForm::default(), None).await
}

/// Creates a category, then sends the user back to the recipe form to use it.
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    uri: Uri,
    Form(form): Form<CategoryForm>,
) -> Result<Response, WebError> {
    let user = require_login(&state.db, &session, &uri).await?;

    let name = match category_form::validate(&form) {
        Ok(name) => name,
        Err(errors) => return render_form(&session, &user, &form, Some(&errors)).await,
    };

    let category = match CategoryService::new(&state.db).create(name).await {
        Ok(category) => category,
        Err(AppError::ValidationErr(errors)) => {
            return render_form(&session, &user, &form, Some(&errors)).await
        }
        Err(err) => return Err(err.into()),
    };

    FlashSession::new(&session)
        .success(format!("Category \"{}\" created.", category.name))
        .await?;

    Ok(Redirect::to("/recipe/create/").into_response())
}

async fn render_form(
    session: &Session,
    user: &User,
    form: &CategoryForm,
    errors: Option<&FormErrors>,
) -> Result<Response, WebError> {
    let mut context = view::page_context(session, Some(user)).await?;
    context.insert("form", form);
    context.insert("errors", &errors);

    Ok(view::render("category_form.html", &context)?.into_response())
}

//! Server-rendered HTML pages.
//!
//! Templates are compiled into the binary with `include_str!` and parsed once into a
//! shared `Tera` instance. `check_templates` runs at startup so a broken template stops
//! the server before it accepts requests instead of failing the first page view.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::sync::LazyLock;
use tera::{Context, Tera};
use tower_sessions::Session;

use crate::server::{
    error::AppError,
    middleware::session::FlashSession,
    model::user::User,
};

const TEMPLATE_SOURCES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../templates/base.html")),
    ("macros.html", include_str!("../../templates/macros.html")),
    ("index.html", include_str!("../../templates/index.html")),
    ("recipe_list.html", include_str!("../../templates/recipe_list.html")),
    ("recipe_detail.html", include_str!("../../templates/recipe_detail.html")),
    ("recipe_form.html", include_str!("../../templates/recipe_form.html")),
    ("category_form.html", include_str!("../../templates/category_form.html")),
    ("register.html", include_str!("../../templates/register.html")),
    ("login.html", include_str!("../../templates/login.html")),
    ("error.html", include_str!("../../templates/error.html")),
];

static TEMPLATES: LazyLock<Result<Tera, tera::Error>> = LazyLock::new(|| {
    let mut tera = Tera::default();
    tera.add_raw_templates(TEMPLATE_SOURCES.iter().copied())?;
    Ok(tera)
});

fn templates() -> Result<&'static Tera, AppError> {
    TEMPLATES
        .as_ref()
        .map_err(|err| AppError::InternalError(format!("Failed to load templates: {:?}", err)))
}

/// Parses every template, failing if any of them is invalid.
pub fn check_templates() -> Result<(), AppError> {
    templates().map(|_| ())
}

/// Renders a template into an HTML response body.
pub fn render(name: &str, context: &Context) -> Result<Html<String>, AppError> {
    let html = templates()?.render(name, context)?;
    Ok(Html(html))
}

/// Builds the context shared by every page: the current user for the navigation
/// bar and the flash messages queued by the previous request.
///
/// Taking the messages removes them from the session.
pub async fn page_context(session: &Session, user: Option<&User>) -> Result<Context, AppError> {
    let messages = FlashSession::new(session).take().await?;

    let mut context = Context::new();
    context.insert("user", &user);
    context.insert("messages", &messages);

    Ok(context)
}

/// Renders the error page, falling back to plain text if rendering fails.
pub fn error_page(status: StatusCode, message: &str) -> Response {
    let mut context = Context::new();
    context.insert("user", &Option::<User>::None);
    context.insert("messages", &Vec::<String>::new());
    context.insert("status", &status.as_u16());
    context.insert("message", message);

    match render("error.html", &context) {
        Ok(html) => (status, html).into_response(),
        Err(err) => {
            tracing::error!("Failed to render error page: {}", err);
            (status, message.to_string()).into_response()
        }
    }
}

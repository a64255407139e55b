//! Registration, login and logout pages.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, web::WebError, AppError},
    form::{
        auth::{validate_login, validate_registration, LoginForm, RegisterForm},
        FormErrors,
    },
    middleware::{
        auth::AuthGuard,
        session::{AuthSession, FlashSession},
    },
    service::auth::AuthService,
    state::AppState,
    util::parse::local_redirect_target,
    view,
};

/// Message shown for any failed login; it never says which field was wrong.
const INVALID_LOGIN: &str = "Invalid username or password.";

#[derive(Debug, Default, Deserialize)]
pub struct LoginParams {
    pub next: Option<String>,
}

pub async fn register_form(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, WebError> {
    render_register(&state, &session, &RegisterForm::default(), None).await
}

pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RegisterForm>,
) -> Result<Response, WebError> {
    let registration = match validate_registration(&form) {
        Ok(registration) => registration,
        Err(errors) => return render_register(&state, &session, &form, Some(&errors)).await,
    };

    let user = match AuthService::new(&state.db).register(registration).await {
        Ok(user) => user,
        Err(AppError::ValidationErr(errors)) => {
            return render_register(&state, &session, &form, Some(&errors)).await
        }
        Err(err) => return Err(err.into()),
    };

    AuthSession::new(&session).login(user.id).await?;
    FlashSession::new(&session)
        .success("Registration successful.")
        .await?;

    Ok(Redirect::to("/").into_response())
}

pub async fn login_form(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<LoginParams>,
) -> Result<Response, WebError> {
    let form = LoginForm {
        next: params.next,
        ..Default::default()
    };

    render_login(&state, &session, &form, None).await
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, WebError> {
    let (username, password) = match validate_login(&form) {
        Ok(credentials) => credentials,
        Err(errors) => return render_login(&state, &session, &form, Some(&errors)).await,
    };

    let user = match AuthService::new(&state.db).login(&username, &password).await {
        Ok(user) => user,
        Err(AppError::AuthErr(AuthError::InvalidCredentials)) => {
            tracing::debug!("Failed login attempt for {}", username);
            let errors = FormErrors::non_field(INVALID_LOGIN);
            return render_login(&state, &session, &form, Some(&errors)).await;
        }
        Err(err) => return Err(err.into()),
    };

    AuthSession::new(&session).login(user.id).await?;
    FlashSession::new(&session)
        .success(format!("Welcome back, {}!", user.username))
        .await?;

    let target = local_redirect_target(form.next.as_deref()).unwrap_or("/");

    Ok(Redirect::to(target).into_response())
}

pub async fn logout(session: Session) -> Result<Response, WebError> {
    let auth_session = AuthSession::new(&session);

    if auth_session.is_authenticated().await? {
        auth_session.logout().await?;
        FlashSession::new(&session)
            .info("You have been logged out.")
            .await?;
    }

    Ok(Redirect::to("/").into_response())
}

async fn render_register(
    state: &AppState,
    session: &Session,
    form: &RegisterForm,
    errors: Option<&FormErrors>,
) -> Result<Response, WebError> {
    let user = AuthGuard::new(&state.db, session).current_user().await?;

    let mut context = view::page_context(session, user.as_ref()).await?;
    context.insert("form", form);
    context.insert("errors", &errors);

    Ok(view::render("register.html", &context)?.into_response())
}

async fn render_login(
    state: &AppState,
    session: &Session,
    form: &LoginForm,
    errors: Option<&FormErrors>,
) -> Result<Response, WebError> {
    let user = AuthGuard::new(&state.db, session).current_user().await?;

    let mut context = view::page_context(session, user.as_ref()).await?;
    context.insert("form", form);
    context.insert("errors", &errors);

    Ok(view::render("login.html", &context)?.into_response())
}

use axum::{
    extract::DefaultBodyLimit,
    routing::get,
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        recipe::{CreateRecipeDto, RecipeDto, UpdateRecipeDto},
    },
    server::{
        config::Config,
        controller::{api, auth, category, recipe},
        media::MAX_IMAGE_BYTES,
        state::AppState,
    },
};

/// Request bodies may carry one image plus the text fields of the recipe form.
const MAX_FORM_BYTES: usize = MAX_IMAGE_BYTES + 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    info(title = "Cookbook API", description = "Read and write access to the recipe catalog"),
    paths(
        api::get_recipes,
        api::get_recipe_by_title,
        api::get_recipes_by_ingredient,
        api::get_recipes_by_category,
        api::get_recipes_by_author,
        api::create_recipe,
        api::update_recipe,
    ),
    components(schemas(RecipeDto, CreateRecipeDto, UpdateRecipeDto, ErrorDto)),
    modifiers(&BasicAuthScheme),
    tags((name = "recipe", description = "Recipe endpoints")),
)]
pub struct ApiDoc;

/// Registers the HTTP Basic scheme referenced by the write endpoints.
struct BasicAuthScheme;

impl Modify for BasicAuthScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Basic)),
            );
        }
    }
}

/// JSON API, mounted under `/api`.
fn api_router() -> Router<AppState> {
    Router::new()
        .route(
            "/recipes/",
            get(api::get_recipes).post(api::create_recipe),
        )
        // GET looks a recipe up by title, PUT updates it by ID
        .route(
            "/recipes/{recipe}",
            get(api::get_recipe_by_title).put(api::update_recipe),
        )
        .route(
            "/recipes/ingredient/{ingredient}",
            get(api::get_recipes_by_ingredient),
        )
        .route(
            "/recipes/category/{category_id}",
            get(api::get_recipes_by_category),
        )
        .route(
            "/recipes/author/{author_id}",
            get(api::get_recipes_by_author),
        )
}

/// Server-rendered pages.
fn page_router() -> Router<AppState> {
    Router::new()
        .route("/", get(recipe::home))
        .route("/recipes/", get(recipe::list))
        .route(
            "/recipe/create/",
            get(recipe::create_form).post(recipe::create),
        )
        .route("/recipe/{id}/", get(recipe::detail))
        .route(
            "/recipe/{id}/edit/",
            get(recipe::edit_form).post(recipe::edit),
        )
        .route(
            "/category/create/",
            get(category::create_form).post(category::create),
        )
        .route(
            "/register/",
            get(auth::register_form).post(auth::register),
        )
        .route("/login/", get(auth::login_form).post(auth::login))
        .route("/logout/", get(auth::logout).post(auth::logout))
        .layer(DefaultBodyLimit::max(MAX_FORM_BYTES))
}

pub fn router(config: &Config) -> Router<AppState> {
    Router::new()
        .merge(page_router())
        .nest("/api", api_router())
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .nest_service("/media", ServeDir::new(&config.media_dir))
        .layer(TraceLayer::new_for_http())
}

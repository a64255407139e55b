use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use axum_extra::{
    extract::WithRejection,
    headers::{authorization::Basic, Authorization},
    TypedHeader,
};

use crate::{
    model::{
        api::ErrorDto,
        recipe::{CreateRecipeDto, RecipeDto, UpdateRecipeDto},
    },
    server::{
        error::AppError,
        form::recipe::{validate_create_payload, validate_update_payload},
        middleware::auth::BasicAuthGuard,
        model::recipe::{CreateRecipeParams, Recipe, UpdateRecipeParams},
        service::recipe::RecipeService,
        state::AppState,
    },
};

/// Tag for grouping recipe endpoints in OpenAPI documentation
pub static RECIPE_TAG: &str = "recipe";

/// Basic credentials, if the client sent any.
type Credentials = Option<TypedHeader<Authorization<Basic>>>;

/// JSON body whose rejection renders as `ErrorDto`.
pub type JsonBody<T> = WithRejection<Json<T>, AppError>;

/// Path parameter whose rejection renders as `ErrorDto`.
pub type PathParam<T> = WithRejection<Path<T>, AppError>;

fn into_dtos(recipes: Vec<Recipe>) -> Json<Vec<RecipeDto>> {
    Json(recipes.into_iter().map(Recipe::into_dto).collect())
}

/// List every recipe.
///
/// # Returns
/// - `200 OK` - All recipes ordered by ID, possibly empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/recipes/",
    tag = RECIPE_TAG,
    responses(
        (status = 200, description = "All recipes", body = Vec<RecipeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recipes(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let recipes = RecipeService::new(&state.db).get_all().await?;

    Ok(into_dtos(recipes))
}

/// Get the recipe with exactly the given title.
///
/// # Returns
/// - `200 OK` - Matching recipe
/// - `404 Not Found` - No recipe has that title
#[utoipa::path(
    get,
    path = "/api/recipes/{recipe}",
    tag = RECIPE_TAG,
    params(
        ("recipe" = String, Path, description = "Exact recipe title")
    ),
    responses(
        (status = 200, description = "Matching recipe", body = RecipeDto),
        (status = 404, description = "No recipe with that title", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recipe_by_title(
    State(state): State<AppState>,
    WithRejection(Path(title), _): PathParam<String>,
) -> Result<impl IntoResponse, AppError> {
    let recipe = RecipeService::new(&state.db).find_by_title(&title).await?;

    Ok(Json(recipe.into_dto()))
}

/// Find recipes whose ingredients contain the given text.
///
/// Matching is a case-insensitive substring search.
///
/// # Returns
/// - `200 OK` - Matching recipes
/// - `404 Not Found` - No recipe matches
#[utoipa::path(
    get,
    path = "/api/recipes/ingredient/{ingredient}",
    tag = RECIPE_TAG,
    params(
        ("ingredient" = String, Path, description = "Text to look for in the ingredients")
    ),
    responses(
        (status = 200, description = "Matching recipes", body = Vec<RecipeDto>),
        (status = 404, description = "No recipe matches", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recipes_by_ingredient(
    State(state): State<AppState>,
    WithRejection(Path(ingredient), _): PathParam<String>,
) -> Result<impl IntoResponse, AppError> {
    let recipes = RecipeService::new(&state.db)
        .find_by_ingredient(&ingredient)
        .await?;

    Ok(into_dtos(recipes))
}

/// Find recipes in a category.
///
/// # Returns
/// - `200 OK` - Recipes linked to the category
/// - `404 Not Found` - No recipe is linked to the category
#[utoipa::path(
    get,
    path = "/api/recipes/category/{category_id}",
    tag = RECIPE_TAG,
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Recipes in the category", body = Vec<RecipeDto>),
        (status = 404, description = "No recipes in the category", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recipes_by_category(
    State(state): State<AppState>,
    WithRejection(Path(category_id), _): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let recipes = RecipeService::new(&state.db)
        .find_by_category(category_id)
        .await?;

    Ok(into_dtos(recipes))
}

/// Find recipes written by a user.
///
/// # Returns
/// - `200 OK` - The author's recipes
/// - `404 Not Found` - The user has no recipes
#[utoipa::path(
    get,
    path = "/api/recipes/author/{author_id}",
    tag = RECIPE_TAG,
    params(
        ("author_id" = i32, Path, description = "User ID of the author")
    ),
    responses(
        (status = 200, description = "Recipes by the author", body = Vec<RecipeDto>),
        (status = 404, description = "No recipes by the author", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recipes_by_author(
    State(state): State<AppState>,
    WithRejection(Path(author_id), _): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let recipes = RecipeService::new(&state.db)
        .find_by_author(author_id)
        .await?;

    Ok(into_dtos(recipes))
}

/// Create a recipe.
///
/// The authenticated user becomes the author. The recipe and its category links are
/// stored together; if any category is unknown nothing is stored.
///
/// # Access Control
/// - HTTP Basic credentials of a registered user
///
/// # Returns
/// - `200 OK` - Created recipe
/// - `400 Bad Request` - Invalid payload
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `404 Not Found` - A category does not exist
#[utoipa::path(
    post,
    path = "/api/recipes/",
    tag = RECIPE_TAG,
    request_body = CreateRecipeDto,
    responses(
        (status = 200, description = "Created recipe", body = RecipeDto),
        (status = 400, description = "Invalid recipe data", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = [])),
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    credentials: Credentials,
    WithRejection(Json(payload), _): JsonBody<CreateRecipeDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = BasicAuthGuard::new(&state.db)
        .require(credentials.as_ref().map(|TypedHeader(auth)| auth))
        .await?;

    validate_create_payload(&payload)?;

    let params = CreateRecipeParams::from_dto(user.id, payload);
    let recipe = RecipeService::new(&state.db).create(params).await?;

    Ok(Json(recipe.into_dto()))
}

/// Partially update a recipe.
///
/// Only supplied fields change. A supplied `categories` list replaces every existing
/// link; if any category is unknown nothing changes.
///
/// # Access Control
/// - HTTP Basic credentials of the recipe's author
///
/// # Returns
/// - `200 OK` - Updated recipe
/// - `400 Bad Request` - Invalid payload
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `403 Forbidden` - Authenticated user is not the author
/// - `404 Not Found` - Recipe or category does not exist
#[utoipa::path(
    put,
    path = "/api/recipes/{recipe}",
    tag = RECIPE_TAG,
    params(
        ("recipe" = i32, Path, description = "Recipe ID")
    ),
    request_body = UpdateRecipeDto,
    responses(
        (status = 200, description = "Updated recipe", body = RecipeDto),
        (status = 400, description = "Invalid recipe data", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Not the author of the recipe", body = ErrorDto),
        (status = 404, description = "Recipe or category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("basic_auth" = [])),
)]
pub async fn update_recipe(
    State(state): State<AppState>,
    credentials: Credentials,
    WithRejection(Path(recipe_id), _): PathParam<i32>,
    WithRejection(Json(payload), _): JsonBody<UpdateRecipeDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = BasicAuthGuard::new(&state.db)
        .require(credentials.as_ref().map(|TypedHeader(auth)| auth))
        .await?;

    validate_update_payload(&payload)?;

    let params = UpdateRecipeParams::from_dto(recipe_id, payload);
    let recipe = RecipeService::new(&state.db).update(params, &user).await?;

    Ok(Json(recipe.into_dto()))
}

//! HTTP route handlers.

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::{Value, json};

use super::AppState;
use crate::error::{AppError, Result};
use crate::models::MovieRecord;
use crate::services::catalog::{MISSING_CATEGORY, MISSING_QUERY, parse_page};

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    page: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CategoryParams {
    category: Option<String>,
    page: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    query: Option<String>,
    page: Option<String>,
}

/// `GET /api/category/:category`
pub async fn category_by_path(
    State(state): State<AppState>,
    category: std::result::Result<Path<String>, PathRejection>,
    params: std::result::Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<Vec<MovieRecord>>> {
    let Path(category) = category?;
    let Query(params) = params?;
    let page = parse_page(params.page.as_deref())?;
    let movies = state.catalog.by_category(&category, page).await?;
    Ok(Json(movies))
}

/// `GET /api/get_by_category?category=&page=`
pub async fn category_by_query(
    State(state): State<AppState>,
    params: std::result::Result<Query<CategoryParams>, QueryRejection>,
) -> Result<Json<Vec<MovieRecord>>> {
    let Query(params) = params?;
    let category = params
        .category
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| AppError::client_input(MISSING_CATEGORY))?;
    let page = parse_page(params.page.as_deref())?;

    let movies = state.catalog.by_category(&category, page).await?;
    Ok(Json(movies))
}

/// `GET /api/search?query=&page=`
pub async fn search(
    State(state): State<AppState>,
    params: std::result::Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<MovieRecord>>> {
    let Query(params) = params?;
    let query = params
        .query
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| AppError::client_input(MISSING_QUERY))?;
    let page = parse_page(params.page.as_deref())?;

    let movies = state.catalog.search(&query, page).await?;
    Ok(Json(movies))
}

/// `GET /api/movie/:id`
pub async fn movie(
    State(state): State<AppState>,
    id: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<MovieRecord>> {
    let Path(id) = id?;
    let movie = state.catalog.by_id(&id).await?;
    Ok(Json(movie))
}

/// `GET /api/categories`
pub async fn categories(State(state): State<AppState>) -> Json<Vec<&'static str>> {
    Json(state.catalog.categories())
}

/// `GET /api/get_all_movies?page=`
pub async fn all_movies(
    State(state): State<AppState>,
    params: std::result::Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<Vec<MovieRecord>>> {
    let Query(params) = params?;
    let page = parse_page(params.page.as_deref())?;
    let movies = state.catalog.all(page).await?;
    Ok(Json(movies))
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Fallback for unknown routes.
pub async fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Rota não encontrada" })),
    )
}

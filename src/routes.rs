use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{MovieRecord, NewMovie},
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/movies", get(list_movies).post(add_movie))
        .route("/movies/{id}", put(mark_watched).delete(delete_movie))
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}

pub async fn list_movies(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<MovieRecord>>> {
    let rows = state.store.list().await?;
    Ok(Json(rows.into_iter().map(MovieRecord::from).collect()))
}

pub async fn add_movie(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewMovie>,
) -> AppResult<impl IntoResponse> {
    let id = state.store.insert(req).await?;
    tracing::debug!(id = id, "added movie");
    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

pub async fn mark_watched(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    if !state.store.mark_watched(id).await? {
        return Err(AppError::NotFound);
    }
    Ok(Json(json!({ "status": "updated" })))
}

pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    if !state.store.delete(id).await? {
        return Err(AppError::NotFound);
    }
    Ok(Json(json!({ "deleted": id })))
}

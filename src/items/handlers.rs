//! REST API handlers for shopping list operations
//!
//! Each handler is a pure request-to-response mapping over the item store.

use super::models::{AddedResponse, DeletedResponse, Item, ItemPatch, UpdatedResponse};
use super::store::SharedState;
use crate::error::AppError;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

/// Creates routes for item-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/items", get(list_items).post(add_item))
        .route(
            "/items/:name",
            get(get_item).patch(update_item).delete(delete_item),
        )
}

/// Endpoint: GET /items
/// Returns the full list of items as a JSON array.
async fn list_items(State(state): State<SharedState>) -> impl IntoResponse {
    Json(state.items.list())
}

/// Endpoint: POST /items
/// Appends a new item to the list. No validation is applied; missing fields
/// are defaulted.
async fn add_item(
    State(state): State<SharedState>,
    Json(payload): Json<Item>,
) -> impl IntoResponse {
    let added = state.items.append(payload);

    (StatusCode::CREATED, Json(AddedResponse { added }))
}

/// Endpoint: GET /items/:name
/// Returns the first item matching `name`.
async fn get_item(
    State(state): State<SharedState>,
    Path(name): Path<String>,
) -> Result<Json<Item>, AppError> {
    let item = state
        .items
        .find_by_name(&name)
        .ok_or(AppError::ItemNotFound)?;

    Ok(Json(item))
}

/// Endpoint: PATCH /items/:name
/// Shallow-merges the body into the first item matching `name`. Renaming is
/// allowed; subsequent lookups use the new name.
async fn update_item(
    State(state): State<SharedState>,
    Path(name): Path<String>,
    Json(patch): Json<ItemPatch>,
) -> Result<Json<UpdatedResponse>, AppError> {
    let updated = state
        .items
        .merge_by_name(&name, patch)
        .ok_or(AppError::ItemNotFound)?;

    Ok(Json(UpdatedResponse { updated }))
}

/// Endpoint: DELETE /items/:name
/// Removes the first item matching `name`.
async fn delete_item(
    State(state): State<SharedState>,
    Path(name): Path<String>,
) -> Result<Json<DeletedResponse>, AppError> {
    state
        .items
        .remove_by_name(&name)
        .ok_or(AppError::ItemNotFound)?;

    Ok(Json(DeletedResponse {
        message: "Deleted".to_string(),
    }))
}

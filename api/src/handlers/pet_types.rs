//! Pet type handlers
//!
//! Endpoints under `/types`.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use super::deleted_message;
use crate::domain::entities::{NewPetType, PetType, PetTypeId};
use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListPetTypesQuery {
    pub name: Option<String>,
}

/// Body for creating or replacing a pet type
#[derive(Debug, Deserialize)]
pub struct PetTypeRequest {
    pub name: Option<String>,
}

/// GET /types
pub async fn list_pet_types(
    State(state): State<AppState>,
    Query(query): Query<ListPetTypesQuery>,
) -> Result<Json<Vec<PetType>>, AppError> {
    let pet_types = match query.name {
        Some(name) => state.pet_type_service.find_by_name(&name).await?,
        None => state.pet_type_service.find_all().await?,
    };

    tracing::debug!(count = pet_types.len(), "Listed pet types");
    Ok(Json(pet_types))
}

/// GET /types/:id
pub async fn get_pet_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<PetType>, AppError> {
    let pet_type = state.pet_type_service.find_by_id(PetTypeId(id)).await?;
    Ok(Json(pet_type))
}

/// POST /types
pub async fn create_pet_type(
    State(state): State<AppState>,
    Json(request): Json<PetTypeRequest>,
) -> Result<(StatusCode, Json<PetType>), AppError> {
    let pet_type = state
        .pet_type_service
        .create(NewPetType { name: request.name })
        .await?;

    tracing::info!(pet_type_id = %pet_type.id, "Pet type created");
    Ok((StatusCode::CREATED, Json(pet_type)))
}

/// PUT /types/:id
pub async fn update_pet_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<PetTypeRequest>,
) -> Result<Json<PetType>, AppError> {
    let mut pet_type = state.pet_type_service.find_by_id(PetTypeId(id)).await?;
    pet_type.name = request.name;
    let pet_type = state.pet_type_service.update(pet_type).await?;

    tracing::info!(pet_type_id = %pet_type.id, "Pet type updated");
    Ok(Json(pet_type))
}

/// DELETE /types/:id
///
/// Fails with a 500 while any pet still has this type.
pub async fn delete_pet_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<String, AppError> {
    state.pet_type_service.delete(PetTypeId(id)).await?;

    tracing::info!(pet_type_id = id, "Pet type deleted");
    Ok(deleted_message(id))
}

//! Specialty handlers
//!
//! Endpoints under `/specialties`.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use super::deleted_message;
use crate::domain::entities::{NewSpecialty, Specialty, SpecialtyId};
use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListSpecialtiesQuery {
    pub name: Option<String>,
}

/// Body for creating or replacing a specialty
#[derive(Debug, Deserialize)]
pub struct SpecialtyRequest {
    pub name: Option<String>,
}

/// GET /specialties
pub async fn list_specialties(
    State(state): State<AppState>,
    Query(query): Query<ListSpecialtiesQuery>,
) -> Result<Json<Vec<Specialty>>, AppError> {
    let specialties = match query.name {
        Some(name) => state.specialty_service.find_by_name(&name).await?,
        None => state.specialty_service.find_all().await?,
    };

    tracing::debug!(count = specialties.len(), "Listed specialties");
    Ok(Json(specialties))
}

/// GET /specialties/:id
pub async fn get_specialty(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Specialty>, AppError> {
    let specialty = state.specialty_service.find_by_id(SpecialtyId(id)).await?;
    Ok(Json(specialty))
}

/// POST /specialties
pub async fn create_specialty(
    State(state): State<AppState>,
    Json(request): Json<SpecialtyRequest>,
) -> Result<(StatusCode, Json<Specialty>), AppError> {
    let specialty = state
        .specialty_service
        .create(NewSpecialty { name: request.name })
        .await?;

    tracing::info!(specialty_id = %specialty.id, "Specialty created");
    Ok((StatusCode::CREATED, Json(specialty)))
}

/// PUT /specialties/:id
pub async fn update_specialty(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<SpecialtyRequest>,
) -> Result<Json<Specialty>, AppError> {
    let mut specialty = state.specialty_service.find_by_id(SpecialtyId(id)).await?;
    specialty.name = request.name;
    let specialty = state.specialty_service.update(specialty).await?;

    tracing::info!(specialty_id = %specialty.id, "Specialty updated");
    Ok(Json(specialty))
}

/// DELETE /specialties/:id
pub async fn delete_specialty(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<String, AppError> {
    state.specialty_service.delete(SpecialtyId(id)).await?;

    tracing::info!(specialty_id = id, "Specialty deleted");
    Ok(deleted_message(id))
}

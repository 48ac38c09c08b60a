//! Vet handlers
//!
//! Endpoints under `/vets`. Vets are always returned with their
//! specialties; requests name specialties by id.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use super::deleted_message;
use crate::domain::entities::{NewVet, Specialty, SpecialtyId, Vet, VetId};
use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListVetsQuery {
    pub last_name: Option<String>,
}

/// A specialty reference inside a vet body. Only the id is used.
#[derive(Debug, Deserialize)]
pub struct SpecialtyRef {
    pub id: i32,
    pub name: Option<String>,
}

/// Body for creating or replacing a vet. A missing `specialties` list
/// means no specialties.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VetRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub specialties: Option<Vec<SpecialtyRef>>,
}

impl VetRequest {
    fn specialty_refs(&self) -> &[SpecialtyRef] {
        self.specialties.as_deref().unwrap_or_default()
    }
}

impl From<VetRequest> for NewVet {
    fn from(r: VetRequest) -> Self {
        let specialty_ids = r.specialty_refs().iter().map(|s| SpecialtyId(s.id)).collect();
        NewVet {
            first_name: r.first_name,
            last_name: r.last_name,
            specialty_ids,
        }
    }
}

/// GET /vets
pub async fn list_vets(
    State(state): State<AppState>,
    Query(query): Query<ListVetsQuery>,
) -> Result<Json<Vec<Vet>>, AppError> {
    let vets = match query.last_name {
        Some(last_name) => state.vet_service.find_by_last_name(&last_name).await?,
        None => state.vet_service.find_all().await?,
    };

    tracing::debug!(count = vets.len(), "Listed vets");
    Ok(Json(vets))
}

/// GET /vets/:id
pub async fn get_vet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vet>, AppError> {
    let vet = state.vet_service.find_by_id(VetId(id)).await?;
    Ok(Json(vet))
}

/// POST /vets
pub async fn create_vet(
    State(state): State<AppState>,
    Json(request): Json<VetRequest>,
) -> Result<(StatusCode, Json<Vet>), AppError> {
    let vet = state.vet_service.create(request.into()).await?;

    tracing::info!(
        vet_id = %vet.id,
        specialties = vet.specialties.len(),
        "Vet created"
    );
    Ok((StatusCode::CREATED, Json(vet)))
}

/// PUT /vets/:id
///
/// Replaces names and the whole specialty set.
pub async fn update_vet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<VetRequest>,
) -> Result<Json<Vet>, AppError> {
    let mut vet = state.vet_service.find_by_id(VetId(id)).await?;
    vet.specialties = request
        .specialty_refs()
        .iter()
        .map(|s| Specialty {
            id: SpecialtyId(s.id),
            name: s.name.clone(),
        })
        .collect();
    vet.first_name = request.first_name;
    vet.last_name = request.last_name;

    let vet = state.vet_service.update(vet).await?;

    tracing::info!(
        vet_id = %vet.id,
        specialties = vet.specialties.len(),
        "Vet updated"
    );
    Ok(Json(vet))
}

/// DELETE /vets/:id
pub async fn delete_vet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<String, AppError> {
    state.vet_service.delete(VetId(id)).await?;

    tracing::info!(vet_id = id, "Vet deleted");
    Ok(deleted_message(id))
}

//! Owner handlers
//!
//! Endpoints under `/owners`.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use super::deleted_message;
use crate::domain::entities::{NewOwner, Owner, OwnerId};
use crate::error::AppError;
use crate::AppState;

/// Optional exact-match filters for listing owners.
/// The first present filter wins, in field order.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOwnersQuery {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub city: Option<String>,
}

/// Body for creating or replacing an owner. Any `id` is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub telephone: Option<String>,
}

impl From<OwnerRequest> for NewOwner {
    fn from(r: OwnerRequest) -> Self {
        NewOwner {
            first_name: r.first_name,
            last_name: r.last_name,
            address: r.address,
            city: r.city,
            telephone: r.telephone,
        }
    }
}

/// GET /owners
pub async fn list_owners(
    State(state): State<AppState>,
    Query(query): Query<ListOwnersQuery>,
) -> Result<Json<Vec<Owner>>, AppError> {
    let service = &state.owner_service;
    let owners = if let Some(first_name) = query.first_name {
        service.find_by_first_name(&first_name).await?
    } else if let Some(last_name) = query.last_name {
        service.find_by_last_name(&last_name).await?
    } else if let Some(city) = query.city {
        service.find_by_city(&city).await?
    } else {
        service.find_all().await?
    };

    tracing::debug!(count = owners.len(), "Listed owners");
    Ok(Json(owners))
}

/// GET /owners/:id
pub async fn get_owner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Owner>, AppError> {
    let owner = state.owner_service.find_by_id(OwnerId(id)).await?;
    Ok(Json(owner))
}

/// POST /owners
pub async fn create_owner(
    State(state): State<AppState>,
    Json(request): Json<OwnerRequest>,
) -> Result<(StatusCode, Json<Owner>), AppError> {
    let owner = state.owner_service.create(request.into()).await?;

    tracing::info!(owner_id = %owner.id, "Owner created");
    Ok((StatusCode::CREATED, Json(owner)))
}

/// PUT /owners/:id
pub async fn update_owner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<OwnerRequest>,
) -> Result<Json<Owner>, AppError> {
    let mut owner = state.owner_service.find_by_id(OwnerId(id)).await?;
    owner.update_from(request.into());
    let owner = state.owner_service.update(owner).await?;

    tracing::info!(owner_id = %owner.id, "Owner updated");
    Ok(Json(owner))
}

/// DELETE /owners/:id
///
/// An owner whose pets are still stored cannot be removed; the foreign key
/// rejects the delete and the response is a 500.
pub async fn delete_owner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<String, AppError> {
    state.owner_service.delete(OwnerId(id)).await?;

    tracing::info!(owner_id = id, "Owner deleted");
    Ok(deleted_message(id))
}

//! Visit handlers
//!
//! Endpoints under `/visits`. Bodies and responses use `VisitDto`.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use super::deleted_message;
use crate::app::{parse_visit_date, VisitDto};
use crate::domain::entities::{PetId, VisitId};
use crate::error::AppError;
use crate::AppState;

/// Optional filters for listing visits. `visitDate` wins over `petId`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListVisitsQuery {
    pub visit_date: Option<String>,
    pub pet_id: Option<i32>,
}

/// GET /visits
pub async fn list_visits(
    State(state): State<AppState>,
    Query(query): Query<ListVisitsQuery>,
) -> Result<Json<Vec<VisitDto>>, AppError> {
    let service = &state.visit_service;
    let visits = match (query.visit_date, query.pet_id) {
        (Some(date), _) => service.find_by_visit_date(parse_visit_date(&date)?).await?,
        (None, Some(pet_id)) => service.find_by_pet(PetId(pet_id)).await?,
        (None, None) => service.find_all().await?,
    };

    tracing::debug!(count = visits.len(), "Listed visits");
    Ok(Json(visits.iter().map(VisitDto::from).collect()))
}

/// GET /visits/:id
pub async fn get_visit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<VisitDto>, AppError> {
    let visit = state.visit_service.find_by_id(VisitId(id)).await?;
    Ok(Json(VisitDto::from(&visit)))
}

/// POST /visits
///
/// `petId` is required and must name an existing pet.
pub async fn create_visit(
    State(state): State<AppState>,
    Json(request): Json<VisitDto>,
) -> Result<(StatusCode, Json<VisitDto>), AppError> {
    let visit = state.visit_service.create_from_dto(request).await?;

    tracing::info!(visit_id = %visit.id, pet_id = %visit.pet_id, "Visit created");
    Ok((StatusCode::CREATED, Json(VisitDto::from(&visit))))
}

/// PUT /visits/:id
pub async fn update_visit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<VisitDto>,
) -> Result<Json<VisitDto>, AppError> {
    let visit = state
        .visit_service
        .update_from_dto(VisitId(id), request)
        .await?;

    tracing::info!(visit_id = %visit.id, pet_id = %visit.pet_id, "Visit updated");
    Ok(Json(VisitDto::from(&visit)))
}

/// DELETE /visits/:id
pub async fn delete_visit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<String, AppError> {
    state.visit_service.delete(VisitId(id)).await?;

    tracing::info!(visit_id = id, "Visit deleted");
    Ok(deleted_message(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_list_query_defaults() {
        let query: ListVisitsQuery = serde_json::from_str("{}").unwrap();
        assert!(query.visit_date.is_none());
        assert!(query.pet_id.is_none());
    }

    #[test]
    fn parse_list_query_camel_case() {
        let query: ListVisitsQuery =
            serde_json::from_str(r#"{"visitDate": "2013-01-01", "petId": 7}"#).unwrap();
        assert_eq!(query.visit_date.as_deref(), Some("2013-01-01"));
        assert_eq!(query.pet_id, Some(7));
    }
}

//! PetClinic API Server
//!
//! CRUD REST backend for owners, pet types, specialties, vets and visits.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    PostgresOwnerRepository, PostgresPetRepository, PostgresPetTypeRepository,
    PostgresSpecialtyRepository, PostgresVetRepository, PostgresVisitRepository,
};
use app::{OwnerService, PetTypeService, SpecialtyService, VetService, VisitService};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub owner_service: Arc<OwnerService<PostgresOwnerRepository>>,
    pub pet_type_service: Arc<PetTypeService<PostgresPetTypeRepository>>,
    pub specialty_service: Arc<SpecialtyService<PostgresSpecialtyRepository>>,
    pub vet_service: Arc<VetService<PostgresVetRepository, PostgresSpecialtyRepository>>,
    pub visit_service: Arc<VisitService<PostgresVisitRepository, PostgresPetRepository>>,
}

impl AppState {
    /// Wire adapters and services over one connection pool
    pub fn new(db: DatabaseConnection) -> Self {
        let owner_repo = Arc::new(PostgresOwnerRepository::new(db.clone()));
        let pet_repo = Arc::new(PostgresPetRepository::new(db.clone()));
        let pet_type_repo = Arc::new(PostgresPetTypeRepository::new(db.clone()));
        let specialty_repo = Arc::new(PostgresSpecialtyRepository::new(db.clone()));
        let vet_repo = Arc::new(PostgresVetRepository::new(db.clone()));
        let visit_repo = Arc::new(PostgresVisitRepository::new(db));

        Self {
            owner_service: Arc::new(OwnerService::new(owner_repo)),
            pet_type_service: Arc::new(PetTypeService::new(pet_type_repo)),
            specialty_service: Arc::new(SpecialtyService::new(specialty_repo.clone())),
            vet_service: Arc::new(VetService::new(vet_repo, specialty_repo)),
            visit_service: Arc::new(VisitService::new(visit_repo, pet_repo)),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router with every collection route and the shared middleware
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Owners
        .route(
            "/owners",
            get(handlers::list_owners).post(handlers::create_owner),
        )
        .route(
            "/owners/:id",
            get(handlers::get_owner)
                .put(handlers::update_owner)
                .delete(handlers::delete_owner),
        )
        // Pet types
        .route(
            "/types",
            get(handlers::list_pet_types).post(handlers::create_pet_type),
        )
        .route(
            "/types/:id",
            get(handlers::get_pet_type)
                .put(handlers::update_pet_type)
                .delete(handlers::delete_pet_type),
        )
        // Specialties
        .route(
            "/specialties",
            get(handlers::list_specialties).post(handlers::create_specialty),
        )
        .route(
            "/specialties/:id",
            get(handlers::get_specialty)
                .put(handlers::update_specialty)
                .delete(handlers::delete_specialty),
        )
        // Vets
        .route("/vets", get(handlers::list_vets).post(handlers::create_vet))
        .route(
            "/vets/:id",
            get(handlers::get_vet)
                .put(handlers::update_vet)
                .delete(handlers::delete_vet),
        )
        // Visits
        .route(
            "/visits",
            get(handlers::list_visits).post(handlers::create_visit),
        )
        .route(
            "/visits/:id",
            get(handlers::get_visit)
                .put(handlers::update_visit)
                .delete(handlers::delete_visit),
        )
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,petclinic_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting PetClinic API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to the database
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url).await?;
    tracing::info!("Database connected");

    if config.run_migrations {
        tracing::info!("Applying migrations...");
        Migrator::up(&db, None).await?;
    }

    let app = build_router(AppState::new(db));

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

//! Routes for the cat registry.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Json, Router, routing::get};
use cattery_cats::application::command_handlers;
use cattery_cats::application::query_handlers::{self, CatView};
use cattery_cats::domain::commands;
use cattery_cats::domain::entities::CatChanges;
use cattery_core::id::CatId;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /cats.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCatRequest {
    /// The cat's name.
    pub name: String,
    /// The cat's breed.
    pub breed: String,
    /// When the cat was born.
    pub birth_date: DateTime<Utc>,
    /// When the cat died, if it has.
    pub death_date: Option<DateTime<Utc>>,
}

/// Request body for PATCH /cats/{id}. Missing or `null` fields stay as
/// they are; an `id` key is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCatRequest {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement breed.
    pub breed: Option<String>,
    /// Replacement birth date.
    pub birth_date: Option<DateTime<Utc>>,
    /// Replacement death date.
    pub death_date: Option<DateTime<Utc>>,
}

impl From<UpdateCatRequest> for CatChanges {
    fn from(request: UpdateCatRequest) -> Self {
        Self {
            name: request.name,
            breed: request.breed,
            birth_date: request.birth_date,
            death_date: request.death_date,
        }
    }
}

/// GET /cats
#[instrument(skip(state))]
async fn list_cats(State(state): State<AppState>) -> Json<Vec<CatView>> {
    let views =
        query_handlers::list_cats(state.cat_repository.as_ref(), state.clock.as_ref()).await;
    Json(views)
}

/// GET /cats/{id}
#[instrument(skip(state))]
async fn get_cat(
    State(state): State<AppState>,
    Path(cat_id): Path<CatId>,
) -> Result<Json<CatView>, ApiError> {
    let view = query_handlers::get_cat_by_id(
        cat_id,
        state.cat_repository.as_ref(),
        state.clock.as_ref(),
    )
    .await?;
    Ok(Json(view))
}

/// POST /cats
#[instrument(skip(state, request), fields(name = %request.name))]
async fn create_cat(
    State(state): State<AppState>,
    Json(request): Json<CreateCatRequest>,
) -> Result<(StatusCode, Json<CatView>), ApiError> {
    let command = commands::CreateCat {
        correlation_id: Uuid::new_v4(),
        name: request.name,
        breed: request.breed,
        birth_date: request.birth_date,
        death_date: request.death_date,
    };

    info!(correlation_id = %command.correlation_id, "handling create_cat command");

    let cat = command_handlers::handle_create_cat(&command, state.cat_repository.as_ref()).await?;

    Ok((
        StatusCode::CREATED,
        Json(CatView::from_cat(&cat, state.clock.now())),
    ))
}

/// PATCH /cats/{id}
#[instrument(skip(state, request))]
async fn update_cat(
    State(state): State<AppState>,
    Path(cat_id): Path<CatId>,
    Json(request): Json<UpdateCatRequest>,
) -> Result<Json<CatView>, ApiError> {
    let command = commands::UpdateCat {
        correlation_id: Uuid::new_v4(),
        cat_id,
        changes: request.into(),
    };

    info!(correlation_id = %command.correlation_id, "handling update_cat command");

    let cat = command_handlers::handle_update_cat(&command, state.cat_repository.as_ref()).await?;

    Ok(Json(CatView::from_cat(&cat, state.clock.now())))
}

/// DELETE /cats/{id}
#[instrument(skip(state))]
async fn delete_cat(
    State(state): State<AppState>,
    Path(cat_id): Path<CatId>,
) -> Result<StatusCode, ApiError> {
    let command = commands::DeleteCat {
        correlation_id: Uuid::new_v4(),
        cat_id,
    };

    info!(correlation_id = %command.correlation_id, "handling delete_cat command");

    command_handlers::handle_delete_cat(&command, state.cat_repository.as_ref()).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Returns the router for the cat registry.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cats", get(list_cats).post(create_cat))
        .route(
            "/cats/{id}",
            get(get_cat).patch(update_cat).delete(delete_cat),
        )
}

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::database::seed::Seed;
use crate::services::activities_service::{self, MessageView};
use crate::web::error::ApiError;
use crate::web::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    pub email: String,
}

pub async fn activities_handler(State(state): State<AppState>) -> Json<Seed> {
    Json(activities_service::list_activities(&state.directory))
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(state): State<AppState>,
) -> Result<Json<MessageView>, ApiError> {
    let view =
        activities_service::signup_for_activity(&state.directory, &activity_name, &query.email)?;
    Ok(Json(view))
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(state): State<AppState>,
) -> Result<Json<MessageView>, ApiError> {
    let view = activities_service::unregister_from_activity(
        &state.directory,
        &activity_name,
        &query.email,
    )?;
    Ok(Json(view))
}

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use eventboard_event::{CreateEventInput, JoinEventInput};
use eventboard_shared::event::EventId;
use crate::auth::AuthUser;
use crate::error::{AppError, AppResult};
use crate::extract::LenientJson;
use crate::routes::AppState;

/// Raw query pairs. Repeated keys are kept so the first `id` wins.
type QueryPairs = Query<Vec<(String, String)>>;

fn event_id(params: &[(String, String)]) -> AppResult<EventId> {
    params
        .iter()
        .find(|(key, _)| key == "id")
        .and_then(|(_, value)| value.parse().ok())
        .ok_or(AppError::InvalidEventId)
}

pub async fn list(State(app): State<AppState>) -> impl IntoResponse {
    Json(app.event_command.list().await)
}

pub async fn create(
    user: AuthUser,
    State(app): State<AppState>,
    LenientJson(input): LenientJson<CreateEventInput>,
) -> impl IntoResponse {
    let event = app.event_command.create(input, user.id).await;

    (StatusCode::CREATED, Json(event))
}

pub async fn details(
    State(app): State<AppState>,
    Query(params): QueryPairs,
) -> AppResult<impl IntoResponse> {
    let details = app.event_command.details(event_id(&params)?).await?;

    Ok(Json(details))
}

pub async fn join(
    user: AuthUser,
    State(app): State<AppState>,
    LenientJson(input): LenientJson<JoinEventInput>,
) -> AppResult<impl IntoResponse> {
    let event = app.event_command.join(input, user.id).await?;

    Ok(Json(event))
}

pub async fn participants(
    State(app): State<AppState>,
    Query(params): QueryPairs,
) -> AppResult<impl IntoResponse> {
    let usernames = app.event_command.participants(event_id(&params)?).await?;

    Ok(Json(usernames))
}

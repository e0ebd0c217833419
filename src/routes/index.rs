use axum::{extract::State, response::IntoResponse};

use crate::auth::AuthUser;
use crate::routes::AppState;
use crate::template::{IndexTemplate, render};

pub async fn page(user: Option<AuthUser>, State(app): State<AppState>) -> impl IntoResponse {
    let username = match user {
        Some(user) => app.user_command.load(user.id).await.map(|u| u.username),
        None => None,
    };

    render(IndexTemplate { username })
}

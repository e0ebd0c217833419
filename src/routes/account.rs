use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::CookieJar;
use eventboard_shared::user::Profile;
use eventboard_user::{LoginInput, RegisterInput};
use serde::Serialize;

use crate::auth::{AuthUser, build_cookie, generate_token, removal_cookie};
use crate::error::AppResult;
use crate::extract::LenientJson;
use crate::routes::AppState;

pub async fn register(
    State(app): State<AppState>,
    LenientJson(input): LenientJson<RegisterInput>,
) -> AppResult<impl IntoResponse> {
    let user = app.user_command.register(input).await?;

    Ok((StatusCode::CREATED, Json(Profile::from(&user))))
}

#[derive(Serialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub profile: Profile,
    pub token: String,
}

pub async fn login(
    State(app): State<AppState>,
    jar: CookieJar,
    LenientJson(input): LenientJson<LoginInput>,
) -> AppResult<impl IntoResponse> {
    let (user, access_id) = app.user_command.login(input).await?;

    let token = match generate_token(&app.config.session, user.id, &access_id) {
        Ok(token) => token,
        Err(e) => {
            app.user_command.logout(&access_id).await;
            return Err(e.into());
        }
    };

    Ok((
        jar.add(build_cookie(token.to_owned())),
        Json(LoginResponse {
            profile: Profile::from(&user),
            token,
        }),
    ))
}

/// Ends the caller's session only. Succeeds without a session too.
pub async fn logout(
    user: Option<AuthUser>,
    State(app): State<AppState>,
    jar: CookieJar,
) -> impl IntoResponse {
    if let Some(user) = user {
        app.user_command.logout(&user.access_id).await;
    }

    (jar.remove(removal_cookie()), Redirect::to("/"))
}

use std::{
    convert::Infallible,
    time::{SystemTime, UNIX_EPOCH},
};

use axum::{
    RequestPartsExt,
    extract::{FromRequestParts, OptionalFromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    TypedHeader,
    extract::{
        CookieJar,
        cookie::{Cookie, SameSite},
    },
    headers::{Authorization, authorization::Bearer},
};
use eventboard_shared::user::UserId;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{config::SessionConfig, error::AppError, routes::AppState};

pub const AUTH_COOKIE_NAME: &str = "session_token";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    aud: String,
    exp: u64,
    iat: u64,
    iss: String,
    sub: String,
    /// Access id of the server side session.
    sid: String,
}

pub fn generate_token(
    config: &SessionConfig,
    user_id: UserId,
    sid: &str,
) -> anyhow::Result<String> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let claims = Claims {
        aud: config.audience.to_owned(),
        exp: now.saturating_add(config.ttl().as_secs()),
        iat: now,
        iss: config.issuer.to_owned(),
        sub: user_id.to_string(),
        sid: sid.to_owned(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )?;

    Ok(token)
}

pub fn validate_token(config: &SessionConfig, token: &str) -> anyhow::Result<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[config.issuer.to_owned()]);
    validation.set_audience(&[config.audience.to_owned()]);

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;

    Ok(token_data.claims)
}

pub fn build_cookie<'a>(token: String) -> Cookie<'a> {
    Cookie::build((AUTH_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .build()
}

pub fn removal_cookie<'a>() -> Cookie<'a> {
    Cookie::build(AUTH_COOKIE_NAME).path("/").build()
}

/// The caller of a request carrying a live session, taken from the
/// `session_token` cookie or an `Authorization: Bearer` header.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: UserId,
    pub access_id: String,
}

async fn session_token(parts: &mut Parts) -> Option<String> {
    let jar = CookieJar::from_headers(&parts.headers);
    if let Some(cookie) = jar.get(AUTH_COOKIE_NAME) {
        return Some(cookie.value().to_owned());
    }

    parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .ok()
        .map(|TypedHeader(Authorization(bearer))| bearer.token().to_owned())
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token(parts)
            .await
            .ok_or(AppError::Unauthenticated)?;

        let claims = validate_token(&state.config.session, &token).map_err(|e| {
            tracing::debug!("rejected session token: {e}");
            AppError::Unauthenticated
        })?;

        let id = claims
            .sub
            .parse::<UserId>()
            .map_err(|_| AppError::Unauthenticated)?;

        match state.user_command.authenticate(&claims.sid).await {
            Some(user_id) if user_id == id => Ok(AuthUser {
                id,
                access_id: claims.sid,
            }),
            _ => Err(AppError::Unauthenticated),
        }
    }
}

impl OptionalFromRequestParts<AppState> for AuthUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(
            <AuthUser as FromRequestParts<AppState>>::from_request_parts(parts, state)
                .await
                .ok(),
        )
    }
}

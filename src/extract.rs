use std::convert::Infallible;

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// JSON body extractor that never rejects.
///
/// A missing, unreadable or malformed body yields `T::default()`, so handlers
/// behave as if the client sent an empty object. Content type is not checked.
pub struct LenientJson<T>(pub T);

impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let uri = req.uri().to_owned();

        let bytes = match Bytes::from_request(req, state).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(%uri, "failed to read request body: {e}");
                return Ok(Self(T::default()));
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(Self(value)),
            Err(e) => {
                tracing::warn!(%uri, "ignoring malformed json body: {e}");
                Ok(Self(T::default()))
            }
        }
    }
}

//! JSON body extractor whose rejection is a validation error.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use engine::{EngineError, ValidationErrors};
use serde::de::DeserializeOwned;

use crate::ServerError;

/// Like [`Json`], but a body that cannot be decoded is reported as a `422`
/// with the decoder message under the `body` field.
pub struct Payload<T>(pub T);

impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(EngineError::Validation(ValidationErrors::single(
                "body",
                rejection.body_text(),
            ))
            .into()),
        }
    }
}

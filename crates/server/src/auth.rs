//! Registration, login and the bearer-protected profile routes.

use api_types::{
    auth::{LoginPayload, TokenResponse},
    user::{UserPayload, UserView},
};
use axum::{Extension, Json, extract::State, http::StatusCode};
use engine::Session;

use crate::{
    ServerError,
    fields::{Fields, Presence},
    payload::Payload,
    server::{Identity, ServerState},
    users::new_user,
    views::map_user,
};

fn token_response(session: Session) -> TokenResponse {
    TokenResponse {
        user: map_user(session.user),
        access_token: session.token,
        token_type: "Bearer".to_string(),
    }
}

pub async fn register(
    State(state): State<ServerState>,
    Payload(payload): Payload<UserPayload>,
) -> Result<(StatusCode, Json<TokenResponse>), ServerError> {
    let input = new_user(payload)?;
    let session = state.engine.register(input).await?;
    tracing::info!("registered user {}", session.user.id);
    Ok((StatusCode::CREATED, Json(token_response(session))))
}

pub async fn login(
    State(state): State<ServerState>,
    Payload(payload): Payload<LoginPayload>,
) -> Result<Json<TokenResponse>, ServerError> {
    let mut fields = Fields::default();
    let email = fields.text("email", payload.email, Presence::Required);
    let password = fields.text("password", payload.password, Presence::Required);
    let (Some(email), Some(password)) = (email, password) else {
        return Err(fields.into_error());
    };

    let session = state.engine.login(&email, &password).await?;
    Ok(Json(token_response(session)))
}

pub async fn profile(Extension(identity): Extension<Identity>) -> Json<UserView> {
    Json(map_user(identity.user))
}

pub async fn logout(
    Extension(identity): Extension<Identity>,
    State(state): State<ServerState>,
) -> Result<StatusCode, ServerError> {
    state.engine.revoke_token(&identity.token).await?;
    Ok(StatusCode::NO_CONTENT)
}

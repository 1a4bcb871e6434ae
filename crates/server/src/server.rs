use axum::{
    Json, Router,
    extract::{FromRequestParts, Request, State},
    http::{StatusCode, request::Parts},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
    typed_header::TypedHeaderRejection,
};

use std::sync::Arc;

use crate::{ServerError, auth, budgets, categories, reports, transactions, users};
use api_types::ErrorResponse;
use engine::{Engine, EngineError, User};

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

/// The authenticated caller of a protected route, inserted by `require_user`.
#[derive(Clone, Debug)]
pub(crate) struct Identity {
    pub user: User,
    pub token: String,
}

/// The caller behind an optional bearer token.
///
/// Unlike the protected routes, a missing or unknown token is not an error
/// here; the handler simply gets `None`. A failing lookup is still an error.
pub(crate) struct MaybeUser(pub Option<User>);

impl FromRequestParts<ServerState> for MaybeUser {
    type Rejection = ServerError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        let Ok(TypedHeader(header)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await
        else {
            return Ok(Self(None));
        };

        match state.engine.authenticate(header.token()).await {
            Ok(user) => Ok(Self(Some(user))),
            Err(EngineError::Unauthorized(_)) => Ok(Self(None)),
            Err(err) => Err(err.into()),
        }
    }
}

async fn require_user(
    State(state): State<ServerState>,
    auth_header: Result<TypedHeader<Authorization<Bearer>>, TypedHeaderRejection>,
    mut request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    let Ok(TypedHeader(header)) = auth_header else {
        return Err(ServerError::Unauthenticated);
    };
    let token = header.token().to_string();
    if token.is_empty() {
        return Err(ServerError::Unauthenticated);
    }

    let user = match state.engine.authenticate(&token).await {
        Ok(user) => user,
        Err(EngineError::Unauthorized(_)) => return Err(ServerError::Unauthenticated),
        Err(err) => return Err(err.into()),
    };

    request.extensions_mut().insert(Identity { user, token });
    Ok(next.run(request).await)
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            message: "Not Found.".to_string(),
            errors: None,
        }),
    )
}

fn router(state: ServerState) -> Router {
    let protected = Router::new()
        .route("/profile", get(auth::profile))
        .route("/logout", post(auth::logout))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_user));

    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/kategoris", get(categories::list).post(categories::create))
        .route(
            "/kategoris/{id}",
            get(categories::show)
                .put(categories::update)
                .delete(categories::delete),
        )
        .route("/anggaran", get(budgets::list).post(budgets::create))
        .route(
            "/anggaran/{id}",
            get(budgets::show)
                .put(budgets::update)
                .delete(budgets::delete),
        )
        .route("/anggaran/user/{user_id}", get(budgets::by_user))
        .route("/users", get(users::list).post(users::create))
        .route(
            "/users/{id}",
            get(users::show).put(users::update).delete(users::delete),
        )
        .route(
            "/transaksi",
            get(transactions::list).post(transactions::create),
        )
        .route(
            "/transaksi/{id}",
            get(transactions::show)
                .put(transactions::update)
                .delete(transactions::delete),
        )
        .route("/transaksi/user/{user_id}", get(transactions::by_user))
        .route(
            "/laporan-keuangans",
            get(reports::list).post(reports::create),
        )
        .route(
            "/laporan-keuangans/{id}",
            get(reports::show)
                .put(reports::update)
                .delete(reports::delete),
        )
        .route("/laporan-keuangans/user/{user_id}", get(reports::by_user))
        .merge(protected)
        .fallback(not_found)
        .with_state(state)
}

/// Build the application router around `engine`.
pub fn app(engine: Engine) -> Router {
    router(ServerState {
        engine: Arc::new(engine),
    })
}

/// Serve the API on `listener` until ctrl-c is received.
pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app(engine))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

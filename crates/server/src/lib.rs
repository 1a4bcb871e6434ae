use api_types::ErrorResponse;
use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

pub use server::{app, run_with_listener};

mod auth;
mod budgets;
mod categories;
mod fields;
mod payload;
mod reports;
mod server;
mod transactions;
mod users;
mod views;

pub enum ServerError {
    Engine(EngineError),
    /// Missing, malformed or unknown bearer token.
    Unauthenticated,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::ExistingKey(_) | EngineError::InUse(_) => StatusCode::CONFLICT,
        EngineError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        EngineError::InvalidData(_) | EngineError::Password(_) | EngineError::Database(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn body_for_engine_error(err: EngineError) -> ErrorResponse {
    match err {
        EngineError::Validation(errors) => ErrorResponse {
            message: errors.to_string(),
            errors: Some(errors.into_fields()),
        },
        EngineError::InvalidData(_) | EngineError::Password(_) | EngineError::Database(_) => {
            tracing::error!("internal error: {err}");
            ErrorResponse {
                message: "internal server error".to_string(),
                errors: None,
            }
        }
        other => ErrorResponse {
            message: other.to_string(),
            errors: None,
        },
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            ServerError::Engine(err) => (status_for_engine_error(&err), body_for_engine_error(err)),
            ServerError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse {
                    message: "Unauthenticated.".to_string(),
                    errors: None,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

#[cfg(test)]
mod tests {
    use engine::ValidationErrors;

    use super::*;

    #[test]
    fn engine_validation_maps_to_422() {
        let errors = ValidationErrors::single("type", "The selected type is invalid.");
        let res = ServerError::from(EngineError::Validation(errors)).into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn engine_not_found_maps_to_404() {
        let res = ServerError::from(EngineError::KeyNotFound("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn engine_conflicts_map_to_409() {
        let res = ServerError::from(EngineError::ExistingKey("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::CONFLICT);
        let res = ServerError::from(EngineError::InUse("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn engine_unauthorized_maps_to_401() {
        let res =
            ServerError::from(EngineError::Unauthorized("invalid credentials".to_string()))
                .into_response();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn unauthenticated_maps_to_401() {
        let res = ServerError::Unauthenticated.into_response();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn stored_data_errors_map_to_500() {
        let res = ServerError::from(EngineError::InvalidData("bad".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn validation_body_carries_field_map() {
        let errors = ValidationErrors::single("name", "The name field is required.");
        let body = body_for_engine_error(EngineError::Validation(errors));
        assert_eq!(body.message, "The name field is required.");
        let fields = body.errors.unwrap();
        assert_eq!(fields["name"], vec!["The name field is required.".to_string()]);
    }
}

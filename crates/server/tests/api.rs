use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use sea_orm::{Database, DatabaseConnection};
use serde_json::{Value, json};
use tower::ServiceExt;

use engine::Engine;
use migration::MigratorTrait;

async fn app() -> Router {
    app_with_db().await.0
}

async fn app_with_db() -> (Router, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (server::app(engine), db)
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn register(app: &Router, email: &str) -> (i64, String) {
    let (status, body) = send(
        app,
        Method::POST,
        "/register",
        Some(json!({"name": "Alice", "email": email, "password": "password123"})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    (
        body["user"]["id"].as_i64().unwrap(),
        body["access_token"].as_str().unwrap().to_string(),
    )
}

#[tokio::test]
async fn category_crud() {
    let app = app().await;

    let (status, created) = send(
        &app,
        Method::POST,
        "/kategoris",
        Some(json!({"name": "Food", "type": "Pengeluaran"})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Food");
    assert_eq!(created["type"], "Pengeluaran");
    assert_eq!(created["user_id"], Value::Null);
    let id = created["id"].as_i64().unwrap();

    let (status, fetched) = send(&app, Method::GET, &format!("/kategoris/{id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/kategoris/{id}"),
        Some(json!({"type": "Income"})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["type"], "Pemasukan");
    assert_eq!(updated["name"], "Food");

    let (status, list) = send(&app, Method::GET, "/kategoris", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, body) = send(&app, Method::DELETE, &format!("/kategoris/{id}"), None, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&app, Method::GET, &format!("/kategoris/{id}"), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn invalid_category_type_is_rejected_and_not_stored() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/kategoris",
        Some(json!({"name": "Food", "type": "Invalid"})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["errors"]["type"].is_array());

    let (_, list) = send(&app, Method::GET, "/kategoris", None, None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn missing_fields_are_all_reported() {
    let app = app().await;

    let (status, body) = send(&app, Method::POST, "/anggaran", Some(json!({})), None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    for field in ["user_id", "category_id", "planned_amount", "period"] {
        assert!(body["errors"][field].is_array(), "missing {field}");
    }
}

#[tokio::test]
async fn malformed_json_is_a_validation_error() {
    let app = app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/kategoris")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["errors"]["body"].is_array());
}

#[tokio::test]
async fn updating_a_missing_budget_is_not_found() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/anggaran/42",
        Some(json!({"planned_amount": 100})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].is_string());

    let (_, list) = send(&app, Method::GET, "/anggaran", None, None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn budget_accepts_numeric_strings() {
    let app = app().await;
    let (user_id, _) = register(&app, "alice@example.com").await;
    let (_, category) = send(
        &app,
        Method::POST,
        "/kategoris",
        Some(json!({"name": "Rent", "type": "Pengeluaran"})),
        None,
    )
    .await;

    let (status, budget) = send(
        &app,
        Method::POST,
        "/anggaran",
        Some(json!({
            "user_id": user_id.to_string(),
            "category_id": category["id"],
            "planned_amount": "150000",
            "period": "2025-07",
        })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(budget["planned_amount"], 150_000);
    assert_eq!(budget["period"], "2025-07");

    let (status, list) = send(
        &app,
        Method::GET,
        &format!("/anggaran/user/{user_id}"),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([budget]));

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/kategoris/{}", category["id"]),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn budget_period_must_be_a_month() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/anggaran",
        Some(json!({
            "user_id": 1,
            "category_id": 1,
            "planned_amount": 10,
            "period": "2025-13",
        })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["errors"]["period"].is_array());
}

#[tokio::test]
async fn transactions_by_unknown_user_are_empty() {
    let app = app().await;

    let (status, body) = send(&app, Method::GET, "/transaksi/user/999", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn reports_by_unknown_user_are_not_found() {
    let app = app().await;

    let (status, body) = send(&app, Method::GET, "/laporan-keuangans/user/999", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].is_string());
    assert!(body.get("errors").is_none());
}

#[tokio::test]
async fn transaction_and_report_flow() {
    let app = app().await;
    let (user_id, _) = register(&app, "alice@example.com").await;

    let (status, tx) = send(
        &app,
        Method::POST,
        "/transaksi",
        Some(json!({
            "user_id": user_id,
            "date": "2025-05-19T10:00:00+07:00",
            "amount": 50000,
            "type": "Pemasukan",
        })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(tx["date"], "2025-05-19");
    assert_eq!(tx["category_id"], Value::Null);

    let (status, list) = send(
        &app,
        Method::GET,
        &format!("/transaksi/user/{user_id}"),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([tx.clone()]));

    let (status, report) = send(
        &app,
        Method::POST,
        "/laporan-keuangans",
        Some(json!({
            "user_id": user_id,
            "period": "2025-05",
            "total_income": 50000,
            "total_expense": 0,
        })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, reports) = send(
        &app,
        Method::GET,
        &format!("/laporan-keuangans/user/{user_id}"),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reports, json!([report]));

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/transaksi/{}", tx["id"]),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/transaksi/{}", tx["id"]),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn negative_amount_is_rejected() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/transaksi",
        Some(json!({"date": "2025-05-19", "amount": -1, "type": "Pengeluaran"})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["errors"]["amount"].is_array());
}

#[tokio::test]
async fn users_resource() {
    let app = app().await;

    let (status, user) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({"name": "Bob", "email": "bob@example.com", "password": "password123"})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(user.get("password").is_none());

    let (status, _) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({"name": "Bob", "email": "bob@example.com", "password": "password123"})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(&app, Method::GET, "/users/999", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, "/users/999", None, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let uri = format!("/users/{}", user["id"]);
    let (status, _) = send(&app, Method::DELETE, &uri, None, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, Method::GET, &uri, None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn auth_flow() {
    let app = app().await;
    let (user_id, token) = register(&app, "alice@example.com").await;

    let (status, profile) = send(&app, Method::GET, "/profile", None, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["id"], user_id);

    let (status, body) = send(
        &app,
        Method::POST,
        "/login",
        Some(json!({"email": "alice@example.com", "password": "password123"})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "Bearer");

    let (status, _) = send(
        &app,
        Method::POST,
        "/login",
        Some(json!({"email": "alice@example.com", "password": "wrong-password"})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, Method::POST, "/logout", None, Some(&token)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, Method::GET, "/profile", None, Some(&token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn profile_requires_a_token() {
    let app = app().await;

    let (status, _) = send(&app, Method::GET, "/profile", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, Method::GET, "/profile", None, Some("bogus")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn register_reports_taken_email_as_validation_error() {
    let app = app().await;
    register(&app, "alice@example.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/register",
        Some(json!({"name": "Eve", "email": "alice@example.com", "password": "password123"})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["errors"]["email"].is_array());
}

#[tokio::test]
async fn category_defaults_to_the_caller() {
    let app = app().await;
    let (user_id, token) = register(&app, "alice@example.com").await;

    let (status, category) = send(
        &app,
        Method::POST,
        "/kategoris",
        Some(json!({"name": "Salary", "type": "Pemasukan"})),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(category["user_id"], user_id);
}

#[tokio::test]
async fn unknown_routes_return_json_404() {
    let app = app().await;

    let (status, body) = send(&app, Method::GET, "/nope", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Not Found.");
}

#[tokio::test]
async fn user_with_a_budget_cannot_be_deleted() {
    let app = app().await;
    let (user_id, _) = register(&app, "alice@example.com").await;
    let (_, category) = send(
        &app,
        Method::POST,
        "/kategoris",
        Some(json!({"name": "Rent", "type": "Pengeluaran"})),
        None,
    )
    .await;
    let (_, budget) = send(
        &app,
        Method::POST,
        "/anggaran",
        Some(json!({
            "user_id": user_id,
            "category_id": category["id"],
            "planned_amount": 1000,
            "period": "2025-08",
        })),
        None,
    )
    .await;

    let user_uri = format!("/users/{user_id}");
    let (status, body) = send(&app, Method::DELETE, &user_uri, None, None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["message"].is_string());

    let (status, _) = send(&app, Method::GET, &user_uri, None, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/anggaran/{}", budget["id"]),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::DELETE, &user_uri, None, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, Method::GET, &user_uri, None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_update_of_a_missing_budget_is_a_validation_error() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/anggaran/42",
        Some(json!({"period": "someday"})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["errors"]["period"].is_array());

    let (status, _) = send(
        &app,
        Method::PUT,
        "/anggaran/42",
        Some(json!({"period": "2025-09"})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn failing_token_lookup_does_not_create_an_unowned_category() {
    let (app, db) = app_with_db().await;
    let (_, token) = register(&app, "alice@example.com").await;

    db.close().await.unwrap();

    let (status, body) = send(
        &app,
        Method::POST,
        "/kategoris",
        Some(json!({"name": "Salary", "type": "Pemasukan"})),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "internal server error");
}

use sea_orm::Database;

use engine::{Engine, EngineError, NewUser, User, UserPatch};
use migration::MigratorTrait;

async fn engine() -> Engine {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    Engine::builder().database(db).build().await.unwrap()
}

fn alice() -> NewUser {
    NewUser {
        name: "Alice".to_string(),
        email: "Alice@Example.com".to_string(),
        password: "correct horse".to_string(),
    }
}

#[tokio::test]
async fn register_issues_a_usable_token() {
    let engine = engine().await;

    let session = engine.register(alice()).await.unwrap();
    assert_eq!(session.user.email, "alice@example.com");
    assert!(!session.token.is_empty());

    let user = engine.authenticate(&session.token).await.unwrap();
    assert_eq!(user, session.user);
}

#[tokio::test]
async fn register_rejects_taken_email_and_short_password() {
    let engine = engine().await;
    engine.register(alice()).await.unwrap();

    let err = engine
        .register(NewUser {
            name: "Mallory".to_string(),
            email: "alice@example.com".to_string(),
            password: "short".to_string(),
        })
        .await
        .unwrap_err();

    match err {
        EngineError::Validation(errors) => {
            assert!(errors.contains("email"));
            assert!(errors.contains("password"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(engine.list::<User>().await.unwrap().len(), 1);
}

#[tokio::test]
async fn login_checks_the_password() {
    let engine = engine().await;
    engine.register(alice()).await.unwrap();

    let session = engine
        .login("alice@example.com", "correct horse")
        .await
        .unwrap();
    assert_eq!(session.user.name, "Alice");

    assert!(matches!(
        engine.login("alice@example.com", "wrong horse").await,
        Err(EngineError::Unauthorized(_))
    ));
    assert!(matches!(
        engine.login("nobody@example.com", "correct horse").await,
        Err(EngineError::Unauthorized(_))
    ));
}

#[tokio::test]
async fn users_created_through_the_resource_can_log_in() {
    let engine = engine().await;
    engine.create_user(alice()).await.unwrap();

    engine
        .login("alice@example.com", "correct horse")
        .await
        .unwrap();
}

#[tokio::test]
async fn revoked_tokens_stop_working() {
    let engine = engine().await;
    let session = engine.register(alice()).await.unwrap();
    let other = engine
        .login("alice@example.com", "correct horse")
        .await
        .unwrap();
    assert_ne!(session.token, other.token);

    engine.revoke_token(&session.token).await.unwrap();

    assert!(matches!(
        engine.authenticate(&session.token).await,
        Err(EngineError::Unauthorized(_))
    ));
    engine.authenticate(&other.token).await.unwrap();
    engine.revoke_token("unknown").await.unwrap();
}

#[tokio::test]
async fn deleting_a_user_revokes_its_tokens() {
    let engine = engine().await;
    let session = engine.register(alice()).await.unwrap();

    engine.delete::<User>(session.user.id).await.unwrap();

    assert!(matches!(
        engine.authenticate(&session.token).await,
        Err(EngineError::Unauthorized(_))
    ));
}

#[tokio::test]
async fn repeating_a_password_update_writes_nothing() {
    let engine = engine().await;
    let user = engine.create_user(alice()).await.unwrap();

    let patch = UserPatch {
        name: Some("A".to_string()),
        password: Some("newpassword1".to_string()),
        ..Default::default()
    };
    let first = engine.update_user(user.id, patch.clone()).await.unwrap();
    let second = engine.update_user(user.id, patch).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.updated_at, second.updated_at);

    engine
        .login("alice@example.com", "newpassword1")
        .await
        .unwrap();
    assert!(matches!(
        engine.login("alice@example.com", "correct horse").await,
        Err(EngineError::Unauthorized(_))
    ));
}

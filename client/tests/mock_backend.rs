//! End-to-end login and list calls over real HTTP against an in-process
//! axum backend, using the native `reqwest` transport.

use std::net::SocketAddr;

use axum::Json;
use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use serde_json::{Value, json};

use gestiones_client::config::ApiBase;
use gestiones_client::net::api::{ApiClient, ApiError, ListQuery};
use gestiones_client::net::auth::{AuthGateway, LoginError};
use gestiones_client::net::transport::ReqwestTransport;
use gestiones_client::state::session::{Role, Session, SessionStore};
use gestiones_client::util::storage::{KeyValueStore, MemoryStorage};

async fn login(Json(body): Json<Value>) -> (StatusCode, String) {
    match body["email"].as_str().unwrap_or_default() {
        "a@b.com" => (
            StatusCode::OK,
            json!({
                "token": "t1",
                "usuario": { "id": 7, "nombre": "Ana", "email": "a@b.com", "rol": "tecnico" }
            })
            .to_string(),
        ),
        "empty@b.com" => (StatusCode::OK, "{}".to_owned()),
        _ => (StatusCode::UNAUTHORIZED, json!({ "message": "bad credentials" }).to_string()),
    }
}

async fn expedientes(headers: HeaderMap) -> (StatusCode, String) {
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "Bearer t1");
    if !authorized {
        return (StatusCode::UNAUTHORIZED, String::new());
    }
    let body = json!({
        "data": [{ "codigo": "EXP-1", "estado": "pendiente", "activo": 1 }],
        "total": 1
    });
    (StatusCode::OK, body.to_string())
}

async fn spawn_backend() -> SocketAddr {
    let app = Router::new()
        .route("/auth/login", post(login))
        .route("/Expedientes", get(expedientes));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn gateway(addr: SocketAddr, storage: &MemoryStorage) -> AuthGateway<ReqwestTransport> {
    AuthGateway::new(
        ReqwestTransport::default(),
        ApiBase::new(&format!("http://{addr}/")),
        SessionStore::new(storage.clone()),
    )
}

#[tokio::test]
async fn scenario_a_login_over_http() {
    let addr = spawn_backend().await;
    let storage = MemoryStorage::new();
    let gateway = gateway(addr, &storage);

    gateway.login("a@b.com", "secret").await.unwrap();

    let session = gateway.session().get_session();
    assert_eq!(session.token.as_deref(), Some("t1"));
    assert_eq!(session.role, Some(Role::Technician));
    assert_eq!(session.user_id.as_deref(), Some("7"));
    assert_eq!(session.display_name.as_deref(), Some("Ana"));
    assert_eq!(storage.get("gestiones.token").as_deref(), Some("t1"));
}

#[tokio::test]
async fn scenario_b_rejection_over_http() {
    let addr = spawn_backend().await;
    let storage = MemoryStorage::new();
    let gateway = gateway(addr, &storage);

    let err = gateway.login("a@b.com.bad", "wrong").await.unwrap_err();

    assert!(matches!(err, LoginError::Http { status: 401, .. }));
    assert_eq!(err.to_string(), "bad credentials");
    assert_eq!(gateway.session().get_session(), Session::default());
    assert!(storage.is_empty());
}

#[tokio::test]
async fn scenario_c_empty_success_body_over_http() {
    let addr = spawn_backend().await;
    let storage = MemoryStorage::new();
    let gateway = gateway(addr, &storage);

    let err = gateway.login("empty@b.com", "secret").await.unwrap_err();

    assert!(matches!(err, LoginError::InvalidServerResponse));
    assert!(storage.is_empty());
}

#[tokio::test]
async fn unreachable_backend_is_network_error() {
    // Bind and drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let storage = MemoryStorage::new();
    let err = gateway(addr, &storage).login("a@b.com", "secret").await.unwrap_err();
    assert!(matches!(err, LoginError::NetworkUnreachable(_)), "{err:?}");
}

#[tokio::test]
async fn list_after_login_carries_bearer_token() {
    let addr = spawn_backend().await;
    let storage = MemoryStorage::new();
    let gateway = gateway(addr, &storage);
    gateway.login("a@b.com", "secret").await.unwrap();

    let client = ApiClient::new(
        ReqwestTransport::default(),
        ApiBase::new(&format!("http://{addr}")),
        gateway.session().clone(),
    );
    let page = client.list_expedientes(&ListQuery::default()).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.rows[0].codigo, "EXP-1");
}

#[tokio::test]
async fn stale_token_is_cleared_on_401() {
    let addr = spawn_backend().await;
    let storage = MemoryStorage::new();
    let session = SessionStore::new(storage.clone());
    session.set_session("expired", Some(Role::Technician), "7", None);

    let client = ApiClient::new(ReqwestTransport::default(), ApiBase::new(&format!("http://{addr}")), session.clone());
    let err = client.list_expedientes(&ListQuery::default()).await.unwrap_err();

    assert_eq!(err, ApiError::Unauthorized);
    assert!(!session.get_session().is_authenticated());
    assert!(storage.is_empty());
}
